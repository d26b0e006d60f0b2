//! Standard transform definitions
//!
//! Base-name independent chains are static `once_cell::sync::Lazy` transforms. Chains
//! that rewrite filenames are built per base name.

use crate::geo::script::Script;
use crate::geo::transforms::stages::{
    FilterExcluded, InjectBlock, KeywordSubstitution, Normalized, StripBlankLines,
};
use crate::geo::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for script-to-script transforms
pub type CleanupTransform = Transform<Script, Script>;

/// Type alias for transforms producing the final script
pub type NormalizeTransform = Transform<Script, Normalized>;

/// Cleanup transform: Script → Script
///
/// 1. Blank line stripping
/// 2. Exclusion filtering
pub static CLEANUP: Lazy<CleanupTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripBlankLines::new())
        .then(FilterExcluded::new())
});

/// Rewriting transform: Script → Normalized
///
/// 1. Keyword substitution and surface list extraction
/// 2. Block injection
pub fn rewriting(base: &str) -> NormalizeTransform {
    Transform::from_fn(Ok)
        .then(KeywordSubstitution::new(base))
        .then(InjectBlock::new())
}

/// Full in-memory normalization: [`CLEANUP`] followed by [`rewriting`].
pub fn normalization(base: &str) -> NormalizeTransform {
    Transform::from_fn(Ok)
        .then_transform(&*CLEANUP)
        .then(KeywordSubstitution::new(base))
        .then(InjectBlock::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::transforms::TransformError;

    #[test]
    fn test_cleanup_strips_and_filters() {
        let script = Script::parse("a;\n\n// note\nMesh.Optimize = 1;\nb;\n");
        let result = CLEANUP.run(script).unwrap();
        assert_eq!(result.lines(), &["a;", "b;"]);
    }

    #[test]
    fn test_cleanup_is_reusable() {
        let first = CLEANUP.run(Script::parse("x;\n")).unwrap();
        let second = CLEANUP.run(Script::parse("y;\n")).unwrap();
        assert_eq!(first.lines(), &["x;"]);
        assert_eq!(second.lines(), &["y;"]);
    }

    #[test]
    fn test_normalization_requires_wall_group() {
        let result = normalization("wing").run(Script::parse("Merge \"a.brep\";\n"));
        assert!(matches!(
            result,
            Err(TransformError::UnresolvedFieldList { .. })
        ));
    }

    #[test]
    fn test_rewriting_skips_cleanup() {
        let script = Script::parse("// kept\nPhysical Surface(\"mg_wall\") = {3};\n");
        let result = rewriting("wing").run(script).unwrap();
        assert_eq!(result.script.lines()[0], "// kept");
    }
}
