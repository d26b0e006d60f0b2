//! Block injection stage
//!
//! Appends the meshing parameters and the distance-based refinement field after the
//! substituted script. Only the `SurfacesList` line depends on the input.

use std::collections::BTreeMap;

use crate::geo::extraction::FieldList;
use crate::geo::rules::WALL_GROUP_TRIGGER;
use crate::geo::script::Script;
use crate::geo::transforms::stages::Substituted;
use crate::geo::transforms::{Runnable, TransformError};

/// Final pipeline output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub script: Script,
    pub fields: FieldList,
    pub applied: BTreeMap<&'static str, usize>,
    pub injected: usize,
}

/// Lines appended after substitution, in order.
pub fn appended_block(fields: &FieldList) -> Vec<String> {
    vec![
        "Mesh.MshFileVersion = 2.2;".to_string(),
        "Mesh.MeshSizeExtendFromBoundary = 0;".to_string(),
        "Mesh.RandomFactor = 1e-6;\n".to_string(),
        "lc = 10;".to_string(),
        "Field[1] = Distance;".to_string(),
        format!("Field[1].SurfacesList = {{{}}};", fields.as_str()),
        "Field[1].NumPointsPerCurve = 200;".to_string(),
        "Field[2] = MathEval;".to_string(),
        "Field[2].F = Sprintf(\"F1/5 + %g\", lc);".to_string(),
        "Background Field = 2;".to_string(),
    ]
}

pub struct InjectBlock;

impl InjectBlock {
    pub fn new() -> Self {
        InjectBlock
    }
}

impl Default for InjectBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Substituted, Normalized> for InjectBlock {
    fn run(&self, input: Substituted) -> Result<Normalized, TransformError> {
        let Substituted {
            mut script,
            fields,
            applied,
        } = input;

        let fields = fields.ok_or_else(|| TransformError::UnresolvedFieldList {
            trigger: WALL_GROUP_TRIGGER.to_string(),
        })?;

        let block = appended_block(&fields);
        let injected = block.len();
        for line in block {
            script.push(line);
        }

        Ok(Normalized {
            script,
            fields,
            applied,
            injected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substituted(fields: Option<&str>) -> Substituted {
        Substituted {
            script: Script::from_lines(["Merge \"wing.brep\";\n"]),
            fields: fields.and_then(|f| FieldList::extract(&format!("{{{f}}}"))),
            applied: BTreeMap::new(),
        }
    }

    #[test]
    fn test_block_appended_after_existing_lines() {
        let result = InjectBlock::new().run(substituted(Some("A, B, C"))).unwrap();
        let lines = result.script.lines();
        assert_eq!(lines[0], "Merge \"wing.brep\";\n");
        assert_eq!(lines[1], "Mesh.MshFileVersion = 2.2;");
        assert_eq!(lines.last().unwrap(), "Background Field = 2;");
        assert_eq!(result.injected, 10);
        assert!(lines.contains(&"Field[1].SurfacesList = {A, B, C};".to_string()));
    }

    #[test]
    fn test_unresolved_field_list() {
        let err = InjectBlock::new().run(substituted(None)).unwrap_err();
        assert_eq!(
            err,
            TransformError::UnresolvedFieldList {
                trigger: "mg_wall".to_string()
            }
        );
    }
}
