//! Artifact relocation
//!
//! The mesh export writes its script and geometry to a scratch directory under fixed
//! names. Relocation copies both next to the final output, renamed by the output base
//! name, before any text processing happens.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::geo::error::NormalizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Script,
    Geometry,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Script => write!(f, "script"),
            ArtifactKind::Geometry => write!(f, "geometry"),
        }
    }
}

/// Where the export leaves its files and where outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scratch_dir: PathBuf,
    /// File name of the generated script inside `scratch_dir`.
    pub script_name: String,
    /// Appended to the shape identifier to name the scratch geometry file.
    pub geometry_suffix: String,
    pub geometry_extension: String,
    pub output_dir: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        ArtifactPaths {
            scratch_dir: PathBuf::from("/tmp"),
            script_name: "shape2mesh.geo".to_string(),
            geometry_suffix: "_Geometry".to_string(),
            geometry_extension: "brep".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ArtifactPaths {
    pub fn scratch_script(&self) -> PathBuf {
        self.scratch_dir.join(&self.script_name)
    }

    pub fn scratch_geometry(&self, shape: &str) -> PathBuf {
        self.scratch_dir.join(format!(
            "{shape}{}.{}",
            self.geometry_suffix, self.geometry_extension
        ))
    }

    pub fn script(&self, base: &str) -> PathBuf {
        self.output_dir.join(format!("{base}.geo"))
    }

    pub fn script_copy(&self, base: &str) -> PathBuf {
        self.output_dir.join(format!("{base}.geo.copy"))
    }

    pub fn geometry(&self, base: &str) -> PathBuf {
        self.output_dir.join(format!("{base}.brep"))
    }
}

/// Paths written by [`relocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocated {
    pub script_copy: PathBuf,
    pub geometry: PathBuf,
}

fn require(kind: ArtifactKind, path: PathBuf) -> Result<PathBuf, NormalizeError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(NormalizeError::MissingArtifact { kind, path })
    }
}

fn copy(from: &Path, to: &Path) -> Result<(), NormalizeError> {
    fs::copy(from, to).map_err(NormalizeError::io(from))?;
    tracing::debug!(from = %from.display(), to = %to.display(), "copied artifact");
    Ok(())
}

/// Copy the scratch script to `<base>.geo.copy` and the scratch geometry to
/// `<base>.brep`.
///
/// Both sources are checked first, so a missing artifact leaves the output directory
/// untouched.
pub fn relocate(
    paths: &ArtifactPaths,
    base: &str,
    shape: &str,
) -> Result<Relocated, NormalizeError> {
    let script = require(ArtifactKind::Script, paths.scratch_script())?;
    let geometry = require(ArtifactKind::Geometry, paths.scratch_geometry(shape))?;

    let relocated = Relocated {
        script_copy: paths.script_copy(base),
        geometry: paths.geometry(base),
    };
    copy(&script, &relocated.script_copy)?;
    copy(&geometry, &relocated.geometry)?;

    tracing::info!(
        script = %relocated.script_copy.display(),
        geometry = %relocated.geometry.display(),
        "relocated export artifacts"
    );
    Ok(relocated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(scratch: &TempDir, out: &TempDir) -> ArtifactPaths {
        ArtifactPaths {
            scratch_dir: scratch.path().to_path_buf(),
            output_dir: out.path().to_path_buf(),
            ..ArtifactPaths::default()
        }
    }

    #[test]
    fn test_default_names() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.scratch_script(), PathBuf::from("/tmp/shape2mesh.geo"));
        assert_eq!(
            paths.scratch_geometry("Cut"),
            PathBuf::from("/tmp/Cut_Geometry.brep")
        );
        assert_eq!(paths.script_copy("wing"), PathBuf::from("./wing.geo.copy"));
        assert_eq!(paths.geometry("wing"), PathBuf::from("./wing.brep"));
    }

    #[test]
    fn test_copies_both_artifacts() {
        let scratch = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(scratch.path().join("shape2mesh.geo"), "Merge \"x\";\n").unwrap();
        fs::write(scratch.path().join("Cut_Geometry.brep"), [0u8, 159, 146, 150]).unwrap();

        let relocated = relocate(&paths(&scratch, &out), "wing", "Cut").unwrap();

        assert_eq!(fs::read_to_string(&relocated.script_copy).unwrap(), "Merge \"x\";\n");
        assert_eq!(fs::read(&relocated.geometry).unwrap(), vec![0u8, 159, 146, 150]);
    }

    #[test]
    fn test_missing_geometry_creates_nothing() {
        let scratch = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(scratch.path().join("shape2mesh.geo"), "x;\n").unwrap();

        let err = relocate(&paths(&scratch, &out), "wing", "Other").unwrap_err();

        match err {
            NormalizeError::MissingArtifact { kind, path } => {
                assert_eq!(kind, ArtifactKind::Geometry);
                assert!(path.ends_with("Other_Geometry.brep"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
