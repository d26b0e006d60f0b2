//! Errors raised by a normalization run

use std::io;
use std::path::PathBuf;

use crate::geo::relocation::ArtifactKind;
use crate::geo::transforms::TransformError;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A scratch file the CAD export should have produced is absent.
    #[error("missing {kind} artifact: {} (did the mesh export run for this shape?)", .path.display())]
    MissingArtifact { kind: ArtifactKind, path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl NormalizeError {
    /// Adapter for `map_err` that attaches the path being accessed.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| NormalizeError::Io { path, source }
    }
}
