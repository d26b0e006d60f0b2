//! # geofix
//!
//! Normalizes the `.geo` script a CAD mesh export leaves in its scratch directory into
//! the parameterized form used for unattended Gmsh batch meshing.
//!
//! A run copies the exported script and geometry next to the output, then pushes the
//! script through a chain of line-oriented stages (see [`geo::transforms`]):
//! blank line stripping, exclusion filtering, keyword substitution with surface list
//! extraction, and injection of the refinement field block.
//!
//! ```rust,ignore
//! let report = geofix_core::normalize("oneram6", "Cut")?;
//! ```

pub mod geo;

pub use geo::error::NormalizeError;
pub use geo::normalizer::{normalize, normalize_script, Normalizer};
pub use geo::relocation::ArtifactPaths;
pub use geo::report::NormalizeReport;
