//! Summary of a normalization run

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub base: String,
    pub script: PathBuf,
    pub geometry: PathBuf,
    pub lines_read: usize,
    pub blank_lines_dropped: usize,
    pub lines_excluded: usize,
    /// Lines rewritten per substitution rule name.
    pub rewrites: BTreeMap<&'static str, usize>,
    pub lines_injected: usize,
    /// Surfaces referenced by the distance refinement field.
    pub surfaces: Vec<String>,
}
