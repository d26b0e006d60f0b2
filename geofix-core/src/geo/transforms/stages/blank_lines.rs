//! Blank line stripping stage

use crate::geo::script::Script;
use crate::geo::transforms::{Runnable, TransformError};

/// True when the line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drops empty and whitespace-only lines. Surviving lines are not modified.
pub struct StripBlankLines;

impl StripBlankLines {
    pub fn new() -> Self {
        StripBlankLines
    }
}

impl Default for StripBlankLines {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Script, Script> for StripBlankLines {
    fn run(&self, mut input: Script) -> Result<Script, TransformError> {
        let before = input.len();
        input.retain(|line| !is_blank(line));
        tracing::debug!(dropped = before - input.len(), "stripped blank lines");
        Ok(input)
    }
}
