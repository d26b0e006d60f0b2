//! Exclusion filtering stage

use crate::geo::rules::excluded_by;
use crate::geo::script::Script;
use crate::geo::transforms::{Runnable, TransformError};

/// Drops every line containing any exclusion substring.
///
/// The match is anywhere in the line, so a statement sharing a line with an
/// excluded directive (or a trailing `//` comment) is dropped with it.
pub struct FilterExcluded;

impl FilterExcluded {
    pub fn new() -> Self {
        FilterExcluded
    }
}

impl Default for FilterExcluded {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Script, Script> for FilterExcluded {
    fn run(&self, mut input: Script) -> Result<Script, TransformError> {
        input.retain(|line| match excluded_by(line) {
            Some(exclusion) => {
                tracing::debug!(exclusion = exclusion.name, %line, "dropped line");
                false
            }
            None => true,
        });
        Ok(input)
    }
}
