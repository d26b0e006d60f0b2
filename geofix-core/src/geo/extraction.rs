//! Surface list extraction for the distance refinement field

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// First `{...}` group, non-greedy, allowed to span lines.
static BRACE_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{(.*?)\}").unwrap());

/// Text found between the braces of the wall-group line.
///
/// The raw text is kept verbatim so the injected `SurfacesList` reproduces exactly
/// what the generator wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldList {
    raw: String,
}

impl FieldList {
    /// Extract the first brace group of `line`, if it has one.
    pub fn extract(line: &str) -> Option<Self> {
        BRACE_GROUP.captures(line).map(|caps| FieldList {
            raw: caps[1].to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Comma-separated entries, trimmed, empty entries skipped.
    pub fn identifiers(&self) -> Vec<&str> {
        self.raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
