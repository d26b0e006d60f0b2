//! Keyword substitution stage
//!
//! Runs in two passes so no rewrite depends on the iteration order of another:
//!
//! 1. Plan: every line is tested against [`SUBSTITUTIONS`] using its original text.
//!    The stage records the rewritten text per line index, the indices that need a
//!    trailing blank line (the line before an element-order match), and the surface
//!    list of the wall-group line.
//! 2. Apply: the planned rewrites and paddings are written back by index.

use std::collections::{BTreeMap, BTreeSet};

use crate::geo::extraction::FieldList;
use crate::geo::rules::{SubstitutionRule, SUBSTITUTIONS};
use crate::geo::script::Script;
use crate::geo::transforms::{Runnable, TransformError};

/// Output of [`KeywordSubstitution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub script: Script,
    /// Surface list of the wall-group line; `None` when no line carried one.
    pub fields: Option<FieldList>,
    /// Number of lines each rule rewrote, keyed by rule name.
    pub applied: BTreeMap<&'static str, usize>,
}

#[derive(Debug, Default)]
struct Plan {
    rewrites: BTreeMap<usize, String>,
    padded: BTreeSet<usize>,
    fields: Option<FieldList>,
    wall_lines: usize,
    applied: BTreeMap<&'static str, usize>,
}

/// Applies the substitution table for one output base name.
pub struct KeywordSubstitution {
    base: String,
}

impl KeywordSubstitution {
    pub fn new(base: impl Into<String>) -> Self {
        KeywordSubstitution { base: base.into() }
    }

    fn plan(&self, script: &Script) -> Plan {
        let mut plan = Plan::default();

        for (index, line) in script.lines().iter().enumerate() {
            let matched: Vec<&SubstitutionRule> =
                SUBSTITUTIONS.iter().filter(|r| r.matches(line)).collect();
            if matched.is_empty() {
                continue;
            }
            if matched.len() > 1 {
                let names: Vec<_> = matched.iter().map(|r| r.name).collect();
                tracing::warn!(line = index + 1, rules = ?names, "line matches several substitution rules");
            }

            let mut current = line.clone();
            for rule in matched {
                match rule.apply(&current, &self.base) {
                    Some(next) => {
                        tracing::debug!(line = index + 1, rule = rule.name, "rewrote line");
                        current = next;
                        *plan.applied.entry(rule.name).or_default() += 1;
                    }
                    None => {
                        tracing::debug!(
                            line = index + 1,
                            rule = rule.name,
                            "trigger present without quoted placeholder, line left unchanged"
                        );
                    }
                }
                if rule.pad_previous {
                    match index.checked_sub(1) {
                        Some(previous) => {
                            plan.padded.insert(previous);
                        }
                        None => tracing::debug!(rule = rule.name, "no previous line to pad"),
                    }
                }
                if rule.extract_fields {
                    plan.wall_lines += 1;
                    if plan.wall_lines > 1 {
                        tracing::warn!(
                            line = index + 1,
                            "repeated wall-group line, its surface list replaces the earlier one"
                        );
                    }
                    plan.fields = FieldList::extract(line);
                }
            }

            if current != *line {
                plan.rewrites.insert(index, current);
            }
        }

        plan
    }
}

impl Runnable<Script, Substituted> for KeywordSubstitution {
    fn run(&self, input: Script) -> Result<Substituted, TransformError> {
        let Plan {
            mut rewrites,
            padded,
            fields,
            applied,
            ..
        } = self.plan(&input);

        let lines = input.into_lines().into_iter().enumerate().map(|(index, line)| {
            let mut text = rewrites.remove(&index).unwrap_or(line);
            if padded.contains(&index) {
                text.push('\n');
            }
            text
        });

        Ok(Substituted {
            script: Script::from_lines(lines),
            fields,
            applied,
        })
    }
}
