//! The script normalizer
//!
//! A run relocates the export artifacts, strips blank lines from the copied script
//! into `<base>.geo`, then filters, rewrites and extends that script and writes it
//! back in place. Any failure aborts the run; an interrupted run can leave the
//! `.geo.copy` intermediate or the blank-stripped `<base>.geo` behind.

use std::fs;
use std::path::Path;

use crate::geo::error::NormalizeError;
use crate::geo::relocation::{relocate, ArtifactPaths};
use crate::geo::report::NormalizeReport;
use crate::geo::script::Script;
use crate::geo::transforms::stages::blank_lines::is_blank;
use crate::geo::transforms::standard::{normalization, rewriting, CLEANUP};
use crate::geo::transforms::TransformError;

/// Normalize with the default locations: scratch files in `/tmp`, outputs in the
/// current working directory.
pub fn normalize(base: &str, shape: &str) -> Result<NormalizeReport, NormalizeError> {
    Normalizer::default().run(base, shape)
}

/// Normalize script text in memory, without touching the filesystem.
pub fn normalize_script(source: &str, base: &str) -> Result<String, TransformError> {
    let normalized = normalization(base).run(Script::parse(source))?;
    Ok(normalized.script.render())
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    paths: ArtifactPaths,
}

impl Normalizer {
    pub fn new(paths: ArtifactPaths) -> Self {
        Normalizer { paths }
    }

    pub fn run(&self, base: &str, shape: &str) -> Result<NormalizeReport, NormalizeError> {
        let span = tracing::info_span!("normalize", base, shape);
        let _enter = span.enter();

        let relocated = relocate(&self.paths, base, shape)?;
        let script_path = self.paths.script(base);

        let (lines_read, blank_lines_dropped) =
            strip_blank_lines(&relocated.script_copy, &script_path)?;

        let stripped = read_script(&script_path)?;
        let stripped_len = stripped.len();
        let filtered = CLEANUP.run(stripped)?;
        let lines_excluded = stripped_len - filtered.len();
        tracing::info!(excluded = lines_excluded, kept = filtered.len(), "filtered script");

        let normalized = rewriting(base).run(filtered)?;
        tracing::info!(
            rewrites = normalized.applied.values().sum::<usize>(),
            injected = normalized.injected,
            surfaces = normalized.fields.as_str(),
            "rewrote script"
        );

        fs::write(&script_path, normalized.script.render())
            .map_err(NormalizeError::io(&script_path))?;
        tracing::info!(script = %script_path.display(), "wrote normalized script");

        Ok(NormalizeReport {
            base: base.to_string(),
            script: script_path,
            geometry: relocated.geometry,
            lines_read,
            blank_lines_dropped,
            lines_excluded,
            rewrites: normalized.applied,
            lines_injected: normalized.injected,
            surfaces: normalized
                .fields
                .identifiers()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Copy non-blank lines from `copy` to `dest`, then delete `copy`.
///
/// Returns the number of lines read and the number dropped.
fn strip_blank_lines(copy: &Path, dest: &Path) -> Result<(usize, usize), NormalizeError> {
    let source = fs::read_to_string(copy).map_err(NormalizeError::io(copy))?;

    let (mut read, mut dropped) = (0, 0);
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        read += 1;
        if is_blank(line) {
            dropped += 1;
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    fs::write(dest, out).map_err(NormalizeError::io(dest))?;
    fs::remove_file(copy).map_err(NormalizeError::io(copy))?;

    tracing::info!(read, dropped, "stripped blank lines");
    Ok((read, dropped))
}

fn read_script(path: &Path) -> Result<Script, NormalizeError> {
    let source = fs::read_to_string(path).map_err(NormalizeError::io(path))?;
    Ok(Script::parse(&source))
}
