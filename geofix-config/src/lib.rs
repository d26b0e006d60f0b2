//! Shared configuration loader for the geofix toolchain.
//!
//! `defaults/geofix.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GeofixConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use geofix_core::ArtifactPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/geofix.default.toml");

/// Top-level configuration consumed by geofix applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GeofixConfig {
    pub scratch: ScratchConfig,
    pub output: OutputConfig,
}

/// Where the CAD mesh export leaves its artifacts.
#[derive(Debug, Clone, Deserialize)]
pub struct ScratchConfig {
    pub dir: PathBuf,
    pub script: String,
    pub geometry_suffix: String,
    pub geometry_extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl GeofixConfig {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            scratch_dir: self.scratch.dir.clone(),
            script_name: self.scratch.script.clone(),
            geometry_suffix: self.scratch.geometry_suffix.clone(),
            geometry_extension: self.scratch.geometry_extension.clone(),
            output_dir: self.output.dir.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GeofixConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GeofixConfig, ConfigError> {
    Loader::new().build()
}
