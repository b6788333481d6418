//! Shared configuration loader for the docsmd toolchain.
//!
//! `defaults/docsmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DocsmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use docsmd_babel::{BuildOptions, SubmissionPolicy};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/docsmd.default.toml");

/// Top-level configuration consumed by docsmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsmdConfig {
    pub convert: ConvertConfig,
    pub submit: SubmitConfig,
}

/// Markdown → document conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub bullet_preset: String,
    pub numbered_preset: String,
    pub default_title: String,
}

impl From<&ConvertConfig> for BuildOptions {
    fn from(config: &ConvertConfig) -> Self {
        BuildOptions {
            bullet_preset: config.bullet_preset.clone(),
            numbered_preset: config.numbered_preset.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitConfig {
    pub policy: PolicyKind,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "atomic")]
    Atomic,
    #[serde(rename = "sequential")]
    Sequential,
}

impl From<&SubmitConfig> for SubmissionPolicy {
    fn from(config: &SubmitConfig) -> Self {
        match config.policy {
            PolicyKind::Atomic => SubmissionPolicy::Atomic,
            PolicyKind::Sequential => {
                SubmissionPolicy::sequential(Duration::from_millis(config.delay_ms))
            }
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

    /// Apply a single key/value override (CLI flags end up here).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DocsmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocsmdConfig, ConfigError> {
    Loader::new().build()
}
