//! Configuration loader for the all-nodes visitor generator.
//!
//! `defaults/visitorgen.default.toml` is embedded into the binary so that a
//! bare invocation reproduces the conventional header exactly. Callers layer
//! user files and CLI overrides on top via [`Loader`] before deserializing
//! into [`VisitorGenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/visitorgen.default.toml");

/// Top-level configuration consumed by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitorGenConfig {
    pub paths: PathsConfig,
    pub header: HeaderConfig,
    pub class: ClassConfig,
}

/// Where the node list is read from and the header is written to.
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Static text surrounding the generated class.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub includes: Vec<String>,
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassConfig {
    pub name: String,
    pub marker_interface: String,
    pub visitor_interface: String,
    pub visit_method: String,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<VisitorGenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VisitorGenConfig, ConfigError> {
    Loader::new().build()
}
