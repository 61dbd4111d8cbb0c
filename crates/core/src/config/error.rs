//! Error types for configuration loading.
//!
//! This module defines all errors that can occur during configuration file
//! parsing and loading operations, plus the validation errors raised when a
//! controller is constructed from invalid settings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to parse YAML seed data.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Settings that cannot produce a working controller.
///
/// Construction fails with one of these; no partially built controller is
/// ever handed to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Remote mode without an endpoint.
    #[error("An endpoint URL is required unless local-only mode is enabled")]
    MissingEndpoint,

    /// Remote mode without anything able to reach the endpoint.
    #[error("No transport configured for endpoint '{0}'")]
    MissingTransport(String),

    /// A display limit of zero would never show anything.
    #[error("max-displayed must be at least 1")]
    ZeroMaxDisplayed,
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
