//! Top-level error type for building suggestion components.

use crate::config::error::{ConfigError, ConfigurationError};
use thiserror::Error;

/// Errors a host can see while setting up a controller.
///
/// Once a controller exists, nothing it does returns an error to the host:
/// failed resolutions become empty result lists and rejected commits are
/// reported as a `CommitOutcome`.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The settings cannot produce a working controller.
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The configuration files could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
