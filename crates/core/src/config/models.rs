//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines the
//! suggestion settings with the host-side transport definition.

use crate::config::error::ConfigurationError;
use serde::Deserialize;
use serde::Serialize;
use sk_protocol::config_models::SuggestConfig;
use std::path::PathBuf;

/// Unified application configuration loaded from `.suggest-kit/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Suggestion settings and the optional `[transport]` table
/// - `seed.yaml`: Query text → candidates used to prime the cache
///
/// # Example
///
/// ```toml
/// # .suggest-kit/config.toml
/// endpoint-url = "genres"
/// min-input-length = 2
///
/// [transport]
/// command = "python3"
/// args = ["backend.py"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Suggestion settings (top-level keys of `config.toml`).
    #[serde(flatten)]
    pub suggest: SuggestConfig,

    /// How remote requests are carried out.
    #[serde(default)]
    pub transport: Option<TransportConfig>,
}

/// External command that answers remote requests.
///
/// The command receives `<field>=<query>` as its last argument and
/// `SUGGEST_ENDPOINT` / `SUGGEST_METHOD` in its environment; its stdout is
/// the response body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Program to run.
    pub command: String,

    /// Arguments placed before the form pair.
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory; the current directory when absent.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

/// Check that `config` can drive a controller.
pub fn validate(config: &SuggestConfig) -> Result<(), ConfigurationError> {
    if config.max_displayed == 0 {
        return Err(ConfigurationError::ZeroMaxDisplayed);
    }
    if !config.local_only && config.endpoint_url.trim().is_empty() {
        return Err(ConfigurationError::MissingEndpoint);
    }
    Ok(())
}
