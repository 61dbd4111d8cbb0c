//! Configuration file loader for `.suggest-kit/` directory structure.
//!
//! This module provides functionality to load and parse all configuration files
//! from the `.suggest-kit/` directory, including:
//! - `config.toml`: Suggestion settings and transport
//! - `seed.yaml`: Seed candidates keyed by query text

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use sk_protocol::candidate::RawCandidate;
use std::collections::BTreeMap;
use std::path::Path;

/// Loads all configuration from the `.suggest-kit/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.suggest-kit/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. If the directory or
/// individual files are missing, defaults are used rather than an error.
/// Entries from `seed.yaml` are merged over any `seed-candidates` table in
/// `config.toml`.
///
/// # Errors
///
/// Returns `ConfigError` if files exist but cannot be read or have invalid
/// TOML/YAML syntax.
///
/// # Example
///
/// ```rust,no_run
/// use sk_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Min input length: {}", config.suggest.min_input_length);
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let sk_dir = root.join(".suggest-kit");

    if !sk_dir.exists() {
        return Ok(AppConfig::default());
    }

    let mut config = load_settings(&sk_dir)?;

    let seed = load_seed(&sk_dir)?;
    if !seed.is_empty() {
        config
            .suggest
            .seed_candidates
            .get_or_insert_with(BTreeMap::new)
            .extend(seed);
    }

    tracing::debug!(
        root = %root.display(),
        local_only = config.suggest.local_only,
        seeded = config.suggest.seed_candidates.as_ref().map_or(0, BTreeMap::len),
        "loaded suggest-kit configuration"
    );

    Ok(config)
}

/// Loads settings from `config.toml`.
fn load_settings(sk_dir: &Path) -> ConfigResult<AppConfig> {
    let config_path = sk_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path,
        source,
    })
}

/// Loads seed candidates from `seed.yaml`.
fn load_seed(sk_dir: &Path) -> ConfigResult<BTreeMap<String, Vec<RawCandidate>>> {
    let seed_path = sk_dir.join("seed.yaml");

    if !seed_path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = std::fs::read_to_string(&seed_path).map_err(|source| ConfigError::FileRead {
        path: seed_path.clone(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
        path: seed_path,
        source,
    })
}
