//! Test fixtures for building controllers and sample data.

use sk_core::display::{SharedSurface, SharedText};
use sk_core::source::{SourceFactory, StaticTransport};
use sk_core::SuggestController;
use sk_protocol::config_models::SuggestConfig;
use sk_protocol::ipc::Signal;
use sk_protocol::RawCandidate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// A controller plus handles to everything it talks to.
#[allow(dead_code)]
pub struct Harness {
    pub controller: SuggestController,
    pub input: SharedText,
    pub surface: SharedSurface,
    pub transport: StaticTransport,
    pub signals: mpsc::UnboundedReceiver<Signal>,
}

#[allow(dead_code)]
impl Harness {
    /// Signals emitted since the last call.
    pub fn drain(&mut self) -> Vec<Signal> {
        drain(&mut self.signals)
    }
}

/// Build a remote controller answering through `transport`.
#[allow(dead_code)]
pub fn remote_harness(config: SuggestConfig, transport: StaticTransport) -> Harness {
    let input = SharedText::default();
    let surface = SharedSurface::new();
    let source = SourceFactory::create(&config, Arc::new(transport.clone()));
    let mut controller = SuggestController::new(config, Some(source), input.clone(), surface.clone())
        .expect("valid remote config");
    let signals = controller.subscribe();

    Harness {
        controller,
        input,
        surface,
        transport,
        signals,
    }
}

/// Build a local-only controller.
#[allow(dead_code)]
pub fn local_harness(config: SuggestConfig) -> Harness {
    let input = SharedText::default();
    let surface = SharedSurface::new();
    let mut controller = SuggestController::new(config, None, input.clone(), surface.clone())
        .expect("valid local config");
    let signals = controller.subscribe();

    Harness {
        controller,
        input,
        surface,
        transport: StaticTransport::new(),
        signals,
    }
}

/// A backend that knows a handful of music genres.
///
/// - `ro` → Rock, Rockabilly
/// - `ja` → Jazz
/// - `zz` → the no-results marker
/// - `bad` → a body that is not JSON
/// - anything else → `[]`
#[allow(dead_code)]
pub fn genre_transport() -> StaticTransport {
    StaticTransport::new()
        .with_texts("ro", &["Rock", "Rockabilly"])
        .with_texts("roc", &["Rock"])
        .with_texts("ja", &["Jazz"])
        .with_response("zz", r#"{"noresults":true}"#)
        .with_response("bad", "<h1>502 Bad Gateway</h1>")
}

/// `count` plain labels: "Genre 1", "Genre 2", …
#[allow(dead_code)]
pub fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Genre {i}")).collect()
}

#[allow(dead_code)]
pub fn seed(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<RawCandidate>> {
    entries
        .iter()
        .map(|(query, texts)| {
            (
                query.to_string(),
                texts.iter().map(|t| RawCandidate::from(*t)).collect(),
            )
        })
        .collect()
}

#[allow(dead_code)]
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Signal>) -> Vec<Signal> {
    let mut signals = Vec::new();
    while let Ok(signal) = rx.try_recv() {
        signals.push(signal);
    }
    signals
}

/// Create a temporary project directory with a `.suggest-kit` configuration.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(config_toml: &str, seed_yaml: Option<&str>) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let sk_dir = temp_dir.path().join(".suggest-kit");
    std::fs::create_dir_all(&sk_dir)?;
    std::fs::write(sk_dir.join("config.toml"), config_toml)?;
    if let Some(seed_yaml) = seed_yaml {
        std::fs::write(sk_dir.join("seed.yaml"), seed_yaml)?;
    }
    Ok(temp_dir)
}
