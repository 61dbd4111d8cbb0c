//! Main entry point for the sk-tui binary.
//!
//! Loads `.suggest-kit/` from the current directory and opens the prompt.

use anyhow::Result;
use sk_core::config::loader::load_config;
use sk_tui::run_app;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir()?;
    let config = load_config(&root).await?;
    run_app(config).await
}
