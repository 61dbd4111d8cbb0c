//! `suggest`: run a suggest-kit project from the command line.
//!
//! Without a subcommand the interactive prompt opens; `suggest query`
//! resolves a single input and prints what the popup would show.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use colored::Colorize;
use sk_core::config::loader::load_config;
use sk_core::config::models::AppConfig;
use sk_core::display::{DisplayEntry, SharedSurface, SharedText};
use sk_core::runtime::resolve_now;
use sk_core::SuggestController;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SUGGEST_LOG=debug`.
const LOG_ENV: &str = "SUGGEST_LOG";

#[derive(Parser)]
#[command(name = "suggest")]
#[command(version, about = "Autocomplete suggestions from a .suggest-kit project")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root containing the `.suggest-kit/` directory
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive prompt (default)
    Tui,

    /// Print the suggestions shown for one input
    Query {
        /// Text as typed into the input field
        text: String,

        /// Emit the displayed entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let interactive = !matches!(cli.command, Some(Commands::Query { .. }));
    init_logging(cli.log_file.as_deref(), interactive)?;

    let config = load_config(&cli.root)
        .await
        .wrap_err_with(|| format!("Failed to load config from {}", cli.root.display()))?;

    match cli.command {
        None | Some(Commands::Tui) => sk_tui::run_app(config).await.map_err(|e| eyre!(e)),
        Some(Commands::Query { text, json }) => run_query(config, &text, json).await,
    }
}

/// Log to `log_file` when given. Otherwise log to stderr, except in the
/// interactive prompt where stderr output would corrupt the screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

async fn run_query(config: AppConfig, text: &str, json: bool) -> Result<()> {
    let surface = SharedSurface::new();
    let mut controller =
        SuggestController::from_app_config(config, SharedText::default(), surface.clone())?;

    let shown = resolve_now(&mut controller, text).await;
    tracing::debug!(query = text, shown, "one-shot query resolved");
    let state = surface.snapshot();
    let entries: &[DisplayEntry] = if shown { &state.entries } else { &[] };

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No suggestions".dimmed());
        return Ok(());
    }
    for entry in entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn format_entry(entry: &DisplayEntry) -> String {
    if !entry.selectable {
        return entry.text.dimmed().italic().to_string();
    }
    entry
        .markup
        .fragments()
        .iter()
        .map(|fragment| {
            if fragment.emphasized {
                fragment.text.bold().yellow().to_string()
            } else {
                fragment.text.clone()
            }
        })
        .collect()
}
