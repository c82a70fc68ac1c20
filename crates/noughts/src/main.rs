//! Noughts binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Settings};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    init_tracing(settings.log_file())?;
    info!(?settings, "Settings resolved");

    noughts::run(settings)
}

/// Sends tracing output to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
