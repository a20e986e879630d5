mod checks;
mod classifier;
mod config;
mod error;
mod parser;
mod report;
mod walker;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use classifier::SnippetClassifier;
use config::Cli;
use report::writer::ReportWriter;
use walker::CorpusWalker;

/// Load .env files from multiple locations with priority order:
/// 1. Current working directory (corpus-specific config)
/// 2. XDG config directory ~/.config/snippet-classifier/.env (global default config)
///
/// Environment variables set directly in the shell always take highest priority.
fn load_env_files() {
    let cwd_env = std::env::current_dir().map(|p| p.join(".env")).ok();
    if let Some(path) = cwd_env {
        if path.exists() && dotenv::from_path(&path).is_ok() {
            tracing::debug!("Loaded .env from: {}", path.display());
            return;
        }
    }

    if let Some(config_dir) = get_xdg_config_dir() {
        let xdg_env = config_dir.join("snippet-classifier").join(".env");
        if xdg_env.exists() && dotenv::from_path(&xdg_env).is_ok() {
            tracing::debug!("Loaded .env from: {}", xdg_env.display());
            return;
        }
    }

    tracing::debug!("No .env file found, using arguments and environment only");
}

/// Get XDG config directory, fallback to ~/.config
fn get_xdg_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

fn main() -> Result<()> {
    load_env_files();

    // Logs go to stderr so stdout only carries the confirmation.
    // Override the level with RUST_LOG (e.g. RUST_LOG=debug).
    let env_filter = EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Classifying {} snippets in {}",
        cli.language.as_str(),
        cli.root.display()
    );

    let classifier = SnippetClassifier::new(cli.code_parser());
    let records = CorpusWalker::new(classifier, cli.extension())
        .respect_ignore(cli.respect_ignore)
        .walk(&cli.root)
        .with_context(|| format!("Failed to classify corpus at {}", cli.root.display()))?;

    let written = ReportWriter::new(&cli.output_dir, &cli.root)
        .for_language(cli.language)
        .with_artifacts(&cli.artifacts())
        .write(&records)
        .with_context(|| format!("Failed to write reports to {}", cli.output_dir.display()))?;

    let counts = report::CategorySet::from_records(&records).counts();
    tracing::info!(
        "{} files: {} syntax errors, {} complete",
        records.len(),
        counts.syntax_errors,
        counts.complete
    );

    println!(
        "Classified {} snippets. Reports written to {}:",
        records.len(),
        cli.output_dir.display()
    );
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
