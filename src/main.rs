// ABOUTME: Command-line entry point that sorts and annotates an SSH client config file in place
// ABOUTME: Wires CLI arguments, optional logging settings and a single reformat pass together

mod app;
mod config;
mod ssh;

use anyhow::Result;
use app::Summary;
use clap::Parser;
use config::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sort, clean and annotate an SSH client config file in place.
#[derive(Parser, Debug)]
#[command(name = "sshsort", version, about)]
struct Cli {
    /// SSH config file to rewrite
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Logging settings file; ignored when missing or invalid
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Settings never abort a run: any failure falls back to defaults and is
/// returned so it can be logged once tracing is up.
fn settings_or_default(cli: &Cli) -> (Settings, Option<anyhow::Error>) {
    let loaded = match &cli.settings {
        Some(path) => Settings::load_or_default(path),
        None => {
            Settings::default_settings_path().and_then(|path| Settings::load_or_default(&path))
        }
    };

    match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

fn init_tracing(cli: &Cli, settings: &Settings) {
    let level = if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Summary> {
    tracing::debug!("Reformatting {}", cli.path.display());

    let summary = app::reformat_file(&cli.path)?;
    tracing::info!(
        "Rewrote {} ({} global, {} host blocks, {} with banners)",
        summary.path.display(),
        summary.global_blocks,
        summary.host_blocks,
        summary.annotated_blocks
    );

    Ok(summary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, settings_error) = settings_or_default(&cli);
    init_tracing(&cli, &settings);
    if let Some(e) = settings_error {
        tracing::warn!("Ignoring settings: {:#}", e);
    }

    run(&cli)?;
    println!("{}", app::SUCCESS_MESSAGE);
    Ok(())
}
