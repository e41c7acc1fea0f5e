use anyhow::{Context, Result};
use clap::Parser;
use cv_persona::app_log;
use cv_persona::cli::{handle_command, Cli};
use cv_persona::core::ConfigManager;
use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;
    if let Some(history) = cli.history {
        config = config.with_history_path(history)?;
    }

    init_logging(&config.log_path)?;

    app_log!(info, "Loaded configuration: {}", config.summary());

    handle_command(cli.command, &config).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        app_log!(error, "Command failed: {:#}", e);
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
