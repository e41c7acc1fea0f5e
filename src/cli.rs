// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::analysis::{analyze, PersonalityAnalysis};
use crate::app_log;
use crate::core::{ConfigManager, ExportFormat, FsOps, HistoryStore};
use crate::types::AnalysisRecord;
use crate::utils::{
    fit_column, validate_file_extension, validate_resume_text, TextCheck, RESUME_EXTENSIONS,
};

#[derive(Parser)]
#[command(name = "cv-persona")]
#[command(about = "Estimate Big Five personality traits, seniority and industry from resume text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// History file, overriding the configured one
    #[arg(long, global = true)]
    pub history: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze resume text given inline, from a file, or on stdin
    Analyze {
        /// Resume text
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// Plain-text resume file (.txt, .md, .text)
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Print the analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
        /// Do not record the analysis in the history
        #[arg(long)]
        no_save: bool,
    },
    /// Browse and manage past analyses
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List analyses, newest first
    List,
    /// Print the full report of one analysis
    Show { id: String },
    /// Export the whole history to a file
    Export {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Delete every stored analysis
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

pub async fn handle_command(command: Command, config: &ConfigManager) -> Result<()> {
    match command {
        Command::Analyze {
            text,
            file,
            json,
            no_save,
        } => {
            let raw = load_resume_text(text, file.as_deref()).await?;
            let (text, check) = validate_resume_text(&raw, config.short_text_threshold)?;

            if let TextCheck::TooShort { chars, threshold } = check {
                app_log!(warn, "Resume text has {} characters (threshold {})", chars, threshold);
                eprintln!("⚠️  Resume text seems too short for accurate analysis");
            }

            // Open before analysing so a broken history file fails fast
            let mut store = if no_save {
                None
            } else {
                Some(HistoryStore::open(&config.history_path).await?)
            };

            let analysis = analyze(text);
            print_analysis(&analysis, json)?;

            if let Some(store) = store.as_mut() {
                let record = AnalysisRecord::from_analysis(&analysis);
                let id = record.short_id();
                store.append(record);
                store
                    .save()
                    .await
                    .context("Failed to save analysis history")?;
                app_log!(info, "Stored analysis {} in {}", id, store.path().display());
            }
        }

        Command::History { action } => {
            let mut store = HistoryStore::open(&config.history_path).await?;
            handle_history(action, &mut store).await?;
        }
    }

    Ok(())
}

async fn handle_history(action: HistoryCommand, store: &mut HistoryStore) -> Result<()> {
    match action {
        HistoryCommand::List => {
            if store.is_empty() {
                println!("No analyses recorded yet.");
                return Ok(());
            }

            println!(
                "{} {} {} {} {}",
                fit_column("ID", 8),
                fit_column("Analysis Time", 19),
                fit_column("Experience Level", 16),
                fit_column("Industry", 10),
                "Dominant Trait"
            );
            println!("{}", "-".repeat(80));
            for record in store.list() {
                println!(
                    "{} {} {} {} {}",
                    record.short_id(),
                    record.timestamp_display(),
                    fit_column(record.experience_level.as_str(), 16),
                    fit_column(record.industry.as_str(), 10),
                    record.dominant_trait
                );
            }
        }

        HistoryCommand::Show { id } => {
            let record = store.find(&id)?;
            println!("Analysis {} ({})\n", record.id, record.timestamp_display());
            println!("{}", record.full_report);
        }

        HistoryCommand::Export { path, format } => {
            store.export(&path, format).await?;
            println!("✅ History exported to {}", path.display());
        }

        HistoryCommand::Clear { yes } => {
            if !yes {
                anyhow::bail!(
                    "Refusing to clear {} analyses without --yes",
                    store.len()
                );
            }
            let removed = store.clear().await?;
            println!("✅ Cleared {} analyses", removed);
        }
    }

    Ok(())
}

async fn load_resume_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        validate_file_extension(path, RESUME_EXTENSIONS)?;
        let content = FsOps::read_text(path).await?;
        eprintln!("Loaded file: {}", path.display());
        return Ok(content);
    }

    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read resume text from stdin")?;
    Ok(buffer)
}

fn print_analysis(analysis: &PersonalityAnalysis, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")?;
        println!("{}", rendered);
    } else {
        println!("{}", analysis.report);
    }
    Ok(())
}
