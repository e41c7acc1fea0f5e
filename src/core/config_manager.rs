// src/core/config_manager.rs
//! Configuration loading: optional config.yaml, environment overrides, defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::FsOps;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_HISTORY_FILE: &str = "cv_persona_history.json";
pub const DEFAULT_LOG_FILE: &str = "/tmp/cv_persona.log";
pub const DEFAULT_SHORT_TEXT_THRESHOLD: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub history_path: PathBuf,
    pub log_path: PathBuf,
    pub short_text_threshold: usize,
}

/// One environment section of config.yaml; unset keys fall back to defaults
#[derive(Debug, Clone, Default, Deserialize)]
struct EnvironmentSection {
    history_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    short_text_threshold: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl ConfigManager {
    /// Load configuration from `path` (or ./config.yaml), then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;

        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (base_dir.join(DEFAULT_CONFIG_FILE), false),
        };

        let file = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else if explicit {
            anyhow::bail!("Config file not found: {}", config_path.display());
        } else {
            ConfigFile::default()
        };

        let mut config = Self::from_section(&environment, &file, &base_dir);

        if let Ok(history) = std::env::var("CV_PERSONA_HISTORY") {
            if !history.trim().is_empty() {
                config.history_path = FsOps::normalize_path(&base_dir, Path::new(&history));
            }
        }

        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("CV_PERSONA_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn parse(content: &str) -> Result<ConfigFile> {
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn from_section(environment: &str, file: &ConfigFile, base_dir: &Path) -> Self {
        let section = match environment {
            "production" => &file.production,
            _ => &file.local,
        };

        let history_path = section
            .history_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));
        let log_path = section
            .log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            environment: environment.to_string(),
            history_path: FsOps::normalize_path(base_dir, &history_path),
            log_path: FsOps::normalize_path(base_dir, &log_path),
            short_text_threshold: section
                .short_text_threshold
                .unwrap_or(DEFAULT_SHORT_TEXT_THRESHOLD),
        }
    }

    /// Apply a `--history` flag
    pub fn with_history_path(mut self, path: PathBuf) -> Result<Self> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        self.history_path = FsOps::normalize_path(&base_dir, &path);
        Ok(self)
    }

    /// One-line summary for the startup log, written once logging is up
    pub fn summary(&self) -> String {
        format!(
            "environment={} history={} log={} short_text_threshold={}",
            self.environment,
            self.history_path.display(),
            self.log_path.display(),
            self.short_text_threshold
        )
    }
}
