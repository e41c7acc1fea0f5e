// src/core/fs_ops.rs
//! File system helpers shared by the resume loader and the history store

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::app_log;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Read a UTF-8 text file; decoding failures surface as read errors
    pub async fn read_text(path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let content = String::from_utf8(bytes)
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

        app_log!(info, "Loaded {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Write through a sibling temp file and rename, so readers never see a partial file
    pub async fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        let tmp_path = Self::temp_sibling(path);
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;

        if let Err(e) = fs::rename(&tmp_path, path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e).with_context(|| format!("Failed to write file: {}", path.display()));
        }

        app_log!(info, "Written file: {}", path.display());
        Ok(())
    }

    /// Get file extension safely
    pub fn get_extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    /// Resolve `relative` against `base` unless it is already absolute
    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }

    fn temp_sibling(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}
