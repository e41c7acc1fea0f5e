// src/core/history.rs
//! Append-only analysis history backed by a JSON file

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::FsOps;
use crate::types::{AnalysisRecord, HistoryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// In-memory copy of the history file.
///
/// `open` reads the whole file and `save` rewrites it; there is no locking.
/// Two processes that open the same file and both save will keep only the
/// records of whichever saved last. Intended for one user running one
/// command at a time.
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<AnalysisRecord>,
}

impl HistoryStore {
    /// Load the history at `path`; a missing file is an empty history
    pub async fn open(path: &Path) -> Result<Self> {
        let records = if path.exists() {
            let content = FsOps::read_text(path).await?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse history file: {}", path.display()))?
            }
        } else {
            Vec::new()
        };

        app_log!(
            info,
            "Opened history {} with {} records",
            path.display(),
            records.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record in memory; call [`HistoryStore::save`] to persist it
    pub fn append(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    /// Newest first
    pub fn list(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter().rev()
    }

    /// Find a record by full id or unambiguous prefix of its simple (hyphen-free) form
    pub fn find(&self, id: &str) -> Result<&AnalysisRecord> {
        let needle = id.trim().to_lowercase().replace('-', "");
        if needle.is_empty() {
            anyhow::bail!("Record id must not be empty");
        }

        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (None, _) => anyhow::bail!("No analysis found with id: {}", id),
            (Some(_), Some(_)) => anyhow::bail!("Id prefix is ambiguous: {}", id),
        }
    }

    /// Drop every record and persist the empty history
    pub async fn clear(&mut self) -> Result<usize> {
        let removed = self.records.len();
        let previous = std::mem::take(&mut self.records);

        if let Err(e) = self.save().await {
            self.records = previous;
            return Err(e);
        }

        app_log!(info, "Cleared {} history records", removed);
        Ok(removed)
    }

    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize analysis history")?;
        FsOps::write_atomic(&self.path, &json).await
    }

    /// Write the whole history, oldest first, to `target`
    pub async fn export(&self, target: &Path, format: ExportFormat) -> Result<()> {
        if self.records.is_empty() {
            anyhow::bail!("No analysis history to export");
        }

        let content = match format {
            ExportFormat::Json => serde_json::to_string_pretty(&self.records)
                .context("Failed to serialize analysis history")?,
            ExportFormat::Csv => self.to_csv()?,
        };

        FsOps::write_atomic(target, &content).await?;
        app_log!(
            info,
            "Exported {} records as {:?} to {}",
            self.records.len(),
            format,
            target.display()
        );
        Ok(())
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &self.records {
            writer
                .serialize(HistoryRow::from(record))
                .context("Failed to write CSV row")?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn record(text: &str) -> AnalysisRecord {
        AnalysisRecord::from_analysis(&analyze(text))
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(&dir.path().join("history.json"))
            .await
            .unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = HistoryStore::open(&path).await.err().unwrap();
        assert!(err.to_string().contains("Failed to parse history file"));
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path).await.unwrap();
        let first = record("Junior analyst");
        let second = record("Senior director");
        store.append(first.clone());
        store.append(second.clone());
        store.save().await.unwrap();

        let reopened = HistoryStore::open(&path).await.unwrap();
        let ids: Vec<_> = reopened.list().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_clear_persists_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path).await.unwrap();
        store.append(record("Intern"));
        store.save().await.unwrap();

        assert_eq!(store.clear().await.unwrap(), 1);
        assert!(store.is_empty());
        assert!(HistoryStore::open(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_stores_last_save_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut first = HistoryStore::open(&path).await.unwrap();
        let mut second = HistoryStore::open(&path).await.unwrap();
        let lost = record("Junior analyst");
        let kept = record("Senior director");

        first.append(lost.clone());
        first.save().await.unwrap();
        second.append(kept.clone());
        second.save().await.unwrap();

        let reopened = HistoryStore::open(&path).await.unwrap();
        let ids: Vec<_> = reopened.list().map(|r| r.id).collect();
        assert_eq!(ids, vec![kept.id]);
        assert_ne!(lost.id, kept.id);
    }

    #[tokio::test]
    async fn test_find_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(&dir.path().join("h.json")).await.unwrap();
        let entry = record("Consultant");
        store.append(entry.clone());

        assert_eq!(store.find(&entry.short_id()).unwrap().id, entry.id);
        assert_eq!(store.find(&entry.id.to_string()).unwrap().id, entry.id);
        assert!(store.find("").is_err());
    }

    #[tokio::test]
    async fn test_export_empty_history_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(&dir.path().join("h.json")).await.unwrap();
        let target = dir.path().join("out.json");

        let err = store.export(&target, ExportFormat::Json).await.unwrap_err();
        assert_eq!(err.to_string(), "No analysis history to export");
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_json_export_reopens_as_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(&dir.path().join("h.json")).await.unwrap();
        store.append(record("Senior software engineer"));
        store.append(record("Marketing specialist"));

        let target = dir.path().join("export.json");
        store.export(&target, ExportFormat::Json).await.unwrap();

        let exported = HistoryStore::open(&target).await.unwrap();
        let original: Vec<_> = store.list().cloned().collect();
        let restored: Vec<_> = exported.list().cloned().collect();
        assert_eq!(original, restored);
    }

    #[tokio::test]
    async fn test_csv_export_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(&dir.path().join("h.json")).await.unwrap();
        store.append(record("Senior software engineer"));
        store.append(record(""));

        let target = dir.path().join("export.csv");
        store.export(&target, ExportFormat::Csv).await.unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,timestamp,experience_level,industry,dominant_trait,openness"));
        assert!(lines[1].contains("Senior Level,Tech"));
        assert!(lines[2].contains("Entry Level,General"));
    }
}
