// src/core/mod.rs
//! Shell services around the analysis core: configuration, files and history

pub mod config_manager;
pub mod fs_ops;
pub mod history;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use history::{ExportFormat, HistoryStore};
