// src/types/mod.rs
pub mod record;

pub use record::{AnalysisRecord, HistoryRow};
