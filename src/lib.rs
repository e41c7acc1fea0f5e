//! Resume personality scoring.
//!
//! [`analysis`] holds the pure keyword scorer; [`core`] and [`cli`] are the
//! shell around it (configuration, file loading, history, command line).

pub mod analysis;
pub mod cli;
pub mod core;
pub mod types;
pub mod utils;

pub use analysis::{analyze, PersonalityAnalysis, PersonalityAnalyzer};
pub use types::AnalysisRecord;

/// Log through `tracing` at the named level: `app_log!(info, "Loaded {}", path)`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
