// Finance Analyzer - Core Library
// Synthetic ledger generation + spending analysis, shared by the CLI and the TUI

pub mod analyzer;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod report;
pub mod transaction;

// Re-export commonly used types
pub use analyzer::{
    analyze, AnalysisReport, Anomaly, CategoryTotal, DatasetSummary, MonthlyTotal,
    WeekdayAverage, ANOMALY_THRESHOLD,
};
pub use config::{AnalysisConfig, DEFAULT_TRANSACTION_COUNT, MAX_TRANSACTION_COUNT};
pub use error::{AnalysisError, Result};
pub use export::write_csv;
pub use generator::{current_time, generate, Generator};
pub use transaction::{Category, Transaction};

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the default-size dataset, analyze it, and return the report text.
///
/// Each call starts from a fresh dataset; nothing carries over between calls.
pub fn run_analysis() -> String {
    run_analysis_with(&AnalysisConfig::default()).to_text()
}

/// Generate and analyze with a validated config, returning the structured report.
pub fn run_analysis_with(config: &AnalysisConfig) -> AnalysisReport {
    info!(count = config.transaction_count, "Running analysis");
    let transactions = Generator::from_entropy().generate(config.transaction_count);
    analyze(&transactions)
}
