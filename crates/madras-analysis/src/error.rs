//! Error types for analysis operations.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur during ratio analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No statements were supplied
    #[error("No balance-sheet statements to analyze for {0}")]
    EmptyHistory(String),
}
