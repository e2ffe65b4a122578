/// Error types for the MPA dashboard core.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MpaError {
    /// Failed to parse the MPA catalog CSV
    #[error("Failed to parse catalog CSV: {0}")]
    CsvParse(#[from] csv::Error),
    /// Failed to parse a calendar date
    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Result type alias for MPA core operations
pub type Result<T> = std::result::Result<T, MpaError>;
