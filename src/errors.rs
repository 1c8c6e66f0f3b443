// errors.rs
use std::fmt;

/// Errors originating from the sheet boundary (malformed payloads from the
/// remote spreadsheet API) or from report generation.
///
/// Row-level problems never surface here: malformed cells degrade to field
/// defaults during parsing. The only structural failure is a payload that
/// isn't a grid at all, i.e. the caller handed us nothing usable.
#[derive(Debug)]
pub enum StockError {
    /// No grid was provided: JSON null, or a payload that isn't an array of rows.
    InvalidInput(String),
    /// The external range store (read/write/append) reported a failure.
    Store(String),
    /// Workbook generation failed.
    Xlsx(String),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            StockError::Store(msg) => write!(f, "Store error: {msg}"),
            StockError::Xlsx(msg) => write!(f, "Xlsx error: {msg}"),
        }
    }
}

impl std::error::Error for StockError {}
