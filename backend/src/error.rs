//! Error types for dataset loading and selection handling.
//!
//! Two families of errors exist:
//!
//! - [`DataLoadError`]: raised while building the [`Dataset`](crate::models::Dataset)
//!   at startup. These are fatal; the dashboard has nothing to render without data.
//! - [`InvalidSelectionError`]: raised when a selection event is rejected by the
//!   [`UpdateCoordinator`](crate::services::UpdateCoordinator). These are recoverable
//!   and leave the current selection untouched.

use std::path::PathBuf;

/// Result type for dataset loading.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Error raised while loading the launch table.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The configured data source does not exist.
    #[error("Data source not found: {}", path.display())]
    MissingSource { path: PathBuf },

    /// The data source exists but could not be read.
    #[error("Failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing error (unbalanced quotes, ragged rows, invalid UTF-8).
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A field could not be converted to its typed representation.
    #[error("Row {row}: invalid value '{value}' in column '{column}': {reason}")]
    InvalidField {
        /// 1-based data row number (the header is not counted).
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    /// The source has a header but no launch rows.
    #[error("Data source contains no launch records")]
    EmptyDataset,
}

/// Error raised when a selection event cannot be applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidSelectionError {
    #[error("Launch site '{site}' not found")]
    UnknownSite { site: String },

    #[error("Payload range is inverted: low {low} > high {high}")]
    InvertedRange { low: f64, high: f64 },

    #[error("Payload range bounds must be finite (low {low}, high {high})")]
    NonFiniteBound { low: f64, high: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = DataLoadError::MissingColumn { column: "class" };
        assert_eq!(err.to_string(), "Missing required column 'class'");
    }

    #[test]
    fn test_invalid_field_message_names_row_and_value() {
        let err = DataLoadError::InvalidField {
            row: 7,
            column: "Payload Mass (kg)",
            value: "heavy".to_string(),
            reason: "not a number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 7"));
        assert!(msg.contains("heavy"));
        assert!(msg.contains("Payload Mass (kg)"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DataLoadError = io.into();
        assert!(matches!(err, DataLoadError::Io(_)));
    }

    #[test]
    fn test_selection_error_messages() {
        let err = InvalidSelectionError::UnknownSite {
            site: "UNKNOWN_SITE".to_string(),
        };
        assert!(err.to_string().contains("UNKNOWN_SITE"));

        let err = InvalidSelectionError::InvertedRange {
            low: 6000.0,
            high: 2000.0,
        };
        assert!(err.to_string().contains("6000"));
        assert!(err.to_string().contains("2000"));
    }
}
