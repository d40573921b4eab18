//! Domain error types
//!
//! This module defines the error hierarchy for Busplit. All errors are
//! domain-specific and don't expose third-party types; the CLI layer is
//! responsible for rendering them.

use thiserror::Error;

/// Main Busplit error type
///
/// This is the primary error type used throughout the application.
/// Each variant maps to one failure class of the split-and-deliver pipeline.
#[derive(Debug, Error)]
pub enum BusplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required column missing from the input table
    ///
    /// Fatal for the whole request; reported before any partition work.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The caller selected zero billing units
    #[error("No billing units selected - nothing to export")]
    EmptySelection,

    /// The same output name was planned for two different selector sets
    #[error("Duplicate output name in export plan: {0}")]
    DuplicateOutput(String),

    /// Spreadsheet codec or archive container failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Recipient input parsed to an empty list
    #[error("No recipients specified")]
    NoRecipients,

    /// A recipient address failed validation
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    /// Mail transport failure, wrapping the underlying cause
    ///
    /// The message is not queued or retried; the caller may re-trigger
    /// the send manually.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for BusplitError {
    fn from(err: std::io::Error) -> Self {
        BusplitError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BusplitError {
    fn from(err: toml::de::Error) -> Self {
        BusplitError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = BusplitError::Schema("'BU' column not found".to_string());
        assert_eq!(err.to_string(), "Schema error: 'BU' column not found");
    }

    #[test]
    fn test_empty_selection_display() {
        let err = BusplitError::EmptySelection;
        assert!(err.to_string().contains("nothing to export"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BusplitError = io_err.into();
        assert!(matches!(err, BusplitError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: BusplitError = toml_err.into();
        assert!(matches!(err, BusplitError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_busplit_error_implements_std_error() {
        let err = BusplitError::NoRecipients;
        let _: &dyn std::error::Error = &err;
    }
}
