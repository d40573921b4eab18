//! Tabular codec abstraction
//!
//! This module defines the trait that spreadsheet codecs must implement to
//! work with the export assembler, plus a factory that picks the codec for
//! a file extension.

pub mod csv;
pub mod xlsx;

pub use self::csv::CsvCodec;
pub use self::xlsx::XlsxCodec;

use crate::config::OutputFormat;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use crate::domain::table::Table;
use std::path::Path;

/// Spreadsheet codec seam between the pipeline and the format libraries
///
/// Implementations must be deterministic: encoding the same table twice
/// yields byte-identical output.
pub trait TabularCodec: std::fmt::Debug {
    /// Decodes an uploaded file into a string-valued table
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the bytes are not a valid file of
    /// this format.
    fn decode(&self, bytes: &[u8]) -> Result<Table>;

    /// Encodes a table into a spreadsheet file
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if encoding fails.
    fn encode(&self, table: &Table) -> Result<Vec<u8>>;

    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// MIME type of encoded output
    fn mime_type(&self) -> &'static str;
}

/// Creates the codec for a configured output format
///
/// `header_row` is the number of physical rows skipped before the header
/// when decoding xlsx input; CSV input always has its header in row 0.
pub fn codec_for_format(format: OutputFormat, header_row: usize) -> Box<dyn TabularCodec> {
    match format {
        OutputFormat::Xlsx => Box::new(XlsxCodec::new(header_row)),
        OutputFormat::Csv => Box::new(CsvCodec::new()),
    }
}

/// Creates the codec matching an input file's extension
///
/// # Errors
///
/// Returns a `Serialization` error for unsupported extensions.
pub fn codec_for_path(path: &Path, header_row: usize) -> Result<Box<dyn TabularCodec>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" => Ok(Box::new(XlsxCodec::new(header_row))),
        "csv" => Ok(Box::new(CsvCodec::new())),
        other => Err(BusplitError::Serialization(format!(
            "Unsupported input format '.{other}' (expected .xlsx or .csv)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codec_for_path_xlsx() {
        let codec = codec_for_path(&PathBuf::from("report.XLSX"), 1).unwrap();
        assert_eq!(codec.extension(), "xlsx");
    }

    #[test]
    fn test_codec_for_path_csv() {
        let codec = codec_for_path(&PathBuf::from("report.csv"), 1).unwrap();
        assert_eq!(codec.extension(), "csv");
        assert_eq!(codec.mime_type(), "text/csv");
    }

    #[test]
    fn test_codec_for_path_unsupported() {
        let err = codec_for_path(&PathBuf::from("report.ods"), 1).unwrap_err();
        assert!(err.to_string().contains("Unsupported input format"));
    }
}
