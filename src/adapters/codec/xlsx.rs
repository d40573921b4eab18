//! Excel workbook codec
//!
//! Decoding goes through `calamine`, encoding through `rust_xlsxwriter`.
//! Every cell is carried as text in both directions - billing unit codes
//! must survive round-trips without numeric reformatting.

use super::TabularCodec;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use crate::domain::table::Table;
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use std::io::Cursor;

/// MIME type for Office Open XML workbooks
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Codec for `.xlsx` workbooks
///
/// `header_row` physical rows are skipped before the row that is read as
/// the column header; everything below it becomes data rows.
#[derive(Debug)]
pub struct XlsxCodec {
    header_row: usize,
}

impl XlsxCodec {
    /// Creates a codec that skips `header_row` rows before the header
    pub fn new(header_row: usize) -> Self {
        Self { header_row }
    }
}

impl TabularCodec for XlsxCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
            .map_err(|e| BusplitError::Serialization(format!("Failed to open workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| BusplitError::Serialization("Workbook has no sheets".to_string()))?
            .map_err(|e| {
                BusplitError::Serialization(format!("Failed to read worksheet: {e}"))
            })?;

        let mut rows = range.rows().skip(self.header_row);

        let columns: Vec<String> = rows
            .next()
            .ok_or_else(|| {
                BusplitError::Serialization(format!(
                    "Worksheet has no header row (expected it at row {})",
                    self.header_row
                ))
            })?
            .iter()
            .map(cell_to_string)
            .collect();

        let data: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(Table::new(columns, data))
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        // Pin the creation datetime so identical tables encode to identical
        // bytes; the default is the wall clock, which breaks reproducibility.
        let created = ExcelDateTime::from_ymd(2000, 1, 1)
            .map_err(|e| BusplitError::Serialization(e.to_string()))?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let worksheet = workbook.add_worksheet();

        for (col, name) in table.columns().iter().enumerate() {
            worksheet
                .write_string(0, col as u16, name)
                .map_err(|e| BusplitError::Serialization(e.to_string()))?;
        }

        for (row, cells) in table.rows().iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                worksheet
                    .write_string((row + 1) as u32, col as u16, value)
                    .map_err(|e| BusplitError::Serialization(e.to_string()))?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| BusplitError::Serialization(format!("Failed to write workbook: {e}")))
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn mime_type(&self) -> &'static str {
        XLSX_MIME
    }
}

/// Renders a worksheet cell as text
///
/// Integral floats lose their trailing `.0` so that a numeric-typed BU code
/// column reads back as `4158`, not `4158.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["BU".to_string(), "Amount".to_string()],
            vec![
                vec!["4158".to_string(), "10".to_string()],
                vec!["4341".to_string(), "20".to_string()],
            ],
        )
    }

    #[test]
    fn test_encode_decode_round_trip() {
        // Encoded output has the header at row 0, so decode with no offset.
        let codec = XlsxCodec::new(0);
        let bytes = codec.encode(&sample()).unwrap();
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_header_row_offset() {
        // Write a title row above the real header, as the source reports do.
        let padded = Table::new(
            vec!["Monthly Billing Report".to_string(), String::new()],
            vec![
                vec!["BU".to_string(), "Amount".to_string()],
                vec!["4158".to_string(), "10".to_string()],
            ],
        );
        let bytes = XlsxCodec::new(0).encode(&padded).unwrap();

        let decoded = XlsxCodec::new(1).decode(&bytes).unwrap();
        assert_eq!(decoded.columns(), ["BU", "Amount"]);
        assert_eq!(decoded.row_count(), 1);
        assert_eq!(decoded.rows()[0], vec!["4158", "10"]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = XlsxCodec::new(0);
        let first = codec.encode(&sample()).unwrap();
        let second = codec.encode(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_garbage_is_serialization_error() {
        let codec = XlsxCodec::new(0);
        let err = codec.decode(b"not a workbook").unwrap_err();
        assert!(matches!(err, BusplitError::Serialization(_)));
    }

    #[test]
    fn test_decode_missing_header_row() {
        let codec = XlsxCodec::new(0);
        let bytes = codec.encode(&sample()).unwrap();
        // Asking for a header far below the data must fail, not panic.
        let err = XlsxCodec::new(10).decode(&bytes).unwrap_err();
        assert!(matches!(err, BusplitError::Serialization(_)));
    }

    #[test]
    fn test_cell_to_string_integral_float() {
        assert_eq!(cell_to_string(&Data::Float(4158.0)), "4158");
        assert_eq!(cell_to_string(&Data::Float(41.5)), "41.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
