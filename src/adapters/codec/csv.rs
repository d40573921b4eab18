//! CSV codec backed by the `csv` crate

use super::TabularCodec;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use crate::domain::table::Table;

/// Codec for `.csv` files; header in row 0, all cells read as text
#[derive(Debug, Default)]
pub struct CsvCodec;

impl CsvCodec {
    /// Creates a CSV codec
    pub fn new() -> Self {
        Self
    }
}

impl TabularCodec for CsvCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| BusplitError::Serialization(format!("Failed to read CSV header: {e}")))?
            .iter()
            .map(str::to_owned)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| BusplitError::Serialization(format!("Failed to read CSV row: {e}")))?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Table::new(columns, rows))
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(table.columns())
            .map_err(|e| BusplitError::Serialization(e.to_string()))?;
        for row in table.rows() {
            writer
                .write_record(row)
                .map_err(|e| BusplitError::Serialization(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| BusplitError::Serialization(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
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
                vec!["4341".to_string(), "with, comma".to_string()],
            ],
        )
    }

    #[test]
    fn test_round_trip() {
        let codec = CsvCodec::new();
        let bytes = codec.encode(&sample()).unwrap();
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_decode_ragged_rows_padded() {
        let codec = CsvCodec::new();
        let decoded = codec.decode(b"BU,Amount\n4158\n").unwrap();
        assert_eq!(decoded.rows()[0], vec!["4158", ""]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = CsvCodec::new();
        assert_eq!(codec.encode(&sample()).unwrap(), codec.encode(&sample()).unwrap());
    }

    #[test]
    fn test_values_stay_text() {
        let codec = CsvCodec::new();
        let decoded = codec.decode(b"BU\n0042\n").unwrap();
        assert_eq!(decoded.rows()[0][0], "0042");
    }
}
