//! Zip archive writer
//!
//! Folds the per-partition blobs into one deflate-compressed container.
//! Entry order follows blob order and entry mtimes are pinned to the zip
//! epoch, so the same blobs always produce the same archive bytes.

use crate::domain::blob::Blob;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes `blobs` into a single zip archive and returns its bytes
///
/// # Errors
///
/// Returns a `Serialization` error if the container cannot be written.
pub fn write_archive(blobs: &[Blob]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for blob in blobs {
        zip.start_file(blob.name.as_str(), options).map_err(|e| {
            BusplitError::Serialization(format!("Failed to add '{}' to archive: {e}", blob.name))
        })?;
        zip.write_all(&blob.bytes).map_err(|e| {
            BusplitError::Serialization(format!("Failed to write '{}' to archive: {e}", blob.name))
        })?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| BusplitError::Serialization(format!("Failed to finalize archive: {e}")))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn blobs() -> Vec<Blob> {
        vec![
            Blob::new("BU_4158.csv", b"BU\n4158\n".to_vec(), "text/csv"),
            Blob::new("BU_4341.csv", b"BU\n4341\n".to_vec(), "text/csv"),
        ]
    }

    #[test]
    fn test_archive_preserves_member_order_and_content() {
        let bytes = write_archive(&blobs()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "BU_4158.csv");

        let mut content = String::new();
        archive
            .by_name("BU_4341.csv")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "BU\n4341\n");
    }

    #[test]
    fn test_archive_is_deterministic() {
        let first = write_archive(&blobs()).unwrap();
        let second = write_archive(&blobs()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_archive() {
        let bytes = write_archive(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
