//! Export artifacts: named byte blobs and the final deliverable bundle

use serde::{Deserialize, Serialize};

/// An immutable in-memory file: bytes plus a filename and MIME type
///
/// One blob is produced per partition that matched at least one row; empty
/// partitions never yield a blob. Blobs live only for the duration of one
/// export invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// Output filename, including extension
    pub name: String,

    /// File contents
    pub bytes: Vec<u8>,

    /// MIME type tag used when the blob is attached to an email
    pub mime_type: String,
}

impl Blob {
    /// Creates a blob with an explicit MIME type
    ///
    /// The MIME type always comes from the producer - the codec for
    /// partition files, the assembler for the archive - so it is never
    /// guessed from the filename.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// The final deliverable unit of one export invocation
///
/// Either loose per-partition files, or a single archive wrapping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bundle {
    /// One independently retrievable blob per non-empty partition
    Loose(Vec<Blob>),

    /// A single archive blob containing every partition blob
    Archive(Blob),
}

impl Bundle {
    /// The blobs to hand to the delivery layer or write to disk
    pub fn blobs(&self) -> Vec<&Blob> {
        match self {
            Bundle::Loose(blobs) => blobs.iter().collect(),
            Bundle::Archive(blob) => vec![blob],
        }
    }

    /// Total number of output files
    pub fn len(&self) -> usize {
        match self {
            Bundle::Loose(blobs) => blobs.len(),
            Bundle::Archive(_) => 1,
        }
    }

    /// Whether the export produced no output at all
    pub fn is_empty(&self) -> bool {
        matches!(self, Bundle::Loose(blobs) if blobs.is_empty())
    }
}
