//! Domain models and types for Busplit.
//!
//! This module contains the core domain models used by the split-and-deliver
//! pipeline:
//!
//! - [`Table`] - the decoded, string-valued spreadsheet
//! - [`Blob`] and [`Bundle`] - export artifacts held in memory
//! - [`OutboundMessage`] - the composed email handed to the notifier
//! - [`BusplitError`] and [`Result`] - the error taxonomy
//!
//! All fallible operations return [`Result<T>`]; errors never expose
//! third-party types.

pub mod blob;
pub mod errors;
pub mod message;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use blob::{Blob, Bundle};
pub use errors::BusplitError;
pub use message::OutboundMessage;
pub use result::Result;
pub use table::Table;
