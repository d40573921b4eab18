//! External collaborators consumed through narrow interfaces
//!
//! - [`codec`] - spreadsheet decoding/encoding (calamine, rust_xlsxwriter, csv)
//! - [`archive`] - zip container construction
//! - [`notifier`] - authenticated mail submission (lettre)
//!
//! The core pipeline only ever sees the traits and free functions exported
//! here, never the underlying format or transport libraries.

pub mod archive;
pub mod codec;
pub mod notifier;

pub use codec::{codec_for_format, codec_for_path, TabularCodec};
pub use notifier::{Notifier, SmtpNotifier};
