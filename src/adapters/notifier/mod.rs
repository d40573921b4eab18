//! Mail transport abstraction
//!
//! This module defines the trait the delivery composer hands finished
//! messages to. The SMTP implementation lives in [`smtp`]; tests substitute
//! their own recording implementations.

pub mod smtp;

pub use smtp::SmtpNotifier;

use crate::domain::message::OutboundMessage;
use crate::domain::result::Result;

/// Transport seam for outbound messages
///
/// A notifier performs exactly one delivery attempt per call; retry and
/// timeout policy belongs to the implementation, not the pipeline.
pub trait Notifier {
    /// Delivers a fully formed message
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error wrapping the transport failure. The
    /// message is not queued for later.
    fn send(&self, message: &OutboundMessage) -> Result<()>;
}
