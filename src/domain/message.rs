//! Outbound email message model

use crate::domain::blob::Blob;

/// A fully formed outbound message, ready for the mail transport
///
/// Constructed once per send action by the delivery composer; never queued
/// or retried. Credentials are not part of the message - they live in the
/// configuration and are consumed by the notifier.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// Display name of the sender
    pub sender_name: String,

    /// Sender address
    pub sender_email: String,

    /// Parsed recipient addresses, never empty
    pub recipients: Vec<String>,

    /// Message subject
    pub subject: String,

    /// Plain-text body
    pub body: String,

    /// One or more file attachments
    pub attachments: Vec<Blob>,
}

impl OutboundMessage {
    /// Sender formatted as `Name <address>`
    pub fn formatted_sender(&self) -> String {
        if self.sender_name.is_empty() {
            self.sender_email.clone()
        } else {
            format!("{} <{}>", self.sender_name, self.sender_email)
        }
    }
}
