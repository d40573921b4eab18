//! Delivery composition
//!
//! Builds one outbound message from already-assembled blobs and hands it to
//! the notifier. Pure assembly: the composer never re-derives attachments,
//! and its only side effect is the final notifier call.

use crate::adapters::notifier::Notifier;
use crate::config::EmailConfig;
use crate::domain::blob::Blob;
use crate::domain::errors::BusplitError;
use crate::domain::message::OutboundMessage;
use crate::domain::result::Result;
use email_address::EmailAddress;
use std::path::Path;

/// Parses a comma-delimited recipient string into discrete addresses
///
/// Surrounding whitespace is trimmed per address and empty fragments are
/// dropped, so `"a@x.com, , b@y.com,"` parses to two addresses.
///
/// # Errors
///
/// Returns `NoRecipients` if nothing remains after parsing and
/// `InvalidRecipient` for any address that fails validation.
pub fn parse_recipients(raw: &str) -> Result<Vec<String>> {
    let recipients: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_owned)
        .collect();

    if recipients.is_empty() {
        return Err(BusplitError::NoRecipients);
    }

    for address in &recipients {
        if !EmailAddress::is_valid(address) {
            return Err(BusplitError::InvalidRecipient(address.clone()));
        }
    }

    Ok(recipients)
}

/// Default subject: the uploaded file's base name with the extension stripped
pub fn default_subject(input_path: &Path) -> String {
    input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("BU export")
        .to_string()
}

/// Composes outbound messages from the `[email]` configuration
pub struct DeliveryComposer<'a> {
    email: &'a EmailConfig,
}

impl<'a> DeliveryComposer<'a> {
    /// Creates a composer over the email configuration
    pub fn new(email: &'a EmailConfig) -> Self {
        Self { email }
    }

    /// Builds a single outbound message carrying `attachments`
    ///
    /// Subject precedence: explicit override, then the configured subject,
    /// then the uploaded file's base name.
    ///
    /// # Errors
    ///
    /// Returns `NoRecipients` or `InvalidRecipient` from recipient parsing.
    pub fn compose(
        &self,
        recipients_raw: &str,
        subject_override: Option<&str>,
        input_path: &Path,
        attachments: Vec<Blob>,
    ) -> Result<OutboundMessage> {
        let recipients = parse_recipients(recipients_raw)?;

        let subject = subject_override
            .map(str::to_owned)
            .or_else(|| self.email.subject.clone())
            .unwrap_or_else(|| default_subject(input_path));

        Ok(OutboundMessage {
            sender_name: self.email.sender_name.clone(),
            sender_email: self.email.sender_email.clone(),
            recipients,
            subject,
            body: self.email.body.clone(),
            attachments,
        })
    }

    /// Hands the message to the notifier for a single delivery attempt
    ///
    /// # Errors
    ///
    /// Returns the notifier's `Delivery` error unchanged; the message is
    /// not retried or queued.
    pub fn deliver(&self, notifier: &dyn Notifier, message: &OutboundMessage) -> Result<()> {
        notifier.send(message)?;
        tracing::info!(
            recipients = message.recipients.len(),
            attachments = message.attachments.len(),
            "Message delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use std::path::PathBuf;
    use test_case::test_case;

    fn email_config(subject: Option<&str>) -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
            sender_email: "finance@example.com".to_string(),
            sender_name: "Finance Bot".to_string(),
            password: secret_string("pw".to_string()),
            default_recipients: vec![],
            subject: subject.map(str::to_owned),
            body: "Please find attached BU-wise spreadsheet files.".to_string(),
        }
    }

    #[test]
    fn test_parse_recipients_splits_and_trims() {
        let parsed = parse_recipients("a@x.com, b@y.com").unwrap();
        assert_eq!(parsed, vec!["a@x.com", "b@y.com"]);
    }

    #[test_case(""; "empty string")]
    #[test_case(" , ,"; "only separators")]
    fn test_parse_recipients_empty_input(raw: &str) {
        assert!(matches!(
            parse_recipients(raw).unwrap_err(),
            BusplitError::NoRecipients
        ));
    }

    #[test]
    fn test_parse_recipients_drops_empty_fragments() {
        let parsed = parse_recipients("a@x.com,, b@y.com ,").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_recipients_invalid_address() {
        let err = parse_recipients("a@x.com, not-an-address").unwrap_err();
        match err {
            BusplitError::InvalidRecipient(address) => assert_eq!(address, "not-an-address"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_subject_strips_extension() {
        assert_eq!(
            default_subject(&PathBuf::from("/tmp/march_billing.xlsx")),
            "march_billing"
        );
    }

    #[test]
    fn test_compose_subject_precedence() {
        let input = PathBuf::from("march_billing.xlsx");
        let blob = Blob::new("BU_4158.csv", vec![], "text/csv");

        // Explicit override wins.
        let config = email_config(Some("configured subject"));
        let composer = DeliveryComposer::new(&config);
        let msg = composer
            .compose("a@x.com", Some("cli subject"), &input, vec![blob.clone()])
            .unwrap();
        assert_eq!(msg.subject, "cli subject");

        // Configured subject next.
        let msg = composer
            .compose("a@x.com", None, &input, vec![blob.clone()])
            .unwrap();
        assert_eq!(msg.subject, "configured subject");

        // Falls back to the input file's base name.
        let config = email_config(None);
        let composer = DeliveryComposer::new(&config);
        let msg = composer.compose("a@x.com", None, &input, vec![blob]).unwrap();
        assert_eq!(msg.subject, "march_billing");
    }

    #[test]
    fn test_compose_carries_attachments_unchanged() {
        let config = email_config(None);
        let composer = DeliveryComposer::new(&config);
        let blobs = vec![
            Blob::new("BU_4158.csv", b"BU\n4158\n".to_vec(), "text/csv"),
            Blob::new("BU_4341.csv", b"BU\n4341\n".to_vec(), "text/csv"),
        ];
        let msg = composer
            .compose("a@x.com", None, &PathBuf::from("in.csv"), blobs.clone())
            .unwrap();
        assert_eq!(msg.attachments, blobs);
        assert_eq!(msg.sender_email, "finance@example.com");
        assert_eq!(msg.body, "Please find attached BU-wise spreadsheet files.");
    }
}
