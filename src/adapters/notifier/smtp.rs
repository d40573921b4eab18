//! SMTP notifier backed by lettre
//!
//! Submits over implicit TLS (wrapper mode, port 465 by default) with
//! username/password authentication, matching the upstream mail provider's
//! app-password flow. The transport call blocks until the submission
//! completes or times out.

use super::Notifier;
use crate::config::EmailConfig;
use crate::domain::errors::BusplitError;
use crate::domain::message::OutboundMessage;
use crate::domain::result::Result;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use secrecy::ExposeSecret;

/// Notifier that submits messages over authenticated SMTP
pub struct SmtpNotifier {
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Builds a transport from the `[email]` configuration section
    ///
    /// The password is exposed only here, at the transport boundary.
    ///
    /// # Errors
    ///
    /// Returns a `Delivery` error if the relay or TLS parameters cannot be
    /// constructed.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let credentials = Credentials::new(
            config.sender_email.clone(),
            config.password.expose_secret().as_ref().to_string(),
        );

        let tls_parameters = TlsParameters::new(config.smtp_host.clone())
            .map_err(|e| BusplitError::Delivery(format!("TLS setup failed: {e}")))?;

        let transport = SmtpTransport::relay(&config.smtp_host)
            .map_err(|e| BusplitError::Delivery(format!("Invalid SMTP relay: {e}")))?
            .credentials(credentials)
            .port(config.smtp_port)
            .tls(Tls::Wrapper(tls_parameters))
            .build();

        Ok(Self { transport })
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, message: &OutboundMessage) -> Result<()> {
        let email = build_email(message)?;

        tracing::info!(
            recipients = message.recipients.len(),
            attachments = message.attachments.len(),
            subject = %message.subject,
            "Submitting message to SMTP relay"
        );

        self.transport
            .send(&email)
            .map_err(|e| BusplitError::Delivery(e.to_string()))?;

        Ok(())
    }
}

/// Translates an [`OutboundMessage`] into a lettre MIME message
fn build_email(message: &OutboundMessage) -> Result<Message> {
    let from: Mailbox = message
        .formatted_sender()
        .parse()
        .map_err(|e| BusplitError::Delivery(format!("Invalid sender address: {e}")))?;

    let mut builder = Message::builder().from(from).subject(message.subject.clone());

    for recipient in &message.recipients {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| BusplitError::Delivery(format!("Invalid recipient '{recipient}': {e}")))?;
        builder = builder.to(to);
    }

    let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(message.body.clone()));

    for blob in &message.attachments {
        let content_type = ContentType::parse(&blob.mime_type).map_err(|e| {
            BusplitError::Delivery(format!("Invalid MIME type '{}': {e}", blob.mime_type))
        })?;
        multipart = multipart
            .singlepart(Attachment::new(blob.name.clone()).body(blob.bytes.clone(), content_type));
    }

    builder
        .multipart(multipart)
        .map_err(|e| BusplitError::Delivery(format!("Failed to build message: {e}")))
}
