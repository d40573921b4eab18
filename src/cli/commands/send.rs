//! Send command implementation
//!
//! Splits the input spreadsheet by billing unit and emails the partitions
//! as attachments to the given (or configured default) recipients.

use super::{load_table, plan_partitions};
use crate::adapters::codec::codec_for_format;
use crate::adapters::notifier::{Notifier, SmtpNotifier};
use crate::cli::exit_code_for;
use crate::config::{load_config, BusplitConfig};
use crate::core::{DeliveryComposer, ExportAssembler};
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the send command
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Input spreadsheet (.xlsx or .csv)
    pub input: PathBuf,

    /// Recipient addresses (comma-separated); defaults to the configured recipients
    #[arg(long)]
    pub to: Option<String>,

    /// Subject override; defaults to the input file's base name
    #[arg(long)]
    pub subject: Option<String>,

    /// Billing units to export (comma-separated), overriding the configured plan
    #[arg(long)]
    pub bu: Option<String>,

    /// Attach one zip archive instead of individual files
    #[arg(long)]
    pub bundle: bool,

    /// Compose the message but skip the transport
    #[arg(long)]
    pub dry_run: bool,
}

impl SendArgs {
    /// Execute the send command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting send command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        match self.run(&config) {
            Ok(sent) => {
                if sent {
                    println!("✅ Email sent successfully");
                } else {
                    println!("🔍 Dry run - message composed but not sent");
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Send failed");
                eprintln!("❌ {e}");
                Ok(exit_code_for(&e))
            }
        }
    }

    /// Runs the split pipeline and hands the composed message to the notifier
    ///
    /// Returns `false` when dry-run mode skipped the transport.
    fn run(&self, config: &BusplitConfig) -> Result<bool> {
        let email = config
            .require_email()
            .map_err(BusplitError::Configuration)?;

        let table = load_table(&self.input, config)?;
        let specs = plan_partitions(config, self.bu.as_deref(), &table)?;

        let codec = codec_for_format(config.export.format, config.input.header_row);
        let assembler = ExportAssembler::new(
            codec.as_ref(),
            &config.input.key_column,
            &config.export.archive_name,
        );

        let bundle_requested = self.bundle || config.export.bundle;
        let bundle = assembler.assemble(&table, &specs, bundle_requested)?;

        if bundle.is_empty() {
            return Err(BusplitError::Serialization(
                "No partition matched any rows - nothing to attach".to_string(),
            ));
        }

        let recipients_raw = match &self.to {
            Some(raw) => raw.clone(),
            None => email.default_recipients.join(", "),
        };

        let attachments = bundle.blobs().into_iter().cloned().collect();
        let composer = DeliveryComposer::new(email);
        let message = composer.compose(
            &recipients_raw,
            self.subject.as_deref(),
            &self.input,
            attachments,
        )?;

        if self.dry_run || config.application.dry_run {
            tracing::info!(
                recipients = ?message.recipients,
                subject = %message.subject,
                attachments = message.attachments.len(),
                "Dry run - skipping transport"
            );
            return Ok(false);
        }

        let notifier = SmtpNotifier::from_config(email)?;
        composer.deliver(&notifier as &dyn Notifier, &message)?;
        Ok(true)
    }
}
