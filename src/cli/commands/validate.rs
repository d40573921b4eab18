//! Validate config command implementation

use crate::cli::exit_code_for;
use crate::config::{load_config, ExportMode};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on the way in
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Key Column: {}", config.input.key_column);
        println!("  Header Row Offset: {}", config.input.header_row);
        match config.export.mode {
            ExportMode::Fixed => {
                println!("  Export Mode: fixed ({} groups)", config.export.groups.len());
                for group in &config.export.groups {
                    println!("    {} <- {:?}", group.name, group.units);
                }
            }
            ExportMode::Dynamic => {
                println!("  Export Mode: dynamic");
                println!("  Known Units: {:?}", config.export.known_units);
            }
        }
        println!("  Output Format: {}", config.export.format.extension());
        println!("  Bundle: {}", config.export.bundle);
        if let Some(ref email) = config.email {
            println!("  SMTP Host: {}:{}", email.smtp_host, email.smtp_port);
            println!("  Sender: {}", email.sender_email);
            println!("  Default Recipients: {:?}", email.default_recipients);
        } else {
            println!("  Email: not configured (send command unavailable)");
        }
        println!();
        Ok(0)
    }
}
