//! Init command implementation
//!
//! Generates a commented sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "busplit.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your grouping and SMTP settings", self.output);
                println!("  2. Set BUSPLIT_SMTP_PASSWORD in your environment or a .env file");
                println!("  3. Validate configuration: busplit validate-config");
                println!("  4. Run an export: busplit export billing.xlsx");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration content
fn sample_config() -> &'static str {
    r#"# Busplit Configuration File
# BU spreadsheet splitter & mailer

[application]
log_level = "info"
dry_run = false

[input]
# Column that partitions the rows
key_column = "BU"
# Physical rows skipped before the header row in xlsx input
header_row = 1

[export]
# "fixed" uses the [[export.groups]] table below;
# "dynamic" exports one file per known billing unit found in the input
mode = "fixed"
file_prefix = "BU"
format = "xlsx"  # xlsx | csv
bundle = false
archive_name = "bu_export.zip"
known_units = ["4158", "4341", "4359", "4360"]

[[export.groups]]
name = "BU_4158.xlsx"
units = ["4158"]

[[export.groups]]
name = "BU_4341.xlsx"
units = ["4341"]

[[export.groups]]
name = "BU_4359_4360.xlsx"
units = ["4359", "4360"]

[email]
smtp_host = "smtp.gmail.com"
smtp_port = 465
sender_email = "reports@example.com"
sender_name = "BU Reports"
password = "${BUSPLIT_SMTP_PASSWORD}"
default_recipients = ["finance@example.com"]
body = "Please find attached BU-wise spreadsheet files."

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_and_validates() {
        std::env::set_var("BUSPLIT_SMTP_PASSWORD", "sample");
        let substituted = sample_config().replace("${BUSPLIT_SMTP_PASSWORD}", "sample");
        let config: crate::config::BusplitConfig = toml::from_str(&substituted).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.export.groups.len(), 3);
        std::env::remove_var("BUSPLIT_SMTP_PASSWORD");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busplit.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_init_writes_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busplit.toml");

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[export]"));
    }
}
