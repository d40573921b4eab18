//! Configuration schema types
//!
//! This module defines the configuration structure for Busplit. The file is
//! TOML; secrets are referenced with `${VAR}` placeholders and resolved by
//! the loader.

use crate::config::SecretString;
use email_address::EmailAddress;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Partition planning mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Use the configured `[[export.groups]]` grouping table
    #[default]
    Fixed,
    /// One output per caller-selected billing unit
    Dynamic,
}

/// Output spreadsheet format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Excel workbook (`.xlsx`)
    #[default]
    Xlsx,
    /// Comma-separated values (`.csv`)
    Csv,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Main Busplit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BusplitConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input table conventions
    #[serde(default)]
    pub input: InputConfig,

    /// Export settings
    pub export: ExportConfig,

    /// Email settings (required for the `send` command only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BusplitConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.export.validate()?;

        // The email section is optional so that export-only deployments
        // don't need SMTP credentials; it is validated when present and
        // required lazily by the send command.
        if let Some(ref email) = self.email {
            email.validate()?;
        }

        self.logging.validate()?;
        Ok(())
    }

    /// The email section, or a configuration error if it is absent
    pub fn require_email(&self) -> Result<&EmailConfig, String> {
        self.email
            .as_ref()
            .ok_or_else(|| "[email] configuration is required for the send command".to_string())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (compose but never hand a message to the transport)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Input table conventions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Name of the partition-key column
    #[serde(default = "default_key_column")]
    pub key_column: String,

    /// Physical rows skipped before the header row in xlsx input
    ///
    /// The upstream reports carry a title row above the real header, so the
    /// default skips one row. CSV input always has the header in row 0.
    #[serde(default = "default_header_row")]
    pub header_row: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_column: default_key_column(),
            header_row: default_header_row(),
        }
    }
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.key_column.trim().is_empty() {
            return Err("input.key_column must not be empty".to_string());
        }
        Ok(())
    }
}

/// One entry of the fixed grouping table
///
/// A group may route several billing unit codes into a single output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Output filename for this group
    pub name: String,

    /// Billing unit codes routed into this file
    pub units: Vec<String>,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Planning mode (fixed grouping table or dynamic selection)
    #[serde(default)]
    pub mode: ExportMode,

    /// Filename prefix for dynamically planned outputs (`<prefix>_<unit>.<ext>`)
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Output spreadsheet format
    #[serde(default)]
    pub format: OutputFormat,

    /// Bundle all outputs into a single zip archive
    #[serde(default)]
    pub bundle: bool,

    /// Archive filename used when bundling
    #[serde(default = "default_archive_name")]
    pub archive_name: String,

    /// Known billing unit codes, used as the recommended default selection
    /// in dynamic mode
    #[serde(default)]
    pub known_units: Vec<String>,

    /// Fixed grouping table (required in fixed mode)
    #[serde(default, rename = "groups")]
    pub groups: Vec<GroupConfig>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.mode == ExportMode::Fixed && self.groups.is_empty() {
            return Err(
                "export.groups must not be empty when export.mode = 'fixed'".to_string(),
            );
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err("export.groups entries must have a non-empty name".to_string());
            }
            if group.units.is_empty() {
                return Err(format!(
                    "export group '{}' must list at least one billing unit",
                    group.name
                ));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(format!(
                    "export group name '{}' is used more than once",
                    group.name
                ));
            }
        }

        if self.bundle && self.archive_name.trim().is_empty() {
            return Err("export.archive_name must not be empty when bundling".to_string());
        }

        Ok(())
    }
}

/// Email and SMTP settings
#[derive(Debug, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP submission host
    pub smtp_host: String,

    /// SMTP submission port (implicit TLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Sender address
    pub sender_email: String,

    /// Sender display name
    #[serde(default)]
    pub sender_name: String,

    /// SMTP app password; use `${VAR}` substitution, never a literal
    pub password: SecretString,

    /// Recipients pre-filled when the caller supplies none
    #[serde(default)]
    pub default_recipients: Vec<String>,

    /// Subject override; defaults to the input file's base name when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Plain-text message body
    #[serde(default = "default_body")]
    pub body: String,
}

impl EmailConfig {
    fn validate(&self) -> Result<(), String> {
        if self.smtp_host.trim().is_empty() {
            return Err("email.smtp_host must not be empty".to_string());
        }
        if self.smtp_port == 0 {
            return Err("email.smtp_port must be a valid port number".to_string());
        }
        if !EmailAddress::is_valid(&self.sender_email) {
            return Err(format!(
                "email.sender_email '{}' is not a valid address",
                self.sender_email
            ));
        }
        if self.password.expose_secret().is_empty() {
            return Err("email.password must not be empty".to_string());
        }
        for recipient in &self.default_recipients {
            if !EmailAddress::is_valid(recipient) {
                return Err(format!(
                    "email.default_recipients entry '{recipient}' is not a valid address"
                ));
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled"
                .to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_key_column() -> String {
    "BU".to_string()
}

fn default_header_row() -> usize {
    1
}

fn default_file_prefix() -> String {
    "BU".to_string()
}

fn default_archive_name() -> String {
    "bu_export.zip".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_body() -> String {
    "Please find attached BU-wise spreadsheet files.".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
