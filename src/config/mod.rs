//! Configuration management for Busplit.
//!
//! Busplit uses a TOML configuration file (`busplit.toml`) with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `BUSPLIT_*` environment variable overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example configuration
//!
//! ```toml
//! [input]
//! key_column = "BU"
//! header_row = 1
//!
//! [export]
//! mode = "fixed"
//! bundle = false
//!
//! [[export.groups]]
//! name = "BU_4158.xlsx"
//! units = ["4158"]
//!
//! [email]
//! smtp_host = "smtp.gmail.com"
//! sender_email = "reports@example.com"
//! password = "${BUSPLIT_SMTP_PASSWORD}"
//! ```
//!
//! The SMTP password is held as a [`SecretString`] and is never embedded in
//! the outbound message model or written to logs.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BusplitConfig, EmailConfig, ExportConfig, ExportMode, GroupConfig,
    InputConfig, LoggingConfig, OutputFormat,
};
pub use secret::{secret_string, SecretString, SecretValue};
