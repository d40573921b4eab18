//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BusplitConfig;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`BusplitConfig`]
/// 4. Applies environment variable overrides (`BUSPLIT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<BusplitConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BusplitError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BusplitError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: BusplitConfig = toml::from_str(&contents)
        .map_err(|e| BusplitError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        BusplitError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched so that commented-out placeholders in
/// the sample config don't require the variable to be set.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BusplitError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `BUSPLIT_*` prefix
///
/// Environment variables follow the pattern `BUSPLIT_<SECTION>_<KEY>`,
/// for example `BUSPLIT_EXPORT_BUNDLE` or `BUSPLIT_EMAIL_SMTP_HOST`.
fn apply_env_overrides(config: &mut BusplitConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("BUSPLIT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("BUSPLIT_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Input overrides
    if let Ok(val) = std::env::var("BUSPLIT_INPUT_KEY_COLUMN") {
        config.input.key_column = val;
    }
    if let Ok(val) = std::env::var("BUSPLIT_INPUT_HEADER_ROW") {
        if let Ok(row) = val.parse() {
            config.input.header_row = row;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("BUSPLIT_EXPORT_BUNDLE") {
        config.export.bundle = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BUSPLIT_EXPORT_ARCHIVE_NAME") {
        config.export.archive_name = val;
    }
    if let Ok(val) = std::env::var("BUSPLIT_EXPORT_FILE_PREFIX") {
        config.export.file_prefix = val;
    }

    // Email overrides (only if the email section is configured)
    if let Some(ref mut email) = config.email {
        if let Ok(val) = std::env::var("BUSPLIT_EMAIL_SMTP_HOST") {
            email.smtp_host = val;
        }
        if let Ok(val) = std::env::var("BUSPLIT_EMAIL_SMTP_PORT") {
            if let Ok(port) = val.parse() {
                email.smtp_port = port;
            }
        }
        if let Ok(val) = std::env::var("BUSPLIT_EMAIL_SENDER_EMAIL") {
            email.sender_email = val;
        }
        if let Ok(val) = std::env::var("BUSPLIT_EMAIL_SENDER_NAME") {
            email.sender_name = val;
        }
        if let Ok(val) = std::env::var("BUSPLIT_EMAIL_PASSWORD") {
            email.password = crate::config::secret_string(val);
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("BUSPLIT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BUSPLIT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
