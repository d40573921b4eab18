// Busplit - BU Spreadsheet Splitter & Mailer
// Copyright (c) 2026 Busplit Contributors
// Licensed under the MIT License

use busplit::cli::{Cli, Commands};
use busplit::config::{load_config, LoggingConfig};
use busplit::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Take the logging settings from the config file when it is readable;
    // commands like `init` run before a config exists, so fall back to
    // console-only defaults instead of failing here.
    let (config_log_level, logging_config) = match load_config(&cli.config) {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };

    let log_level = cli
        .log_level
        .as_deref()
        .or(config_log_level.as_deref())
        .unwrap_or("info");

    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Busplit - BU spreadsheet splitter & mailer"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config),
        Commands::Send(args) => args.execute(&cli.config),
        Commands::List(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
