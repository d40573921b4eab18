//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Busplit using clap.

pub mod commands;

use crate::domain::errors::BusplitError;
use clap::{Parser, Subcommand};

/// Busplit - BU spreadsheet splitter & mailer
#[derive(Parser, Debug)]
#[command(name = "busplit")]
#[command(version, about, long_about = None)]
#[command(author = "Busplit Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "busplit.toml", env = "BUSPLIT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BUSPLIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split an input spreadsheet by billing unit and write the partitions to disk
    Export(commands::export::ExportArgs),

    /// Split an input spreadsheet and email the partitions as attachments
    Send(commands::send::SendArgs),

    /// List the billing units present in an input spreadsheet
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Process exit code for a pipeline error
///
/// 2 = configuration, 3 = input/planning, 4 = delivery, 5 = fatal I/O.
pub fn exit_code_for(error: &BusplitError) -> i32 {
    match error {
        BusplitError::Configuration(_) => 2,
        BusplitError::Schema(_)
        | BusplitError::EmptySelection
        | BusplitError::DuplicateOutput(_)
        | BusplitError::Serialization(_) => 3,
        BusplitError::NoRecipients
        | BusplitError::InvalidRecipient(_)
        | BusplitError::Delivery(_) => 4,
        BusplitError::Io(_) => 5,
    }
}
