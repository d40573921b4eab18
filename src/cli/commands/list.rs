//! List command implementation
//!
//! Shows the billing units present in an input spreadsheet and marks the
//! recommended default selection, so a caller can decide what to pass to
//! `--bu`.

use super::load_table;
use crate::cli::exit_code_for;
use crate::config::load_config;
use crate::core::planner::{available_units, default_selection};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Input spreadsheet (.xlsx or .csv)
    pub input: PathBuf,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let result = load_table(&self.input, &config)
            .and_then(|table| available_units(&table, &config.input.key_column));

        match result {
            Ok(available) => {
                if available.is_empty() {
                    println!(
                        "⚠️  No '{}' values found in {}",
                        config.input.key_column,
                        self.input.display()
                    );
                    return Ok(0);
                }

                let defaults = default_selection(&available, &config.export.known_units);
                println!(
                    "Billing units in {} ('{}' column):",
                    self.input.display(),
                    config.input.key_column
                );
                for unit in &available {
                    if defaults.contains(unit) {
                        println!("  {unit} (default)");
                    } else {
                        println!("  {unit}");
                    }
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "List failed");
                eprintln!("❌ {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
