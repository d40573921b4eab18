//! Export command implementation
//!
//! Splits the input spreadsheet by billing unit and writes each partition
//! (or one bundled archive) into the output directory.

use super::{load_table, plan_partitions};
use crate::adapters::codec::codec_for_format;
use crate::cli::exit_code_for;
use crate::config::{load_config, BusplitConfig};
use crate::core::ExportAssembler;
use crate::domain::blob::Bundle;
use crate::domain::result::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input spreadsheet (.xlsx or .csv)
    pub input: PathBuf,

    /// Directory to write the output files into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Billing units to export (comma-separated), overriding the configured plan
    #[arg(long)]
    pub bu: Option<String>,

    /// Bundle all outputs into a single zip archive
    #[arg(long)]
    pub bundle: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting export command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        match self.run(&config) {
            Ok(bundle) => {
                if bundle.is_empty() {
                    println!("⚠️  No partition matched any rows - nothing was written");
                    return Ok(0);
                }
                println!("✅ Export complete:");
                for blob in bundle.blobs() {
                    println!("   {} ({} bytes)", blob.name, blob.bytes.len());
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("❌ {e}");
                Ok(exit_code_for(&e))
            }
        }
    }

    /// Runs the split pipeline and writes the bundle to disk
    fn run(&self, config: &BusplitConfig) -> Result<Bundle> {
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

        fs::create_dir_all(&self.out_dir)?;
        for blob in bundle.blobs() {
            let path = self.out_dir.join(&blob.name);
            fs::write(&path, &blob.bytes)?;
            tracing::info!(output = %path.display(), bytes = blob.bytes.len(), "Wrote partition");
        }

        Ok(bundle)
    }
}
