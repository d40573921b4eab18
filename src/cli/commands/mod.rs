//! Command implementations
//!
//! Each subcommand is a thin orchestrator: it wires the loaded configuration
//! and input file into the core pipeline and renders results or errors. The
//! shared helpers here cover the steps every command repeats - decoding the
//! uploaded file and turning configuration plus CLI flags into a partition
//! plan.

pub mod export;
pub mod init;
pub mod list;
pub mod send;
pub mod validate;

use crate::adapters::codec::codec_for_path;
use crate::config::{BusplitConfig, ExportMode};
use crate::core::planner::{self, PartitionSpec};
use crate::domain::result::Result;
use crate::domain::table::Table;
use std::fs;
use std::path::Path;

/// Reads and decodes the input spreadsheet
pub(crate) fn load_table(path: &Path, config: &BusplitConfig) -> Result<Table> {
    let bytes = fs::read(path)?;
    let codec = codec_for_path(path, config.input.header_row)?;
    let table = codec.decode(&bytes)?;

    tracing::info!(
        input = %path.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "Input file loaded"
    );

    Ok(table)
}

/// Builds the partition plan from configuration and an optional `--bu` override
///
/// A `--bu` list always selects dynamic planning; otherwise the configured
/// mode decides between the fixed grouping table and the recommended
/// default selection of known units.
pub(crate) fn plan_partitions(
    config: &BusplitConfig,
    bu_override: Option<&str>,
    table: &Table,
) -> Result<Vec<PartitionSpec>> {
    let extension = config.export.format.extension();

    if let Some(raw) = bu_override {
        let selected: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .map(str::to_owned)
            .collect();
        return planner::plan_dynamic(&selected, &config.export.file_prefix, extension);
    }

    match config.export.mode {
        ExportMode::Fixed => planner::plan_fixed(&config.export.groups),
        ExportMode::Dynamic => {
            let available = planner::available_units(table, &config.input.key_column)?;
            let selected = planner::default_selection(&available, &config.export.known_units);
            planner::plan_dynamic(&selected, &config.export.file_prefix, extension)
        }
    }
}
