//! Partition planning
//!
//! Turns either the configured fixed grouping table or a caller-selected
//! list of billing units into an ordered list of [`PartitionSpec`]s. All
//! selection errors are raised here, before any filtering or serialization
//! work begins.

use crate::config::GroupConfig;
use crate::domain::errors::BusplitError;
use crate::domain::result::Result;
use crate::domain::table::Table;
use std::collections::HashSet;

/// A named output plus the selector values that route into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSpec {
    /// Output filename for this partition
    pub name: String,

    /// Billing unit codes routed into this file, in declaration order
    pub selectors: Vec<String>,
}

impl PartitionSpec {
    /// Selector values as a set for membership testing
    pub fn selector_set(&self) -> HashSet<String> {
        self.selectors.iter().cloned().collect()
    }
}

/// Plans one partition per entry of the fixed grouping table, in table order
///
/// A group may combine several billing unit codes into one output file.
///
/// # Errors
///
/// Returns `EmptySelection` if the grouping table is empty and
/// `DuplicateOutput` if two groups share a filename.
pub fn plan_fixed(groups: &[GroupConfig]) -> Result<Vec<PartitionSpec>> {
    if groups.is_empty() {
        return Err(BusplitError::EmptySelection);
    }

    let specs: Vec<PartitionSpec> = groups
        .iter()
        .map(|group| PartitionSpec {
            name: group.name.clone(),
            selectors: group.units.clone(),
        })
        .collect();

    check_unique_names(&specs)?;
    Ok(specs)
}

/// Plans one partition per selected billing unit, named `<prefix>_<unit>.<ext>`
///
/// # Errors
///
/// Returns `EmptySelection` if `selected` is empty and `DuplicateOutput` if
/// the same unit appears twice.
pub fn plan_dynamic(selected: &[String], prefix: &str, extension: &str) -> Result<Vec<PartitionSpec>> {
    if selected.is_empty() {
        return Err(BusplitError::EmptySelection);
    }

    let specs: Vec<PartitionSpec> = selected
        .iter()
        .map(|unit| PartitionSpec {
            name: format!("{prefix}_{unit}.{extension}"),
            selectors: vec![unit.clone()],
        })
        .collect();

    check_unique_names(&specs)?;
    Ok(specs)
}

/// The billing unit choices a caller may select from
///
/// Sorted distinct non-missing values of the key column.
///
/// # Errors
///
/// Returns a `Schema` error if the key column is absent.
pub fn available_units(table: &Table, key_column: &str) -> Result<Vec<String>> {
    let key_index = table.require_column(key_column)?;
    Ok(table.distinct_values(key_index))
}

/// Recommended default selection: available units that are also configured
/// as known units
///
/// The caller may override this with any subset of the available units.
pub fn default_selection(available: &[String], known_units: &[String]) -> Vec<String> {
    let known: HashSet<&str> = known_units.iter().map(String::as_str).collect();
    available
        .iter()
        .filter(|unit| known.contains(unit.as_str()))
        .cloned()
        .collect()
}

fn check_unique_names(specs: &[PartitionSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in specs {
        if !seen.insert(spec.name.as_str()) {
            return Err(BusplitError::DuplicateOutput(spec.name.clone()));
        }
    }
    Ok(())
}
