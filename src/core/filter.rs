//! Row filtering by partition-key membership
//!
//! The one non-trivial contract of the pipeline: given a table and a set of
//! selector values, return the subset of rows whose key cell is a member of
//! the set. Matching is exact string equality - no trimming, case-folding,
//! or numeric coercion - so a key of `" 4158"` never matches `"4158"`.
//! Rows with an empty key cell match no selector. Row order is preserved.

use crate::domain::result::Result;
use crate::domain::table::Table;
use std::collections::HashSet;

/// Returns the subset of `table` whose `key_column` value is in `selectors`
///
/// # Errors
///
/// Returns a `Schema` error if `key_column` is not a column of the table.
pub fn filter_rows(table: &Table, key_column: &str, selectors: &HashSet<String>) -> Result<Table> {
    let key_index = table.require_column(key_column)?;

    let rows = table
        .rows()
        .iter()
        .filter(|row| {
            row.get(key_index)
                .is_some_and(|cell| selectors.contains(cell))
        })
        .cloned()
        .collect();

    Ok(table.with_rows(rows))
}
