//! Missing-value summary per column.

use crate::data::Table;
use serde::{Deserialize, Serialize};

/// Missing-value figures for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    /// Column name.
    pub name: String,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Missing cells as a percentage of the row count, rounded to 2
    /// decimals. 0.0 for a zero-row table.
    pub missing_percent: f64,
}

/// Per-column missing-value summary.
///
/// Columns are sorted by `missing_percent` descending; equal percentages
/// keep the original column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    /// One entry per table column.
    pub columns: Vec<ColumnMissing>,
}

impl MissingSummary {
    /// Look up the entry for a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnMissing> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count).sum()
    }
}

impl std::fmt::Display for MissingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Missing Summary")?;
        for col in &self.columns {
            writeln!(
                f,
                "  {}: {} missing ({:.2}%)",
                col.name, col.missing_count, col.missing_percent
            )?;
        }
        Ok(())
    }
}

/// Count missing cells per column, as counts and rounded percentages.
pub fn profile_missing(table: &Table) -> MissingSummary {
    let n_rows = table.n_rows();
    let mut columns: Vec<ColumnMissing> = table
        .columns()
        .iter()
        .map(|col| {
            let missing_count = col.missing_count();
            ColumnMissing {
                name: col.name().to_string(),
                missing_count,
                missing_percent: percent_of(missing_count, n_rows),
            }
        })
        .collect();

    // Stable sort: ties keep original column order.
    columns.sort_by(|a, b| b.missing_percent.partial_cmp(&a.missing_percent).unwrap());
    MissingSummary { columns }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = count as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
