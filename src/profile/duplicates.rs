//! Fully-duplicated row detection.

use crate::data::{Table, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Duplicate-row figures for a table.
///
/// A row counts as a duplicate when an identical full row appeared earlier
/// in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateSummary {
    /// Number of rows identical to an earlier row.
    pub duplicate_rows: usize,
    /// Duplicate rows as a percentage of the row count, rounded to 2
    /// decimals. 0.0 for a zero-row table.
    pub duplicate_percent: f64,
}

impl std::fmt::Display for DuplicateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Duplicate Summary")?;
        writeln!(f, "  Duplicate rows: {}", self.duplicate_rows)?;
        writeln!(f, "  Percent:        {:.2}%", self.duplicate_percent)?;
        Ok(())
    }
}

/// Hashable cell identity. Missing cells compare equal to each other, as do
/// NaN numbers; 0 and -0 compare equal.
#[derive(PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Number(u64),
    Text(&'a str),
    Bool(bool),
    Missing,
}

fn cell_key(value: &Value) -> CellKey<'_> {
    match value {
        Value::Number(v) => {
            let canonical = if v.is_nan() {
                f64::NAN
            } else if *v == 0.0 {
                0.0
            } else {
                *v
            };
            CellKey::Number(canonical.to_bits())
        }
        Value::Text(s) => CellKey::Text(s),
        Value::Bool(b) => CellKey::Bool(*b),
        Value::Missing => CellKey::Missing,
    }
}

/// Count fully-duplicated rows, as a count and a rounded percentage.
pub fn profile_duplicates(table: &Table) -> DuplicateSummary {
    let n_rows = table.n_rows();
    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(n_rows);
    let mut duplicate_rows = 0;
    for idx in 0..n_rows {
        let key: Vec<CellKey> = table.row(idx).into_iter().map(cell_key).collect();
        if !seen.insert(key) {
            duplicate_rows += 1;
        }
    }
    DuplicateSummary {
        duplicate_rows,
        duplicate_percent: percent_of(duplicate_rows, n_rows),
    }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = count as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
