//! Distinct-value counts for text columns.

use crate::data::{ColumnType, Table, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Distinct-value count for one text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDistinct {
    /// Column name.
    pub name: String,
    /// Number of distinct non-missing values.
    pub distinct_values: usize,
}

/// Distinct-value counts for every text column of a table.
///
/// Columns are sorted by `distinct_values` descending; ties keep the
/// original column order. Empty when the table has no text columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// One entry per text column.
    pub columns: Vec<ColumnDistinct>,
}

impl CategoricalSummary {
    /// Look up the entry for a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDistinct> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of text columns summarized.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the table had no text columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::fmt::Display for CategoricalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Categorical Summary")?;
        for col in &self.columns {
            writeln!(f, "  {}: {} distinct values", col.name, col.distinct_values)?;
        }
        Ok(())
    }
}

/// Count distinct non-missing values in each text column.
pub fn profile_categorical(table: &Table) -> CategoricalSummary {
    let mut columns: Vec<ColumnDistinct> = table
        .columns()
        .iter()
        .filter(|col| col.dtype() == ColumnType::Text)
        .map(|col| {
            let distinct: HashSet<&str> =
                col.values().iter().filter_map(Value::as_text).collect();
            ColumnDistinct {
                name: col.name().to_string(),
                distinct_values: distinct.len(),
            }
        })
        .collect();

    // Stable sort: ties keep original column order.
    columns.sort_by(|a, b| b.distinct_values.cmp(&a.distinct_values));
    CategoricalSummary { columns }
}
