//! Shape summary for tables.

use crate::data::Table;
use serde::{Deserialize, Serialize};

/// Shape of a table: row count, column count, column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicSummary {
    /// Number of rows.
    pub num_rows: usize,
    /// Number of columns.
    pub num_columns: usize,
    /// Column names in original order.
    pub columns: Vec<String>,
}

impl std::fmt::Display for BasicSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Basic Summary")?;
        writeln!(f, "  Rows:    {}", self.num_rows)?;
        writeln!(f, "  Columns: {}", self.num_columns)?;
        writeln!(f, "  Names:   {}", self.columns.join(", "))?;
        Ok(())
    }
}

/// Report the shape of a table.
pub fn profile_basic(table: &Table) -> BasicSummary {
    BasicSummary {
        num_rows: table.n_rows(),
        num_columns: table.n_columns(),
        columns: table.column_names(),
    }
}
