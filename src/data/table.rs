//! In-memory tabular dataset with typed, equal-length columns.

use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric value (integer or floating-point).
    Number(f64),
    /// Text label.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Missing value.
    Missing,
}

impl Value {
    /// Check if this is a missing value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Missing => Ok(()),
        }
    }
}

/// The single logical type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Numeric,
    Text,
    Boolean,
}

/// One named column of cells, all of one logical type.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column. The values must already agree with `dtype`
    /// (missing cells are allowed in any column).
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical type of the column.
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    /// All cells in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// An in-memory tabular dataset.
///
/// Columns are ordered and named; every column has the same length, equal to
/// the row count. The table is immutable once constructed.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Create a table from columns, validating the equal-length invariant.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        for col in &columns {
            if col.len() != n_rows {
                return Err(ProfilerError::DimensionMismatch {
                    column: col.name().to_string(),
                    expected: n_rows,
                    actual: col.len(),
                });
            }
        }
        Ok(Self { columns, n_rows })
    }

    /// Build a table from a header and positional rows of cells, inferring
    /// each column's logical type.
    ///
    /// A column whose non-missing cells are all numbers becomes `Numeric`;
    /// all booleans becomes `Boolean`; anything mixed becomes `Text` with
    /// non-text cells rendered to their display strings. A column with no
    /// non-missing cells defaults to `Numeric`. Rows shorter than the header
    /// are padded with missing cells.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let cells: Vec<Value> = rows
                    .iter()
                    .map(|row| row.get(idx).cloned().unwrap_or(Value::Missing))
                    .collect();
                build_column(name, cells)
            })
            .collect();
        Table::new(columns)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in original order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    /// All columns in original order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// The cells of one row, across all columns in order.
    ///
    /// Panics if `idx` is out of bounds.
    pub fn row(&self, idx: usize) -> Vec<&Value> {
        self.columns.iter().map(|c| &c.values()[idx]).collect()
    }
}

/// Infer the logical type for a column's cells and coerce mixed cells.
fn build_column(name: String, cells: Vec<Value>) -> Column {
    let mut all_numeric = true;
    let mut all_boolean = true;
    for cell in &cells {
        match cell {
            Value::Number(_) => all_boolean = false,
            Value::Bool(_) => all_numeric = false,
            Value::Missing => {}
            Value::Text(_) => {
                all_numeric = false;
                all_boolean = false;
            }
        }
    }
    if all_numeric {
        Column::new(name, ColumnType::Numeric, cells)
    } else if all_boolean {
        Column::new(name, ColumnType::Boolean, cells)
    } else {
        let coerced = cells
            .into_iter()
            .map(|cell| match cell {
                Value::Missing => Value::Missing,
                Value::Text(s) => Value::Text(s),
                other => Value::Text(other.to_string()),
            })
            .collect();
        Column::new(name, ColumnType::Text, coerced)
    }
}
