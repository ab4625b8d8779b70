//! Descriptive statistics for numeric columns.

use crate::data::{ColumnType, Table, Value};
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric column.
///
/// Statistics are NaN when the column has no usable cells; `std` is also
/// NaN for a single cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumnStats {
    /// Column name.
    pub name: String,
    /// Number of non-missing cells.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator).
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// 75th percentile.
    pub q75: f64,
    /// Maximum.
    pub max: f64,
}

/// Descriptive statistics for every numeric column of a table, one row per
/// column. Empty when the table has no numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    /// One entry per numeric column, in original column order.
    pub columns: Vec<NumericColumnStats>,
}

impl NumericSummary {
    /// Look up the statistics for a column by name.
    pub fn column(&self, name: &str) -> Option<&NumericColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of numeric columns summarized.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the table had no numeric columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::fmt::Display for NumericSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Numeric Summary")?;
        for col in &self.columns {
            writeln!(
                f,
                "  {}: count={} mean={:.4} std={:.4} min={} q25={} median={} q75={} max={}",
                col.name, col.count, col.mean, col.std, col.min, col.q25, col.median, col.q75,
                col.max
            )?;
        }
        Ok(())
    }
}

/// Compute descriptive statistics for the numeric columns of a table.
pub fn profile_numeric(table: &Table) -> NumericSummary {
    let columns = table
        .columns()
        .iter()
        .filter(|col| col.dtype() == ColumnType::Numeric)
        .map(|col| {
            let mut values: Vec<f64> = col
                .values()
                .iter()
                .filter_map(Value::as_number)
                .filter(|v| !v.is_nan())
                .collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            column_stats(col.name().to_string(), &values)
        })
        .collect();
    NumericSummary { columns }
}

fn column_stats(name: String, sorted: &[f64]) -> NumericColumnStats {
    let count = sorted.len();
    if count == 0 {
        return NumericColumnStats {
            name,
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        f64::NAN
    } else {
        let sum_sq = sorted
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>();
        (sum_sq / (count - 1) as f64).sqrt()
    };

    NumericColumnStats {
        name,
        count,
        mean,
        std,
        min: sorted[0],
        q25: percentile(sorted, 0.25),
        median: percentile(sorted, 0.50),
        q75: percentile(sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Percentile by linear interpolation between order statistics.
/// Assumes `sorted` is non-empty and ascending.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;

    fn numeric_column(name: &str, values: &[f64]) -> Column {
        Column::new(
            name,
            ColumnType::Numeric,
            values.iter().map(|&v| Value::Number(v)).collect(),
        )
    }

    #[test]
    fn test_basic_stats() {
        let table = Table::new(vec![numeric_column("v", &[1.0, 2.0, 3.0, 4.0])]).unwrap();
        let summary = profile_numeric(&table);

        let stats = summary.column("v").unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 2.5).abs() < 1e-10);
        assert!((stats.min - 1.0).abs() < 1e-10);
        assert!((stats.max - 4.0).abs() < 1e-10);
        // Sample std of 1..4 is sqrt(5/3).
        assert!((stats.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let table = Table::new(vec![numeric_column("v", &[1.0, 2.0, 3.0, 4.0])]).unwrap();
        let summary = profile_numeric(&table);

        let stats = summary.column("v").unwrap();
        assert!((stats.q25 - 1.75).abs() < 1e-10);
        assert!((stats.median - 2.5).abs() < 1e-10);
        assert!((stats.q75 - 3.25).abs() < 1e-10);
    }

    #[test]
    fn test_missing_cells_excluded_from_count() {
        let table = Table::new(vec![Column::new(
            "v",
            ColumnType::Numeric,
            vec![Value::Number(10.0), Value::Missing, Value::Number(20.0)],
        )])
        .unwrap();

        let stats = profile_numeric(&table);
        let stats = stats.column("v").unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.mean - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_only_numeric_columns_included() {
        let table = Table::new(vec![
            numeric_column("n", &[1.0]),
            Column::new("t", ColumnType::Text, vec![Value::Text("x".into())]),
            Column::new("b", ColumnType::Boolean, vec![Value::Bool(true)]),
        ])
        .unwrap();

        let summary = profile_numeric(&table);
        assert_eq!(summary.len(), 1);
        assert!(summary.column("n").is_some());
    }

    #[test]
    fn test_no_numeric_columns_is_empty() {
        let table = Table::new(vec![Column::new(
            "t",
            ColumnType::Text,
            vec![Value::Text("x".into())],
        )])
        .unwrap();

        assert!(profile_numeric(&table).is_empty());
    }

    #[test]
    fn test_all_missing_column_reports_nan() {
        let table = Table::new(vec![Column::new(
            "v",
            ColumnType::Numeric,
            vec![Value::Missing, Value::Missing],
        )])
        .unwrap();

        let stats = profile_numeric(&table);
        let stats = stats.column("v").unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.min.is_nan());
    }

    #[test]
    fn test_single_value_std_is_nan() {
        let table = Table::new(vec![numeric_column("v", &[7.0])]).unwrap();
        let stats = profile_numeric(&table);
        let stats = stats.column("v").unwrap();

        assert_eq!(stats.count, 1);
        assert!((stats.mean - 7.0).abs() < 1e-10);
        assert!(stats.std.is_nan());
    }
}
