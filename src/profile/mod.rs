//! Profiling summaries over an in-memory table.

mod basic;
mod categorical;
mod duplicates;
mod missing;
mod numeric;

pub use basic::{profile_basic, BasicSummary};
pub use categorical::{profile_categorical, CategoricalSummary, ColumnDistinct};
pub use duplicates::{profile_duplicates, DuplicateSummary};
pub use missing::{profile_missing, ColumnMissing, MissingSummary};
pub use numeric::{profile_numeric, NumericColumnStats, NumericSummary};

use crate::data::Table;
use crate::error::Result;
use crate::report::{ReportGenerator, DEFAULT_REPORT_FILE, DEFAULT_REPORT_TITLE};
use std::path::{Path, PathBuf};

/// Stateless profiler over one table.
///
/// Borrows the table for its lifetime and recomputes every summary on
/// demand; results are fresh owned values with no aliasing back into the
/// table.
pub struct Profiler<'a> {
    table: &'a Table,
}

impl<'a> Profiler<'a> {
    /// Wrap a table for profiling.
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// The table being profiled.
    pub fn table(&self) -> &Table {
        self.table
    }

    /// Row count, column count, and column names.
    pub fn basic_summary(&self) -> BasicSummary {
        profile_basic(self.table)
    }

    /// Missing-cell counts and percentages per column.
    pub fn missing_summary(&self) -> MissingSummary {
        profile_missing(self.table)
    }

    /// Descriptive statistics for the numeric columns.
    pub fn numeric_summary(&self) -> NumericSummary {
        profile_numeric(self.table)
    }

    /// Distinct-value counts for the text columns.
    pub fn categorical_summary(&self) -> CategoricalSummary {
        profile_categorical(self.table)
    }

    /// Fully-duplicated row count and percentage.
    pub fn duplicate_summary(&self) -> DuplicateSummary {
        profile_duplicates(self.table)
    }

    /// Generate the HTML report with a title, writing it to `path`.
    ///
    /// Returns the output path once the file is fully written and closed.
    pub fn write_report<P: AsRef<Path>>(&self, title: &str, path: P) -> Result<PathBuf> {
        ReportGenerator::new(title).write_to(self.table, path)
    }

    /// Generate the HTML report with the default title and filename
    /// (`profile_report.html` in the working directory).
    pub fn profile_report(&self) -> Result<PathBuf> {
        self.write_report(DEFAULT_REPORT_TITLE, DEFAULT_REPORT_FILE)
    }
}
