//! Table Profiler
//!
//! This library loads tabular datasets from named byte streams and computes
//! descriptive statistics over them.
//!
//! # Overview
//!
//! The library is organized into small modules:
//!
//! - **data**: The in-memory [`data::Table`] (ordered, typed, equal-length
//!   columns)
//! - **load**: Extension-dispatched loading (CSV, Excel workbooks, JSON
//!   records, with CSV as the fallback)
//! - **profile**: Summaries (shape, missing values, numeric statistics,
//!   categorical distinct counts, duplicate rows) and the [`profile::Profiler`]
//!   wrapper
//! - **report**: Standalone HTML report generation
//!
//! # Example
//!
//! ```no_run
//! use table_profiler::prelude::*;
//!
//! # fn main() -> table_profiler::error::Result<()> {
//! let table = load_path("data.csv")?;
//! let profiler = Profiler::new(&table);
//!
//! println!("{}", profiler.basic_summary());
//! println!("{}", profiler.missing_summary());
//!
//! let report = profiler.write_report("Data Profile Report", "profile_report.html")?;
//! println!("report written to {}", report.display());
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod load;
pub mod profile;
pub mod report;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{Column, ColumnType, Table, Value};
    pub use crate::error::{ProfilerError, Result};
    pub use crate::load::{load_path, load_table, InputFormat};
    pub use crate::profile::{
        profile_basic, profile_categorical, profile_duplicates, profile_missing, profile_numeric,
        BasicSummary, CategoricalSummary, DuplicateSummary, MissingSummary, NumericSummary,
        Profiler,
    };
    pub use crate::report::{ReportGenerator, DEFAULT_REPORT_FILE, DEFAULT_REPORT_TITLE};
}
