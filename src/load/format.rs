//! Input format selection by filename extension.

use serde::{Deserialize, Serialize};

/// Recognized input formats for the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook (`.xlsx`).
    Xlsx,
    /// Legacy Excel workbook (`.xls`).
    Xls,
    /// JSON array of records.
    Json,
}

impl InputFormat {
    /// Select the format for a filename, case-insensitively.
    ///
    /// Unrecognized extensions (including none at all) fall back to CSV.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            InputFormat::Csv
        } else if lower.ends_with(".xlsx") {
            InputFormat::Xlsx
        } else if lower.ends_with(".xls") {
            InputFormat::Xls
        } else if lower.ends_with(".json") {
            InputFormat::Json
        } else {
            InputFormat::Csv
        }
    }
}
