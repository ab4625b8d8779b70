//! HTML report generation for profiled tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::Table;
use crate::error::Result;
use crate::profile::{
    profile_basic, profile_categorical, profile_duplicates, profile_missing, profile_numeric,
};

/// Default output filename for generated reports.
pub const DEFAULT_REPORT_FILE: &str = "profile_report.html";

/// Default report title.
pub const DEFAULT_REPORT_TITLE: &str = "Data Profile Report";

/// Renders a standalone HTML report for a table.
///
/// The report embeds the shape, missing-value, numeric, categorical, and
/// duplicate summaries. All cell-derived text is HTML-escaped. Generation
/// may be slow for very wide tables; I/O failures propagate.
pub struct ReportGenerator {
    title: String,
}

impl ReportGenerator {
    /// Create a generator with a report title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the report and write it to `path`.
    ///
    /// The file is fully written, flushed, and closed before the path is
    /// returned; on error the handle is closed with nothing left buffered.
    pub fn write_to<P: AsRef<Path>>(&self, table: &Table, path: P) -> Result<PathBuf> {
        let html = self.render(table);
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(path.as_ref().to_path_buf())
    }

    /// Render the report document as an HTML string.
    pub fn render(&self, table: &Table) -> String {
        let basic = profile_basic(table);
        let missing = profile_missing(table);
        let numeric = profile_numeric(table);
        let categorical = profile_categorical(table);
        let duplicates = profile_duplicates(table);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        html.push_str(
            "<style>\n\
             body { font-family: sans-serif; margin: 2em; }\n\
             table { border-collapse: collapse; margin-bottom: 1.5em; }\n\
             th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }\n\
             th { background: #f0f0f0; }\n\
             </style>\n</head>\n<body>\n",
        );
        html.push_str(&format!("<h1>{}</h1>\n", escape(&self.title)));

        html.push_str("<h2>Shape</h2>\n");
        html.push_str(&format!(
            "<p>{} rows &times; {} columns</p>\n",
            basic.num_rows, basic.num_columns
        ));

        html.push_str("<h2>Missing Values</h2>\n");
        html.push_str("<table>\n<tr><th>Column</th><th>Missing</th><th>Percent</th></tr>\n");
        for col in &missing.columns {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}%</td></tr>\n",
                escape(&col.name),
                col.missing_count,
                col.missing_percent
            ));
        }
        html.push_str("</table>\n");

        html.push_str("<h2>Numeric Columns</h2>\n");
        if numeric.is_empty() {
            html.push_str("<p>No numeric columns.</p>\n");
        } else {
            html.push_str(
                "<table>\n<tr><th>Column</th><th>Count</th><th>Mean</th><th>Std</th>\
                 <th>Min</th><th>25%</th><th>50%</th><th>75%</th><th>Max</th></tr>\n",
            );
            for col in &numeric.columns {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.4}</td>\
                     <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(&col.name),
                    col.count,
                    col.mean,
                    col.std,
                    col.min,
                    col.q25,
                    col.median,
                    col.q75,
                    col.max
                ));
            }
            html.push_str("</table>\n");
        }

        html.push_str("<h2>Categorical Columns</h2>\n");
        if categorical.is_empty() {
            html.push_str("<p>No text columns.</p>\n");
        } else {
            html.push_str("<table>\n<tr><th>Column</th><th>Distinct Values</th></tr>\n");
            for col in &categorical.columns {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td></tr>\n",
                    escape(&col.name),
                    col.distinct_values
                ));
            }
            html.push_str("</table>\n");
        }

        html.push_str("<h2>Duplicates</h2>\n");
        html.push_str(&format!(
            "<p>{} duplicate rows ({:.2}%)</p>\n",
            duplicates.duplicate_rows, duplicates.duplicate_percent
        ));

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
