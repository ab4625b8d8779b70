//! Readers that turn named byte streams into tables.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{DataType, Reader as SheetReader, Xls, Xlsx};

use crate::data::{Table, Value};
use crate::error::{ProfilerError, Result};
use crate::load::InputFormat;

/// Field values treated as a missing cell in CSV input.
const MISSING_MARKERS: [&str; 6] = ["NA", "na", "NaN", "nan", "null", "NULL"];

/// Load a table from a named byte stream.
///
/// The filename selects the parser (see [`InputFormat::from_name`]);
/// unrecognized extensions are parsed as CSV. Parse failures propagate
/// unchanged.
pub fn load_table<R: Read>(name: &str, reader: R) -> Result<Table> {
    match InputFormat::from_name(name) {
        InputFormat::Csv => read_csv(reader),
        InputFormat::Xlsx => read_xlsx(reader),
        InputFormat::Xls => read_xls(reader),
        InputFormat::Json => read_json(reader),
    }
}

/// Load a table from a file on disk, dispatching on its filename.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let file = File::open(path)?;
    load_table(name, file)
}

/// Parse CSV content. The first record is the header; cells are trimmed and
/// typed (number, boolean, missing marker, otherwise text).
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let names: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Table::from_rows(names, rows)
}

/// Parse an `.xlsx` workbook's first sheet.
pub fn read_xlsx<R: Read>(reader: R) -> Result<Table> {
    let workbook = Xlsx::new(buffer(reader)?).map_err(calamine::Error::from)?;
    table_from_workbook(workbook)
}

/// Parse a legacy `.xls` workbook's first sheet.
pub fn read_xls<R: Read>(reader: R) -> Result<Table> {
    let workbook = Xls::new(buffer(reader)?).map_err(calamine::Error::from)?;
    table_from_workbook(workbook)
}

/// Parse a JSON array of records, one object per row.
///
/// Columns appear in first-seen key order; keys absent from a record become
/// missing cells. Any other top-level shape is an error.
pub fn read_json<R: Read>(reader: R) -> Result<Table> {
    let parsed: serde_json::Value = serde_json::from_reader(reader)?;
    let records = match parsed {
        serde_json::Value::Array(records) => records,
        _ => {
            return Err(ProfilerError::UnsupportedJson(
                "expected a top-level array of objects".to_string(),
            ))
        }
    };

    let mut names: Vec<String> = Vec::new();
    let mut maps = Vec::with_capacity(records.len());
    for record in records {
        let map = match record {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(ProfilerError::UnsupportedJson(
                    "every row must be an object".to_string(),
                ))
            }
        };
        for key in map.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
        maps.push(map);
    }

    let rows = maps
        .into_iter()
        .map(|map| {
            names
                .iter()
                .map(|name| map.get(name).map_or(Value::Missing, json_to_value))
                .collect()
        })
        .collect();
    Table::from_rows(names, rows)
}

/// Buffer a stream so the workbook parsers get the `Seek` they require.
fn buffer<R: Read>(mut reader: R) -> Result<Cursor<Vec<u8>>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Cursor::new(bytes))
}

fn table_from_workbook<RS, W>(mut workbook: W) -> Result<Table>
where
    RS: Read + Seek,
    W: SheetReader<RS>,
    calamine::Error: From<W::Error>,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ProfilerError::EmptyData("workbook has no sheets".to_string()))?
        .map_err(calamine::Error::from)?;

    let mut sheet_rows = range.rows();
    let names: Vec<String> = match sheet_rows.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => return Table::new(vec![]),
    };
    let rows: Vec<Vec<Value>> = sheet_rows
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();
    Table::from_rows(names, rows)
}

fn json_to_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Missing,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::Text(s.clone()),
        // Nested arrays/objects are kept as their compact JSON text.
        nested => Value::Text(nested.to_string()),
    }
}

fn cell_to_value(cell: &DataType) -> Value {
    match cell {
        DataType::Int(v) => Value::Number(*v as f64),
        DataType::Float(v) | DataType::DateTime(v) | DataType::Duration(v) => Value::Number(*v),
        DataType::String(s) | DataType::DateTimeIso(s) | DataType::DurationIso(s) => {
            Value::Text(s.clone())
        }
        DataType::Bool(b) => Value::Bool(*b),
        DataType::Error(_) | DataType::Empty => Value::Missing,
    }
}

fn parse_cell(field: &str) -> Value {
    let field = field.trim();
    if field.is_empty() || MISSING_MARKERS.contains(&field) {
        return Value::Missing;
    }
    if let Ok(v) = field.parse::<f64>() {
        return Value::Number(v);
    }
    match field {
        "true" | "True" | "TRUE" => Value::Bool(true),
        "false" | "False" | "FALSE" => Value::Bool(false),
        _ => Value::Text(field.to_string()),
    }
}
