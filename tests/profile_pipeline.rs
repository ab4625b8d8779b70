//! Integration tests for the load -> profile -> report pipeline.

use approx::assert_relative_eq;
use std::io::Write;
use table_profiler::prelude::*;
use tempfile::Builder;

/// Write a CSV fixture with people data: 10 rows, 3 missing ages, one
/// fully-duplicated row.
fn create_people_csv() -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "name,age,city,active").unwrap();
    for i in 0..9 {
        let age = if i < 3 {
            "NA".to_string()
        } else {
            (25 + i * 2).to_string()
        };
        let city = if i % 2 == 0 { "oslo" } else { "bergen" };
        writeln!(file, "person_{},{},{},true", i, age, city).unwrap();
    }
    // Exact duplicate of the row for person_8 (age 41, oslo).
    writeln!(file, "person_8,41,oslo,true").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_csv_round_trip_shape() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "1,x").unwrap();
    writeln!(file, "2,y").unwrap();
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    let summary = Profiler::new(&table).basic_summary();

    assert_eq!(summary.num_rows, 2);
    assert_eq!(summary.num_columns, 2);
    assert_eq!(summary.columns, vec!["a", "b"]);
}

#[test]
fn test_full_profile_pipeline() {
    let file = create_people_csv();
    let table = load_path(file.path()).unwrap();
    let profiler = Profiler::new(&table);

    let basic = profiler.basic_summary();
    assert_eq!(basic.num_rows, 10);
    assert_eq!(basic.num_columns, 4);
    assert_eq!(basic.columns, vec!["name", "age", "city", "active"]);

    // 3 of 10 ages missing -> 30%, and the most-missing column sorts first.
    let missing = profiler.missing_summary();
    let age = missing.column("age").unwrap();
    assert_eq!(age.missing_count, 3);
    assert_relative_eq!(age.missing_percent, 30.0);
    assert_eq!(missing.columns[0].name, "age");

    // Ages are 31..41 step 2 plus the duplicated 41.
    let numeric = profiler.numeric_summary();
    assert_eq!(numeric.len(), 1);
    let age_stats = numeric.column("age").unwrap();
    assert_eq!(age_stats.count, 7);
    assert_relative_eq!(age_stats.min, 31.0);
    assert_relative_eq!(age_stats.max, 41.0);
    assert_relative_eq!(
        age_stats.mean,
        (31.0 + 33.0 + 35.0 + 37.0 + 39.0 + 41.0 + 41.0) / 7.0
    );

    // Text columns: name has 9 distinct (person_8 repeats), city has 2.
    let categorical = profiler.categorical_summary();
    assert_eq!(categorical.len(), 2);
    assert_eq!(categorical.column("name").unwrap().distinct_values, 9);
    assert_eq!(categorical.column("city").unwrap().distinct_values, 2);
    assert_eq!(categorical.columns[0].name, "name");

    // The boolean column is excluded from both typed summaries.
    assert!(numeric.column("active").is_none());
    assert!(categorical.column("active").is_none());

    let duplicates = profiler.duplicate_summary();
    assert_eq!(duplicates.duplicate_rows, 1);
    assert_relative_eq!(duplicates.duplicate_percent, 10.0);
}

#[test]
fn test_numeric_scenario() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "v").unwrap();
    for v in [1, 2, 3, 4] {
        writeln!(file, "{}", v).unwrap();
    }
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    let summary = Profiler::new(&table).numeric_summary();
    let stats = summary.column("v").unwrap();

    assert_relative_eq!(stats.mean, 2.5);
    assert_relative_eq!(stats.min, 1.0);
    assert_relative_eq!(stats.max, 4.0);
    assert_relative_eq!(stats.median, 2.5);
}

#[test]
fn test_duplicate_scenario() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "1,x").unwrap();
    writeln!(file, "1,x").unwrap();
    writeln!(file, "2,y").unwrap();
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    let summary = Profiler::new(&table).duplicate_summary();

    assert_eq!(summary.duplicate_rows, 1);
    assert_relative_eq!(summary.duplicate_percent, 33.33);
}

#[test]
fn test_json_pipeline() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"a": 1, "b": "x"}}, {{"a": 2, "b": "y"}}, {{"a": null}}]"#
    )
    .unwrap();
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    let profiler = Profiler::new(&table);

    assert_eq!(profiler.basic_summary().columns, vec!["a", "b"]);
    assert_eq!(profiler.missing_summary().column("a").unwrap().missing_count, 1);
    assert_eq!(profiler.missing_summary().column("b").unwrap().missing_count, 1);
    assert_eq!(
        profiler.categorical_summary().column("b").unwrap().distinct_values,
        2
    );
}

#[test]
fn test_unknown_extension_falls_back_to_csv() {
    let mut file = Builder::new().suffix(".dat").tempfile().unwrap();
    writeln!(file, "x").unwrap();
    writeln!(file, "1").unwrap();
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.column_names(), vec!["x"]);
}

#[test]
fn test_zero_row_table_has_defined_percentages() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "a,b").unwrap();
    file.flush().unwrap();

    let table = load_path(file.path()).unwrap();
    let profiler = Profiler::new(&table);

    assert_eq!(profiler.basic_summary().num_rows, 0);
    for col in &profiler.missing_summary().columns {
        assert_eq!(col.missing_percent, 0.0);
    }
    assert_eq!(profiler.duplicate_summary().duplicate_percent, 0.0);
}

#[test]
fn test_report_generation() {
    let file = create_people_csv();
    let table = load_path(file.path()).unwrap();
    let profiler = Profiler::new(&table);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("people_report.html");
    let written = profiler.write_report("People Profile", &out).unwrap();
    assert_eq!(written, out);

    let content = std::fs::read_to_string(&written).unwrap();
    assert!(!content.is_empty());
    assert!(content.contains("People Profile"));
    for name in ["name", "age", "city", "active"] {
        assert!(content.contains(name), "report should mention {}", name);
    }
}

#[test]
fn test_malformed_csv_propagates_error() {
    // A record with the wrong field count makes the CSV reader fail.
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "1,2,3").unwrap();
    file.flush().unwrap();

    let result = load_path(file.path());
    assert!(matches!(result, Err(ProfilerError::Csv(_))));
}
