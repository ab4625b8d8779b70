//! Basic example demonstrating the profiling pipeline.
//!
//! This example shows how to:
//! 1. Load a CSV dataset
//! 2. Compute every summary
//! 3. Generate an HTML report

use table_profiler::load::read_csv;
use table_profiler::prelude::*;

fn main() -> Result<()> {
    println!("=== Table Profiler Example ===\n");

    let csv = create_example_csv();
    let table = read_csv(csv.as_bytes())?;

    println!("Data dimensions:");
    println!("  Rows:    {}", table.n_rows());
    println!("  Columns: {}", table.n_columns());
    println!();

    let profiler = Profiler::new(&table);

    println!("{}", profiler.basic_summary());
    println!("{}", profiler.missing_summary());
    println!("{}", profiler.numeric_summary());
    println!("{}", profiler.categorical_summary());
    println!("{}", profiler.duplicate_summary());

    let report = profiler.write_report("Example Profile", "profile_report.html")?;
    println!("Report written to {}", report.display());

    Ok(())
}

/// Create example CSV data with missing ages, a few cities, and one
/// duplicated row.
fn create_example_csv() -> String {
    let mut csv = String::from("name,age,city,score\n");

    let cities = ["oslo", "bergen", "tromso"];
    let mut seed = 12345u64;
    let rand_uniform = |s: &mut u64| -> f64 {
        *s = s.wrapping_mul(1103515245).wrapping_add(12345);
        ((*s >> 16) & 0x7FFF) as f64 / 32768.0
    };

    for i in 0..30 {
        let age = if rand_uniform(&mut seed) < 0.2 {
            "NA".to_string()
        } else {
            format!("{}", 20 + (i % 40))
        };
        let city = cities[i % cities.len()];
        let score = 50.0 + 50.0 * rand_uniform(&mut seed);
        csv.push_str(&format!("person_{},{},{},{:.1}\n", i, age, city, score));
    }

    // One exact duplicate row.
    csv.push_str("person_0,20,oslo,75.0\n");
    csv.push_str("person_0,20,oslo,75.0\n");

    csv
}
