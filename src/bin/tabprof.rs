//! tabprof - Descriptive statistics for tabular data files.
//!
//! Command-line interface for the table-profiler library.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use table_profiler::error::Result;
use table_profiler::load::load_path;
use table_profiler::profile::Profiler;
use table_profiler::report::{ReportGenerator, DEFAULT_REPORT_FILE, DEFAULT_REPORT_TITLE};

/// Descriptive statistics for tabular data files
#[derive(Parser)]
#[command(name = "tabprof")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all summaries for a data file
    Summary {
        /// Path to the input file (.csv, .xlsx, .xls, .json; anything else
        /// is parsed as CSV)
        input: PathBuf,

        /// Print one JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate an HTML profile report
    Report {
        /// Path to the input file (.csv, .xlsx, .xls, .json; anything else
        /// is parsed as CSV)
        input: PathBuf,

        /// Output path for the HTML report
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Report title
        #[arg(long, default_value = DEFAULT_REPORT_TITLE)]
        title: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary { input, json } => run_summary(&input, json),
        Commands::Report {
            input,
            output,
            title,
        } => run_report(&input, &output, &title),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_summary(input: &Path, json: bool) -> Result<()> {
    eprintln!("Loading {:?}...", input);
    let table = load_path(input)?;
    eprintln!(
        "Loaded {} rows x {} columns",
        table.n_rows(),
        table.n_columns()
    );

    let profiler = Profiler::new(&table);
    if json {
        let doc = serde_json::json!({
            "basic": profiler.basic_summary(),
            "missing": profiler.missing_summary(),
            "numeric": profiler.numeric_summary(),
            "categorical": profiler.categorical_summary(),
            "duplicates": profiler.duplicate_summary(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", profiler.basic_summary());
        println!("{}", profiler.missing_summary());
        println!("{}", profiler.numeric_summary());
        println!("{}", profiler.categorical_summary());
        println!("{}", profiler.duplicate_summary());
    }
    Ok(())
}

fn run_report(input: &Path, output: &Path, title: &str) -> Result<()> {
    eprintln!("Loading {:?}...", input);
    let table = load_path(input)?;
    eprintln!(
        "Loaded {} rows x {} columns",
        table.n_rows(),
        table.n_columns()
    );

    eprintln!("Writing report to {:?}...", output);
    let written = ReportGenerator::new(title).write_to(&table, output)?;
    println!("{}", written.display());
    Ok(())
}
