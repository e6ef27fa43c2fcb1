//! Command-line driver: scan one file, print exactly one JSON object to
//! stdout, exit with a single status code.
//!
//! Exit codes: `0` success, `2` file not found or unsupported extension,
//! `1` any other failure. Errors print `{"error": <kind>, ...}` instead of a
//! summary; nothing else ever reaches stdout.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;

use rowscan::ScanError;
use rowscan::loading::{ScanOptions, StdErrObserver, scan_from_path};
use rowscan::summary::SummaryOptions;

#[derive(Parser)]
#[command(
    name = "rowscan",
    about = "Summarize a CSV/TSV/JSON/JSONL file for quick analysis."
)]
struct Cli {
    /// Path to the input file (csv/tsv/json/jsonl).
    path: PathBuf,

    /// Maximum number of rows to scan.
    #[arg(long, default_value_t = 10_000)]
    max_rows: usize,

    /// Number of sample rows to include.
    #[arg(long, default_value_t = 5)]
    sample_size: usize,

    /// Log scan outcomes to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let path = expand_tilde(&cli.path);
    let options = ScanOptions {
        summary: SummaryOptions {
            max_rows: cli.max_rows,
            sample_size: cli.sample_size,
        },
        observer: cli
            .verbose
            .then(|| Arc::new(StdErrObserver) as Arc<dyn rowscan::loading::ScanObserver>),
        ..Default::default()
    };

    match scan_from_path(&path, &options) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{text}");
                0
            }
            Err(e) => report_error(&ScanError::Json(e)),
        },
        Err(e) => report_error(&e),
    }
}

/// Print the error object for `e` and return the matching exit code.
fn report_error(e: &ScanError) -> i32 {
    let (code, body) = match e {
        ScanError::FileNotFound { path } => (
            2,
            json!({"error": "file_not_found", "path": path.display().to_string()}),
        ),
        ScanError::UnsupportedExtension { path, ext } => (
            2,
            json!({
                "error": "unsupported_extension",
                "path": path.display().to_string(),
                "ext": ext,
            }),
        ),
        other => (1, json!({"error": "exception", "message": other.to_string()})),
    };
    println!("{body}");
    code
}

fn expand_tilde(path: &PathBuf) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.clone();
    };
    if text == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = text.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.clone()
}
