//! `rowscan` profiles a tabular or record-oriented data file (CSV, TSV,
//! JSON array/object, or newline-delimited JSON) in a single pass,
//! producing a bounded-size summary: row/column counts, per-column
//! missing-value counts, running numeric statistics, and a small sample of
//! raw rows.
//!
//! The primary entrypoint is [`loading::scan_from_path`], which auto-detects
//! the format from the file extension (or you can force one via
//! [`loading::ScanOptions`]).
//!
//! ## What gets measured
//!
//! Every cell falls into exactly one bucket:
//!
//! - **missing**: JSON null, or a string that trims to empty / `null` /
//!   `none` / `na` / `n/a` (case-insensitive)
//! - **numeric**: a native number, or a string that parses as a finite
//!   decimal after stripping thousands-separator commas (`"1,234.5"`)
//! - **opaque**: anything else; counted in `rows` but in no statistic
//!
//! Numeric columns are tracked with Welford's online algorithm, so memory
//! stays O(columns) no matter how many rows stream through. The scan stops
//! after `max_rows` rows and keeps at most `sample_size` raw rows.
//!
//! ## Quick example: scan a file
//!
//! ```no_run
//! use rowscan::loading::{ScanOptions, scan_from_path};
//!
//! # fn main() -> Result<(), rowscan::ScanError> {
//! // Auto-detects by extension (.csv/.tsv/.json/.jsonl).
//! let report = scan_from_path("data.csv", &ScanOptions::default())?;
//! println!("rows={} truncated={}", report.summary.rows, report.summary.truncated);
//! # Ok(())
//! # }
//! ```
//!
//! ## Summarize records you already have
//!
//! The summarizer is independent of any file format; it folds any iterator
//! of [`types::Record`]s:
//!
//! ```
//! use rowscan::loading::jsonl::scan_jsonl_from_reader;
//! use rowscan::summary::{SummaryOptions, summarize_records};
//!
//! let input = "{\"a\": \"1\"}\n{\"a\": \"2\"}\n{\"a\": null}\n";
//! let records = scan_jsonl_from_reader(input.as_bytes());
//! let summary = summarize_records(records, &SummaryOptions::default()).unwrap();
//!
//! assert_eq!(summary.rows, 3);
//! assert_eq!(summary.missing_count("a"), Some(1));
//! assert_eq!(summary.numeric_stats("a").unwrap().count, 2);
//! ```
//!
//! ## Modules
//!
//! - [`loading`]: format loaders, unified entrypoint, scan observers
//! - [`summary`]: the single-pass record summarizer
//! - [`stats`]: the Welford running-statistics accumulator
//! - [`classify`]: missing-value and numeric classification
//! - [`types`]: the raw record type
//! - [`error`]: error types used across scanning
//!
//! ## Resource model
//!
//! Single-threaded and synchronous. CSV/TSV/JSONL sources stream one row at
//! a time; the whole-document JSON loader is the one exception and reads the
//! full file into memory before yielding rows. Only `max_rows` and
//! `sample_size` bound adversarial input; file size and per-row width are
//! not limited.

pub mod classify;
pub mod error;
pub mod loading;
pub mod stats;
pub mod summary;
pub mod types;

pub use error::{ScanError, ScanResult};
