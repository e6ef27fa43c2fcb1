//! Unified scan entrypoint.
//!
//! Most callers should use [`scan_from_path`], which profiles a file into a
//! [`FileSummary`] in one pass.
//!
//! - If [`ScanOptions::format`] is `None`, the source format is inferred
//!   from the file extension.
//! - If a [`ScanObserver`] is configured, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::summary::{Summary, SummaryOptions, summarize_records};

use super::observability::{ScanContext, ScanObserver, ScanSeverity, ScanStats};
use super::{RecordIter, csv, json, jsonl};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Comma-separated values with a header line.
    Csv,
    /// Tab-separated values with a header line.
    Tsv,
    /// Whole-document JSON (array of objects, or a single object).
    Json,
    /// Newline-delimited JSON objects.
    Jsonl,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive, no
    /// leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            "jsonl" => Some(Self::Jsonl),
            _ => None,
        }
    }

    /// The lowercase name used in reports and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }
}

/// Options controlling a unified scan.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ScanOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<SourceFormat>,
    /// Row cap and sample size applied by the summarizer.
    pub summary: SummaryOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ScanObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ScanSeverity,
}

impl fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("format", &self.format)
            .field("summary", &self.summary)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            format: None,
            summary: SummaryOptions::default(),
            observer: None,
            alert_at_or_above: ScanSeverity::Critical,
        }
    }
}

/// The complete result of scanning one file: identity plus summary.
///
/// Serializes to the flat JSON object the CLI prints: `file`, `format`, then
/// the summary fields.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    /// Absolute path of the scanned file.
    pub file: PathBuf,
    /// Format the file was scanned as.
    pub format: SourceFormat,
    /// The summarizer's output.
    #[serde(flatten)]
    pub summary: Summary,
}

/// Scan a file into a [`FileSummary`] in one pass.
///
/// Checks the path exists before any read (`FileNotFound`), resolves the
/// format (`UnsupportedExtension` when the extension is not recognized and
/// no override is given), then streams the file through the summarizer.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >=
///   `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use rowscan::loading::{ScanOptions, scan_from_path};
///
/// # fn main() -> Result<(), rowscan::ScanError> {
/// // Uses `.csv` to select CSV scanning.
/// let report = scan_from_path("people.csv", &ScanOptions::default())?;
/// println!("rows={} columns={}", report.summary.rows, report.summary.columns.len());
/// # Ok(())
/// # }
/// ```
pub fn scan_from_path(path: impl AsRef<Path>, options: &ScanOptions) -> ScanResult<FileSummary> {
    let path = path.as_ref();
    let format = options
        .format
        .or_else(|| format_from_path(path));

    let ctx = ScanContext {
        path: path.to_path_buf(),
        format,
    };

    let result = scan_checked(path, format, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(report) => obs.on_success(
                &ctx,
                ScanStats {
                    rows: report.summary.rows,
                    truncated: report.summary.truncated,
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn scan_checked(
    path: &Path,
    format: Option<SourceFormat>,
    options: &ScanOptions,
) -> ScanResult<FileSummary> {
    // Existence is checked before the extension so a missing `foo.xyz`
    // reports file-not-found, not an unsupported extension.
    if !path.exists() {
        return Err(ScanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = match format {
        Some(f) => f,
        None => {
            return Err(ScanError::UnsupportedExtension {
                path: path.to_path_buf(),
                ext: extension_of(path),
            });
        }
    };

    let records = open_records(path, format)?;
    let summary = summarize_records(records, &options.summary)?;

    Ok(FileSummary {
        file: std::path::absolute(path)?,
        format,
        summary,
    })
}

/// Open the record stream for `path` in the given format.
pub fn open_records(path: &Path, format: SourceFormat) -> ScanResult<RecordIter> {
    match format {
        SourceFormat::Csv => csv::scan_csv_from_path(path, b','),
        SourceFormat::Tsv => csv::scan_csv_from_path(path, b'\t'),
        SourceFormat::Json => json::scan_json_from_path(path),
        SourceFormat::Jsonl => jsonl::scan_jsonl_from_path(path),
    }
}

fn format_from_path(path: &Path) -> Option<SourceFormat> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

fn severity_for_error(e: &ScanError) -> ScanSeverity {
    match e {
        ScanError::Io(_) | ScanError::FileNotFound { .. } => ScanSeverity::Critical,
        ScanError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ScanSeverity::Critical,
            _ => ScanSeverity::Error,
        },
        ScanError::Json(_) => ScanSeverity::Error,
        ScanError::UnsupportedExtension { .. } => ScanSeverity::Error,
    }
}

/// Convenience helper for callers that want an owned request object.
///
/// Useful for enqueueing scans in a job system.
#[derive(Clone)]
pub struct ScanRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling the scan.
    pub options: ScanOptions,
}

impl fmt::Debug for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl ScanRequest {
    /// Execute the request by calling [`scan_from_path`].
    pub fn run(&self) -> ScanResult<FileSummary> {
        scan_from_path(&self.path, &self.options)
    }
}
