use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ScanError;

use super::unified::SourceFormat;

/// Severity classification used for observer callbacks and alerting
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScanSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the scan failed).
    Error,
    /// Critical error (typically I/O or a missing input file).
    Critical,
}

/// Context about one scan attempt.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// The input path being scanned.
    pub path: PathBuf,
    /// Format used for the scan, when it could be determined. `None` when
    /// the failure happened before dispatch (unrecognized extension).
    pub format: Option<SourceFormat>,
}

/// Minimal stats reported on a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of rows scanned.
    pub rows: usize,
    /// Whether the row cap cut the scan short.
    pub truncated: bool,
}

/// Observer interface for scan outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts. Observers must
/// never write to stdout; the scan's one JSON object owns that stream.
pub trait ScanObserver: Send + Sync {
    /// Called when a scan succeeds.
    fn on_success(&self, _ctx: &ScanContext, _stats: ScanStats) {}

    /// Called when a scan fails.
    fn on_failure(&self, _ctx: &ScanContext, _severity: ScanSeverity, _error: &ScanError) {}

    /// Called when a scan failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ScanObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ScanObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ScanObserver for CompositeObserver {
    fn on_success(&self, ctx: &ScanContext, stats: ScanStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

fn format_label(format: Option<SourceFormat>) -> &'static str {
    format.map_or("unknown", SourceFormat::as_str)
}

/// Logs scan events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ScanObserver for StdErrObserver {
    fn on_success(&self, ctx: &ScanContext, stats: ScanStats) {
        eprintln!(
            "[scan][ok] format={} path={} rows={} truncated={}",
            format_label(ctx.format),
            ctx.path.display(),
            stats.rows,
            stats.truncated
        );
    }

    fn on_failure(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        eprintln!(
            "[scan][{:?}] format={} path={} err={}",
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        eprintln!(
            "[ALERT][scan][{:?}] format={} path={} err={}",
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        );
    }
}

/// Appends scan events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ScanObserver for FileObserver {
    fn on_success(&self, ctx: &ScanContext, stats: ScanStats) {
        self.append_line(&format!(
            "{} ok format={} path={} rows={} truncated={}",
            unix_ts(),
            format_label(ctx.format),
            ctx.path.display(),
            stats.rows,
            stats.truncated
        ));
    }

    fn on_failure(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        self.append_line(&format!(
            "{} fail severity={:?} format={} path={} err={}",
            unix_ts(),
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &ScanContext, severity: ScanSeverity, error: &ScanError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} format={} path={} err={}",
            unix_ts(),
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
