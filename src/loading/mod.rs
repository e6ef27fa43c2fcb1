//! Format loaders and the unified scan entrypoint.
//!
//! Most callers should use [`scan_from_path`] (from [`unified`]) which:
//!
//! - auto-detects the source format by file extension (or you can force a
//!   format via [`ScanOptions`])
//! - streams records through the summarizer with its row cap and sample
//!   buffer
//! - optionally reports success/failure/alerts to a [`ScanObserver`]
//!
//! Format-specific loaders are also available under:
//! - [`csv`] (CSV and TSV)
//! - [`json`] (whole-document JSON)
//! - [`jsonl`] (line-delimited JSON)

pub mod csv;
pub mod json;
pub mod jsonl;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, ScanContext, ScanObserver, ScanSeverity, ScanStats,
    StdErrObserver,
};
pub use unified::{FileSummary, ScanOptions, ScanRequest, SourceFormat, scan_from_path};

use crate::error::ScanResult;
use crate::types::Record;

/// A lazy, pull-based stream of records from one source.
///
/// CSV/TSV and JSONL loaders yield one record at a time without reading
/// ahead; the whole-document JSON loader materializes the file before the
/// first record is yielded (see [`json`]). `Err` items carry structural
/// failures and abort the consuming pass.
pub type RecordIter = Box<dyn Iterator<Item = ScanResult<Record>>>;
