use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Error type returned by loaders and the summarizer.
///
/// This is a single error enum shared across CSV/TSV/JSON/JSONL loading. The
/// [`FileNotFound`](Self::FileNotFound) and
/// [`UnsupportedExtension`](Self::UnsupportedExtension) variants exist as
/// their own cases because callers (the CLI in particular) report them
/// differently from every other failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Underlying I/O error (e.g. permission denied, read failure).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural CSV error (bad quoting, unreadable record).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error from a whole-document source.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input path does not exist. Checked before any read.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The file extension is not one of the recognized formats.
    #[error("unsupported extension '{ext}' for path ({})", path.display())]
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
        /// The extension as found on the path (lowercased, no leading dot;
        /// empty when the path has none).
        ext: String,
    },
}
