//! Whole-document JSON loading.
//!
//! Supported shapes, sniffed from the first non-whitespace byte:
//! - `[`: a JSON array; elements that are not objects are dropped
//! - `{`: a single JSON object, treated as exactly one row
//! - anything else (including an empty file): an empty stream
//!
//! Unlike the CSV/TSV/JSONL loaders, this one reads and parses the entire
//! document before the first record is yielded; a `.json` file is the one
//! input whose memory use scales with file size. Parse failures are hard
//! errors, not skipped.

use std::fs;
use std::iter;
use std::path::Path;

use serde_json::Value;

use crate::error::ScanResult;
use crate::types::Record;

use super::RecordIter;

/// Load a JSON document from a file as a stream of records.
pub fn scan_json_from_path(path: impl AsRef<Path>) -> ScanResult<RecordIter> {
    let text = fs::read_to_string(path)?;
    scan_json_from_str(&text)
}

/// Load a JSON document from an in-memory string as a stream of records.
pub fn scan_json_from_str(input: &str) -> ScanResult<RecordIter> {
    let trimmed = input.trim();
    match trimmed.bytes().next() {
        Some(b'[') => {
            let doc: Value = serde_json::from_str(trimmed)?;
            match doc {
                Value::Array(items) => Ok(Box::new(items.into_iter().filter_map(
                    |item| -> Option<ScanResult<Record>> {
                        match item {
                            Value::Object(map) => Some(Ok(Record::from(map))),
                            _ => None,
                        }
                    },
                ))),
                _ => Ok(empty()),
            }
        }
        Some(b'{') => {
            let doc: Value = serde_json::from_str(trimmed)?;
            match doc {
                Value::Object(map) => {
                    let row: ScanResult<Record> = Ok(Record::from(map));
                    Ok(Box::new(iter::once(row)))
                }
                _ => Ok(empty()),
            }
        }
        // Empty file, or a document that is neither an array nor an object.
        _ => Ok(empty()),
    }
}

fn empty() -> RecordIter {
    Box::new(iter::empty())
}
