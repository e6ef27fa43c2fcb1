//! Line-delimited JSON loading.
//!
//! One JSON value per line, streamed. Line-oriented sources get a
//! best-effort policy: blank lines, lines that fail to parse, and lines that
//! decode to something other than an object are skipped silently. I/O errors
//! reading the underlying stream still surface as `Err` items.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::ScanResult;
use crate::types::Record;

use super::RecordIter;

/// Stream a JSONL file as records.
pub fn scan_jsonl_from_path(path: impl AsRef<Path>) -> ScanResult<RecordIter> {
    let file = File::open(path)?;
    Ok(scan_jsonl_from_reader(file))
}

/// Stream records from any reader producing one JSON value per line.
pub fn scan_jsonl_from_reader<R: Read + 'static>(reader: R) -> RecordIter {
    let lines = BufReader::new(reader).lines();
    Box::new(lines.filter_map(|line| -> Option<ScanResult<Record>> {
        match line {
            Err(e) => Some(Err(e.into())),
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match serde_json::from_str::<Value>(trimmed) {
                    Ok(Value::Object(map)) => Some(Ok(Record::from(map))),
                    Ok(_) | Err(_) => None,
                }
            }
        }
    }))
}
