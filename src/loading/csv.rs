//! CSV/TSV loading.
//!
//! Streams a headered delimiter-separated file as records, one row in memory
//! at a time. Every field is yielded as a string; classification happens
//! downstream in the summarizer.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::ScanResult;
use crate::types::Record;

use super::RecordIter;

/// Stream a CSV/TSV file as records.
///
/// Rules:
///
/// - The first row is the header and defines the key set and key order for
///   every record.
/// - Rows shorter than the header carry null for the trailing keys; fields
///   beyond the header are dropped.
/// - Structural errors (e.g. a record that is not valid UTF-8) surface as
///   `Err` items mid-stream.
pub fn scan_csv_from_path(path: impl AsRef<Path>, delimiter: u8) -> ScanResult<RecordIter> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    scan_csv_from_reader(rdr)
}

/// Stream records from an existing CSV reader.
///
/// Takes the reader by value: the returned iterator owns it for the duration
/// of the scan.
pub fn scan_csv_from_reader<R: Read + 'static>(mut rdr: csv::Reader<R>) -> ScanResult<RecordIter> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let records = rdr.into_records().map(move |result| -> ScanResult<Record> {
        let record = result?;
        Ok(headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = record
                    .get(idx)
                    .map_or(Value::Null, |field| Value::String(field.to_owned()));
                (name.clone(), value)
            })
            .collect::<Record>())
    });
    Ok(Box::new(records))
}
