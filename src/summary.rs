//! The record summarizer: a single-pass, bounded-memory fold over a stream
//! of [`Record`]s.
//!
//! The first record pulled from the stream fixes the column list; every
//! following record is read against that list with lookup-with-default
//! semantics, so rows with extra or missing keys neither grow the schema nor
//! fail the scan. Per column, each value lands in exactly one bucket:
//! missing, numeric (fed to a [`RunningStats`]), or opaque (ignored).
//!
//! The pass stops at `max_rows` and keeps at most `sample_size` raw records,
//! so memory stays bounded no matter how long the stream is. Errors yielded
//! by the stream are not recoverable mid-pass; they propagate to the caller
//! and no partial summary is produced.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::classify::{coerce_numeric, is_missing};
use crate::error::ScanResult;
use crate::stats::{RunningStats, StatsSummary};
use crate::types::Record;

/// Limits applied during one summarization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum number of rows to scan before stopping.
    pub max_rows: usize,
    /// Maximum number of raw rows echoed back in the summary.
    pub sample_size: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_rows: 10_000,
            sample_size: 5,
        }
    }
}

/// Result of one summarization pass.
///
/// `missing` and `numeric` serialize as JSON objects keyed by column name,
/// in column order. `numeric` only carries columns that produced at least
/// one numeric observation.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Number of rows scanned (≤ `max_rows`).
    pub rows: usize,
    /// Column names, in first-row insertion order.
    pub columns: Vec<String>,
    /// Missing-value count per column.
    #[serde(serialize_with = "ordered_map")]
    pub missing: Vec<(String, u64)>,
    /// Numeric statistics per column with ≥ 1 numeric value.
    #[serde(serialize_with = "ordered_map")]
    pub numeric: Vec<(String, StatsSummary)>,
    /// Up to `sample_size` raw rows, in arrival order.
    pub sample: Vec<Record>,
    /// True iff the row cap was reached.
    pub truncated: bool,
}

impl Summary {
    /// Missing-value count for `column`, if it is part of the column list.
    pub fn missing_count(&self, column: &str) -> Option<u64> {
        self.missing
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, count)| *count)
    }

    /// Numeric statistics for `column`, if it saw any numeric value.
    pub fn numeric_stats(&self, column: &str) -> Option<&StatsSummary> {
        self.numeric
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }
}

fn ordered_map<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, value) in entries {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

/// Summarize a stream of records in a single pass.
///
/// The stream yields `ScanResult<Record>` so loaders can surface structural
/// errors mid-stream; the first `Err` aborts the pass. Rows are counted
/// against `options.max_rows` before being processed, and `truncated` is
/// true exactly when the cap was reached, including when the stream had
/// precisely `max_rows` rows left.
pub fn summarize_records<I>(records: I, options: &SummaryOptions) -> ScanResult<Summary>
where
    I: IntoIterator<Item = ScanResult<Record>>,
{
    let mut rows = 0usize;
    let mut columns: Vec<String> = Vec::new();
    let mut missing: Vec<u64> = Vec::new();
    let mut stats: Vec<RunningStats> = Vec::new();
    let mut sample: Vec<Record> = Vec::new();

    for record in records {
        let record = record?;
        if rows >= options.max_rows {
            break;
        }

        if columns.is_empty() {
            columns = record.column_names();
            missing = vec![0; columns.len()];
            stats = vec![RunningStats::new(); columns.len()];
        }
        rows += 1;

        if sample.len() < options.sample_size {
            sample.push(record.clone());
        }

        for (idx, column) in columns.iter().enumerate() {
            let value = record.value_or_null(column);
            if is_missing(value) {
                missing[idx] += 1;
            } else if let Some(x) = coerce_numeric(value) {
                stats[idx].add(x);
            }
        }
    }

    let truncated = rows >= options.max_rows;
    let numeric = columns
        .iter()
        .zip(stats.iter())
        .filter(|(_, st)| !st.is_empty())
        .map(|(name, st)| (name.clone(), st.summary()))
        .collect();
    let missing = columns.iter().cloned().zip(missing).collect();

    Ok(Summary {
        rows,
        columns,
        missing,
        numeric,
        sample,
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn record(v: Value) -> ScanResult<Record> {
        match v {
            Value::Object(map) => Ok(Record::from(map)),
            other => panic!("expected object, got {other}"),
        }
    }

    fn summarize(rows: Vec<Value>, options: &SummaryOptions) -> Summary {
        summarize_records(rows.into_iter().map(record), options).unwrap()
    }

    #[test]
    fn first_row_fixes_columns_and_later_keys_are_ignored() {
        // Column discovery deliberately uses only the first row; keys that
        // appear later are dropped, not merged in.
        let summary = summarize(
            vec![
                json!({"a": 1, "b": 2}),
                json!({"a": 3, "b": 4, "c": 5}),
                json!({"b": 6}),
            ],
            &SummaryOptions::default(),
        );

        assert_eq!(summary.columns, vec!["a", "b"]);
        assert_eq!(summary.rows, 3);
        assert!(summary.numeric_stats("c").is_none());
        // The row without "a" reads it as null via lookup-default.
        assert_eq!(summary.missing_count("a"), Some(1));
        assert_eq!(summary.missing_count("b"), Some(0));
    }

    #[test]
    fn each_value_lands_in_exactly_one_bucket() {
        let summary = summarize(
            vec![
                json!({"v": "1"}),
                json!({"v": null}),
                json!({"v": "opaque"}),
                json!({"v": "2.5"}),
                json!({"v": "n/a"}),
            ],
            &SummaryOptions::default(),
        );

        let stats = summary.numeric_stats("v").unwrap();
        let missing = summary.missing_count("v").unwrap();
        let opaque = summary.rows as u64 - missing - stats.count;
        assert_eq!(missing, 2);
        assert_eq!(stats.count, 2);
        assert_eq!(opaque, 1);
    }

    #[test]
    fn row_cap_stops_the_pass_and_marks_truncation() {
        let rows: Vec<Value> = (0..5).map(|i| json!({"n": i})).collect();
        let options = SummaryOptions {
            max_rows: 2,
            ..Default::default()
        };
        let summary = summarize(rows, &options);

        assert_eq!(summary.rows, 2);
        assert!(summary.truncated);
        // Exactly the first two rows were considered.
        let stats = summary.numeric_stats("n").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.max, Some(1.0));
    }

    #[test]
    fn exact_cap_still_reports_truncated() {
        let rows: Vec<Value> = (0..3).map(|i| json!({"n": i})).collect();
        let options = SummaryOptions {
            max_rows: 3,
            ..Default::default()
        };
        let summary = summarize(rows, &options);
        assert_eq!(summary.rows, 3);
        assert!(summary.truncated);
    }

    #[test]
    fn zero_max_rows_scans_nothing() {
        let options = SummaryOptions {
            max_rows: 0,
            ..Default::default()
        };
        let summary = summarize(vec![json!({"a": 1})], &options);
        assert_eq!(summary.rows, 0);
        assert!(summary.columns.is_empty());
        assert!(summary.sample.is_empty());
        assert!(summary.truncated);
    }

    #[test]
    fn sample_is_bounded_and_in_arrival_order() {
        let rows: Vec<Value> = (0..10).map(|i| json!({"n": i})).collect();
        let options = SummaryOptions {
            sample_size: 3,
            ..Default::default()
        };
        let summary = summarize(rows, &options);

        assert_eq!(summary.sample.len(), 3);
        assert_eq!(summary.sample[0].get("n"), Some(&json!(0)));
        assert_eq!(summary.sample[2].get("n"), Some(&json!(2)));
        assert!(!summary.truncated);
    }

    #[test]
    fn empty_stream_yields_empty_summary() {
        let summary = summarize(vec![], &SummaryOptions::default());
        assert_eq!(summary.rows, 0);
        assert!(summary.columns.is_empty());
        assert!(summary.missing.is_empty());
        assert!(summary.numeric.is_empty());
        assert!(summary.sample.is_empty());
        assert!(!summary.truncated);
    }

    #[test]
    fn stream_errors_propagate_and_abort() {
        let items: Vec<ScanResult<Record>> = vec![
            record(json!({"a": 1})),
            Err(std::io::Error::other("stream broke").into()),
            record(json!({"a": 2})),
        ];
        let err = summarize_records(items, &SummaryOptions::default()).unwrap_err();
        assert!(err.to_string().contains("stream broke"));
    }

    #[test]
    fn numeric_map_only_lists_columns_with_observations() {
        let summary = summarize(
            vec![json!({"word": "x", "n": 1}), json!({"word": "y", "n": 2})],
            &SummaryOptions::default(),
        );
        assert!(summary.numeric_stats("word").is_none());
        assert!(summary.numeric_stats("n").is_some());
    }

    #[test]
    fn summary_serializes_maps_in_column_order() {
        let summary = summarize(
            vec![json!({"z": 1, "a": "2"})],
            &SummaryOptions::default(),
        );
        let text = serde_json::to_string(&summary).unwrap();
        // "z" was first in the row, so it stays first in both maps.
        assert!(text.contains(r#""columns":["z","a"]"#));
        assert!(text.contains(r#""missing":{"z":0,"a":0}"#));
        let z = text.find(r#""z":{"count""#).unwrap();
        let a = text.find(r#""a":{"count""#).unwrap();
        assert!(z < a);
    }
}
