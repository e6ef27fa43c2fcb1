//! Core data model for scanning.
//!
//! A scan consumes a stream of [`Record`]s. A record is an ordered mapping
//! from column name to a raw [`serde_json::Value`]; loaders produce one per
//! input row without interpreting values (a CSV loader yields every field as
//! a string, a JSON loader yields whatever the document contained).

use serde::Serialize;
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// One raw input row: an ordered column → value mapping.
///
/// Key order is insertion order (the `preserve_order` feature of
/// `serde_json`), which is what fixes the column list when the first record
/// of a stream is seen. Values are looked up by name, never by position;
/// [`Record::value_or_null`] gives the lookup-with-default read used by the
/// summarizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a value under `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Look up a value by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Look up a value by column name, reading an absent key as null.
    ///
    /// Rows are allowed to omit columns (short CSV rows, JSONL objects with
    /// differing shapes); an absent key counts as a missing value, exactly
    /// like an explicit null.
    pub fn value_or_null(&self, name: &str) -> &Value {
        self.0.get(name).unwrap_or(&NULL)
    }

    /// Number of columns in this record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this record has no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
