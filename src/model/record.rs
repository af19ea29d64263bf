//! Opaque remote records.
//!
//! The controller never interprets a record's schema beyond reading named
//! fields. Fields are addressed by dot-paths (`address.city`, `images.0`).

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single row as returned by the remote provider.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Resolve a dot-path to a value.
    ///
    /// Each segment indexes an object by key, or an array by position when
    /// the segment is a number. Returns `None` when any segment is missing.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;

        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// String form of the value at `path`, or `None` if missing or null.
    ///
    /// Strings are returned without quotes, arrays are joined with commas,
    /// nested objects render as compact JSON.
    pub fn display(&self, path: &str) -> Option<String> {
        self.lookup(path).and_then(value_to_string)
    }

    /// Whether this record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for Record {
    /// Non-object values become an empty record.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// One page of results as reported by the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Rows of this page, in server order.
    pub items: Vec<Record>,
    /// Server-side count of all rows matching the query, not just this page.
    pub total: u64,
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| value_to_string(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
