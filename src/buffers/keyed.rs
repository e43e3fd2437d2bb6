//! Unbounded keyed buffer
//!
//! A string-keyed map of tuples with no capacity bound and no eviction.
//! Iteration order is unspecified; dumps sort keys so snapshots are
//! deterministic.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Schema, Tuple, Value};

use super::cursor::Cursor;
use super::BufferDump;

/// An unbounded mapping from string key to tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedBuffer {
    schema: Schema,
    tuples: HashMap<String, Tuple>,
}

impl KeyedBuffer {
    /// Create an empty keyed buffer.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            tuples: HashMap::new(),
        }
    }

    pub(crate) fn from_parts(schema: Schema, tuples: HashMap<String, Tuple>) -> Self {
        Self { schema, tuples }
    }

    /// The schema every stored tuple was validated against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of live tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Whether the buffer holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Replace the entire mapping from a map of raw values. Entries that
    /// fail the schema match are dropped; non-map input is ignored and the
    /// prior mapping survives.
    pub fn put(&mut self, value: Value) {
        match value {
            Value::Map(entries) => {
                self.tuples = entries
                    .into_iter()
                    .filter_map(|(k, v)| self.schema.match_value(v).map(|tup| (k, tup)))
                    .collect();
            }
            other => {
                log::debug!("keyed buffer put dropped: need map, got {other:?}");
            }
        }
    }

    /// Write one key: `Null` removes it, a schema match stores the tuple,
    /// and a failed match leaves the mapping unchanged.
    pub fn set(&mut self, key: &str, value: Value) {
        if value.is_null() {
            self.tuples.remove(key);
        } else if let Some(tuple) = self.schema.match_value(value) {
            self.tuples.insert(key.to_string(), tuple);
        }
    }

    /// Cursor over the tuple at `key`; absent keys are not found.
    pub fn get(&mut self, key: &str) -> Option<Cursor<'_>> {
        let tuple = self.tuples.get_mut(key)?;
        Some(Cursor::new(&self.schema, Some(tuple)))
    }

    /// Snapshot: key-sorted tuples.
    pub fn dump(&self) -> BufferDump {
        BufferDump::Keyed {
            schema: self.schema.clone(),
            tuples: self
                .tuples
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// List the live tuples as field-keyed records, sorted by key.
    pub fn records(&self) -> Vec<HashMap<String, Value>> {
        let mut keys: Vec<&String> = self.tuples.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|k| self.schema.record(&self.tuples[k]))
            .collect()
    }
}
