//! Fixed-capacity indexed buffer
//!
//! A flat array of tuple slots addressed by integer index. Out-of-range
//! writes are dropped, and a whole-content `put` is accepted only when the
//! incoming sequence has exactly the declared capacity.

use crate::models::{Schema, Tuple, Value};

use super::cursor::Cursor;
use super::BufferDump;

/// A fixed-length array of tuple-or-empty slots.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBuffer {
    schema: Schema,
    slots: Vec<Option<Tuple>>,
}

impl FixedBuffer {
    /// Create a buffer with `capacity` empty slots.
    pub fn new(schema: Schema, capacity: usize) -> Self {
        Self {
            schema,
            slots: vec![None; capacity],
        }
    }

    pub(crate) fn from_parts(schema: Schema, slots: Vec<Option<Tuple>>) -> Self {
        Self { schema, slots }
    }

    /// The schema every stored tuple was validated against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Declared slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Overwrite the entire buffer from a sequence of raw slot values.
    ///
    /// The sequence must have exactly `capacity` elements, otherwise the
    /// call is ignored and every slot keeps its prior tuple. Each element
    /// goes through the same match-or-clear rule as [`set_at`](Self::set_at).
    pub fn put(&mut self, value: Value) {
        match value {
            Value::Seq(items) if items.len() == self.slots.len() => {
                for (i, item) in items.into_iter().enumerate() {
                    self.set_at(i, item);
                }
            }
            other => {
                log::debug!(
                    "fixed buffer put dropped: need seq of len {}, got {:?}",
                    self.slots.len(),
                    other
                );
            }
        }
    }

    /// Write one slot addressed by a decimal string key.
    pub fn set(&mut self, key: &str, value: Value) {
        if let Ok(i) = key.parse::<usize>() {
            self.set_at(i, value);
        }
    }

    /// Write one slot by index: `Null` clears it, a schema match stores
    /// the tuple, and a failed match leaves the slot unchanged.
    pub fn set_at(&mut self, index: usize, value: Value) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if value.is_null() {
            *slot = None;
        } else if let Some(tuple) = self.schema.match_value(value) {
            *slot = Some(tuple);
        }
    }

    /// Cursor over the slot addressed by a decimal string key.
    pub fn get(&mut self, key: &str) -> Option<Cursor<'_>> {
        let i = key.parse::<usize>().ok()?;
        self.cursor_at(i)
    }

    /// Cursor over one slot. In-range indices are always found, even over
    /// a never-written slot; the cursor tolerates the absent tuple.
    pub fn cursor_at(&mut self, index: usize) -> Option<Cursor<'_>> {
        if index < self.slots.len() {
            Some(Cursor::new(&self.schema, self.slots[index].as_mut()))
        } else {
            None
        }
    }

    /// Snapshot: all slots in positional order, empty slots as `None`.
    pub fn dump(&self) -> BufferDump {
        BufferDump::Fixed {
            schema: self.schema.clone(),
            tuples: self.slots.clone(),
        }
    }

    /// List the live tuples as field-keyed records, in slot order.
    pub fn records(&self) -> Vec<std::collections::HashMap<String, Value>> {
        self.slots
            .iter()
            .flatten()
            .map(|tuple| self.schema.record(tuple))
            .collect()
    }
}
