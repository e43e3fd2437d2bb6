//! Fixed-capacity cyclic (ring) buffer
//!
//! Tuples are addressed by a monotonically advancing write head, wrapped
//! modulo capacity: once the ring is full, each write overwrites the
//! oldest live tuple. Dumps present tuples in logical append order, not
//! raw slot order.

use crate::models::{Schema, Tuple, Value};

use super::cursor::Cursor;
use super::BufferDump;

/// A ring of tuple slots with a wrapping write head.
///
/// The head always points at the next slot to write, which is also the
/// oldest slot once the ring has wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicBuffer {
    schema: Schema,
    slots: Vec<Option<Tuple>>,
    head: usize,
}

impl CyclicBuffer {
    /// Create a ring with `capacity` empty slots.
    pub fn new(schema: Schema, capacity: usize) -> Self {
        Self {
            schema,
            slots: vec![None; capacity],
            head: 0,
        }
    }

    pub(crate) fn from_parts(schema: Schema, slots: Vec<Option<Tuple>>, head: usize) -> Self {
        let head = if slots.is_empty() { 0 } else { head % slots.len() };
        Self { schema, slots, head }
    }

    /// The schema every stored tuple was validated against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Declared slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bulk write: appends every element of a sequence in order. A
    /// sequence longer than the capacity ends up keeping only its last
    /// `capacity` elements, which is the whole-content overwrite this
    /// variant supports. Non-sequence input is ignored.
    pub fn put(&mut self, value: Value) {
        match value {
            Value::Seq(items) => {
                for item in items {
                    self.append(item);
                }
            }
            other => {
                log::debug!("cyclic buffer put dropped: need seq, got {other:?}");
            }
        }
    }

    /// Write at the head. The key is ignored: a ring is addressed by its
    /// own logical append position, not by the caller.
    pub fn set(&mut self, _key: &str, value: Value) {
        self.append(value);
    }

    /// Write the head slot through the match-or-clear rule, then advance.
    ///
    /// The head advances even when the match fails, mirroring the append
    /// position moving past a malformed record.
    pub fn append(&mut self, value: Value) {
        if self.slots.is_empty() {
            return;
        }
        let slot = &mut self.slots[self.head];
        if value.is_null() {
            *slot = None;
        } else if let Some(tuple) = self.schema.match_value(value) {
            *slot = Some(tuple);
        }
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Cursor over the head slot (the next write position). The key is
    /// ignored for the same reason as in [`set`](Self::set).
    pub fn get(&mut self, _key: &str) -> Option<Cursor<'_>> {
        if self.slots.is_empty() {
            return None;
        }
        let head = self.head;
        Some(Cursor::new(&self.schema, self.slots[head].as_mut()))
    }

    /// Snapshot: live tuples oldest-to-newest, plus the declared capacity
    /// so a partially filled ring can be rebuilt.
    pub fn dump(&self) -> BufferDump {
        BufferDump::Cyclic {
            schema: self.schema.clone(),
            capacity: self.slots.len(),
            tuples: self.logical().cloned().collect(),
        }
    }

    /// List the live tuples as field-keyed records, oldest first.
    pub fn records(&self) -> Vec<std::collections::HashMap<String, Value>> {
        self.logical()
            .map(|tuple| self.schema.record(tuple))
            .collect()
    }

    /// Live tuples in logical order, starting at the head (oldest).
    fn logical(&self) -> impl Iterator<Item = &Tuple> + '_ {
        let n = self.slots.len();
        (0..n).filter_map(move |k| self.slots[(self.head + k) % n].as_ref())
    }
}
