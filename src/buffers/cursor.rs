//! Field-level access to a single buffer tuple
//!
//! A [`Cursor`] binds a buffer's schema to one tuple slot so callers can
//! read and write individual fields by name or position. It mutably
//! borrows the buffer that produced it, so it cannot outlive the mutation
//! call; retaining one across a structural change (e.g. a whole-buffer
//! `put`) is a compile error, not a runtime hazard.

use crate::models::{Schema, Tuple, Value};

/// A transient handle over one tuple slot.
///
/// The slot may be empty: field reads then yield `None` and writes are
/// no-ops until the slot is populated through the owning buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    schema: &'a Schema,
    tuple: Option<&'a mut Tuple>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(schema: &'a Schema, tuple: Option<&'a mut Tuple>) -> Self {
        Self { schema, tuple }
    }

    /// The schema this cursor resolves field names against.
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Whether the referenced slot currently holds a tuple.
    pub fn is_present(&self) -> bool {
        self.tuple.is_some()
    }

    /// Read one field by name or decimal positional index.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let i = self.schema.offset(field)?;
        self.tuple.as_deref()?.get(i)
    }

    /// Write one field by name or decimal positional index.
    ///
    /// Unresolvable fields and empty slots are ignored.
    pub fn set(&mut self, field: &str, value: Value) {
        let Some(i) = self.schema.offset(field) else {
            return;
        };
        if let Some(tuple) = self.tuple.as_deref_mut() {
            if let Some(slot) = tuple.get_mut(i) {
                *slot = value;
            }
        }
    }

    /// Consume the cursor, yielding a mutable borrow of one field for the
    /// remaining cursor lifetime. Used by path resolution to descend into
    /// container-valued fields.
    pub(crate) fn into_field_mut(self, field: &str) -> Option<&'a mut Value> {
        let i = self.schema.offset(field)?;
        self.tuple?.get_mut(i)
    }
}
