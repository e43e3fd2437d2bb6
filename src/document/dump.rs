//! Document snapshots
//!
//! A dump is a deep, plain copy of a document: nested maps and sequences
//! become owned value trees, and every live buffer is rendered as its
//! self-describing [`BufferDump`], re-keyed with the reserved sigil so
//! the snapshot round-trips through the same buffer-vs-plain-value
//! classification used at construction. Snapshots never alias live state
//! and are the only artifact safe to hand across a concurrency boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::buffers::BufferDump;
use crate::models::Value;

/// A full-document snapshot, keyed like the document with buffer keys
/// re-tagged with the sigil prefix.
pub type DocumentDump = HashMap<String, DumpValue>;

/// One snapshot cell: a plain value tree or a buffer snapshot.
///
/// Untagged on the wire; the buffer arm is declared first so its `kind`
/// tag wins on deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DumpValue {
    Buffer(BufferDump),
    Plain(Value),
}

impl DumpValue {
    /// Get the plain value, if this cell is not a buffer snapshot.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            DumpValue::Plain(v) => Some(v),
            DumpValue::Buffer(_) => None,
        }
    }

    /// Get the buffer snapshot, if this cell is one.
    pub fn as_buffer(&self) -> Option<&BufferDump> {
        match self {
            DumpValue::Buffer(b) => Some(b),
            DumpValue::Plain(_) => None,
        }
    }
}
