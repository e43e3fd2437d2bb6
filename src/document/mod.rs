//! The top-level mutable document
//!
//! A [`Document`] is a string-keyed map of cells, where a cell is either
//! a plain value tree or a live typed buffer. All mutation goes through
//! path-addressed [`Document::set`]; reads for the renderer go through
//! [`Document::dump`].

pub mod dump;
pub(crate) mod path;

use std::collections::HashMap;

use crate::buffers::{Buffer, BUFFER_SIGIL};
use crate::error::DocumentError;
use crate::models::Value;

use dump::{DocumentDump, DumpValue};
use path::Target;

/// A document value cell: plain data or a live buffer.
///
/// A key is classified exactly once, at construction. A cell that became
/// a buffer stays a buffer; later top-level writes to its key update the
/// buffer's contents instead of replacing the cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Plain(Value),
    Buffer(Buffer),
}

/// The top-level path-addressable value tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    cells: HashMap<String, Cell>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a document from a raw record.
    ///
    /// Keys carrying the reserved sigil (`#`) whose value is a valid
    /// buffer declaration string become live buffers, stored under the
    /// sigil-stripped key. Everything else, including sigil keys whose
    /// value fails the declaration grammar, is assigned as a plain cell
    /// through the normal single-segment path.
    pub fn from_record(record: HashMap<String, Value>) -> Self {
        let mut doc = Document::new();
        for (key, value) in record {
            if let Some(stripped) = key.strip_prefix(BUFFER_SIGIL) {
                if let Some(buffer) = Buffer::from_declaration(&value) {
                    doc.cells.insert(stripped.to_string(), Cell::Buffer(buffer));
                    continue;
                }
            }
            // single-segment set cannot fail
            let _ = doc.set(&[key.as_str()], value);
        }
        doc
    }

    /// Construct a document from raw JSON. Anything but a JSON object
    /// yields an empty document.
    pub fn from_json(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::Map(record) => Self::from_record(record),
            _ => Document::new(),
        }
    }

    /// Number of top-level cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the document has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The live buffer stored at a top-level key, if that key was
    /// classified as a buffer at construction.
    pub fn buffer(&self, key: &str) -> Option<&Buffer> {
        match self.cells.get(key)? {
            Cell::Buffer(buf) => Some(buf),
            Cell::Plain(_) => None,
        }
    }

    /// Path-addressed mutation.
    ///
    /// Intermediate segments resolve polymorphically through whatever
    /// container kind they hit (map, sequence, buffer, cursor); the final
    /// segment applies the variant-appropriate write. Malformed writes
    /// (a dead-end walk, a bad index, a schema mismatch) are silent
    /// no-ops that leave prior state intact. The only error is an empty
    /// path, which has no target and is a caller bug.
    pub fn set(&mut self, path: &[&str], value: Value) -> Result<(), DocumentError> {
        let (last, walk) = path.split_last().ok_or(DocumentError::EmptyPath)?;
        let mut target = Target::Root(&mut self.cells);
        for &segment in walk {
            target = match target.descend(segment) {
                Some(next) => next,
                None => {
                    log::debug!("set dropped: path {path:?} dead-ends at {segment:?}");
                    return Ok(());
                }
            };
        }
        target.assign(*last, value);
        Ok(())
    }

    /// Take a deep snapshot of the whole document.
    ///
    /// Buffers dump themselves and are re-keyed with the sigil prefix;
    /// everything else is deep-copied. Later mutation of the live
    /// document never alters a previously taken snapshot.
    pub fn dump(&self) -> DocumentDump {
        self.cells
            .iter()
            .map(|(key, cell)| match cell {
                Cell::Buffer(buf) => (
                    format!("{BUFFER_SIGIL}{key}"),
                    DumpValue::Buffer(buf.dump()),
                ),
                Cell::Plain(value) => (key.clone(), DumpValue::Plain(value.clone())),
            })
            .collect()
    }
}
