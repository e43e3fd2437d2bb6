//! Polymorphic path targets
//!
//! Walking a document path means descending through whatever container
//! kind sits at each segment: the document's own cell map, a nested map,
//! a sequence (segment parsed as an index), a buffer, or a cursor into a
//! buffer tuple. [`Target`] is the closed set of those kinds with one
//! `descend` and one `assign` per variant, so the dispatch is checked
//! exhaustively.

use std::collections::HashMap;

use crate::buffers::{Buffer, Cursor};
use crate::models::Value;

use super::Cell;

/// The container a partially-resolved path currently points at.
pub(crate) enum Target<'a> {
    /// The document's own top-level cell map.
    Root(&'a mut HashMap<String, Cell>),
    /// A nested plain map.
    Map(&'a mut HashMap<String, Value>),
    /// A nested sequence; segments address it by decimal index.
    Seq(&'a mut Vec<Value>),
    /// A live buffer; the next segment addresses one tuple slot.
    Buffer(&'a mut Buffer),
    /// A cursor into one buffer tuple; the next segment addresses a field.
    Cursor(Cursor<'a>),
}

impl<'a> Target<'a> {
    /// Resolve one intermediate segment, or `None` when the segment leads
    /// nowhere (missing key, bad index, scalar in the way). Dead ends make
    /// the whole mutation a silent no-op.
    pub(crate) fn descend(self, segment: &str) -> Option<Target<'a>> {
        match self {
            Target::Root(cells) => match cells.get_mut(segment)? {
                Cell::Buffer(buf) => Some(Target::Buffer(buf)),
                Cell::Plain(value) => value_target(value),
            },
            Target::Map(map) => value_target(map.get_mut(segment)?),
            Target::Seq(seq) => {
                let i: usize = segment.parse().ok()?;
                value_target(seq.get_mut(i)?)
            }
            Target::Buffer(buf) => buf.get(segment).map(Target::Cursor),
            Target::Cursor(cursor) => value_target(cursor.into_field_mut(segment)?),
        }
    }

    /// Apply the final write against whatever container was reached.
    pub(crate) fn assign(self, segment: &str, value: Value) {
        match self {
            Target::Root(cells) => {
                // Buffers are update targets, never replaceable cells:
                // a top-level write to a buffer key forwards into `put`.
                if let Some(Cell::Buffer(buf)) = cells.get_mut(segment) {
                    buf.put(value);
                    return;
                }
                if value.is_null() {
                    cells.remove(segment);
                } else {
                    cells.insert(segment.to_string(), Cell::Plain(value));
                }
            }
            Target::Map(map) => {
                if value.is_null() {
                    map.remove(segment);
                } else {
                    map.insert(segment.to_string(), value);
                }
            }
            Target::Seq(seq) => {
                if let Ok(i) = segment.parse::<usize>() {
                    if let Some(slot) = seq.get_mut(i) {
                        *slot = value;
                    }
                }
            }
            Target::Buffer(buf) => buf.set(segment, value),
            Target::Cursor(mut cursor) => cursor.set(segment, value),
        }
    }
}

/// Map a plain value onto a walkable target; scalars are dead ends.
fn value_target(value: &mut Value) -> Option<Target<'_>> {
    match value {
        Value::Map(map) => Some(Target::Map(map)),
        Value::Seq(seq) => Some(Target::Seq(seq)),
        _ => None,
    }
}
