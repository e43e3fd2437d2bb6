//! Schema-typed record buffers
//!
//! A [`Buffer`] is a collection of fixed-shape tuples validated against a
//! declared [`Schema`](crate::models::Schema). Three backends share one
//! contract (`get`/`put`/`set`/`dump`):
//!
//! - [`FixedBuffer`]: fixed capacity, integer-indexed slots
//! - [`CyclicBuffer`]: fixed capacity ring, oldest tuple overwritten
//! - [`KeyedBuffer`]: unbounded, string-keyed
//!
//! The enum is closed on purpose: path resolution and dumps match on it
//! exhaustively, so adding a backend is a compile-guided change.

pub mod cursor;
pub mod cyclic;
pub mod declare;
pub mod fixed;
pub mod keyed;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{Schema, Tuple, Value};

pub use cursor::Cursor;
pub use cyclic::CyclicBuffer;
pub use declare::{parse_declaration, BufferDecl, BUFFER_SIGIL};
pub use fixed::FixedBuffer;
pub use keyed::KeyedBuffer;

/// A schema-typed tuple collection with one of three storage backends.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    Fixed(FixedBuffer),
    Cyclic(CyclicBuffer),
    Keyed(KeyedBuffer),
}

impl Buffer {
    /// Classify a raw construction value as a buffer, if it is a string
    /// holding a valid declaration (see [`declare`]).
    pub fn from_declaration(value: &Value) -> Option<Buffer> {
        declare::declare_buffer(value)
    }

    /// The schema every stored tuple was validated against.
    pub fn schema(&self) -> &Schema {
        match self {
            Buffer::Fixed(b) => b.schema(),
            Buffer::Cyclic(b) => b.schema(),
            Buffer::Keyed(b) => b.schema(),
        }
    }

    /// Cursor over the tuple slot addressed by `key`.
    ///
    /// Key interpretation is per-variant: a slot index for fixed buffers,
    /// ignored by cyclic buffers (the head is the only address), a map key
    /// for keyed buffers.
    pub fn get(&mut self, key: &str) -> Option<Cursor<'_>> {
        match self {
            Buffer::Fixed(b) => b.get(key),
            Buffer::Cyclic(b) => b.get(key),
            Buffer::Keyed(b) => b.get(key),
        }
    }

    /// Overwrite the whole buffer content. Input whose shape does not fit
    /// the variant is dropped without touching prior state.
    pub fn put(&mut self, value: Value) {
        match self {
            Buffer::Fixed(b) => b.put(value),
            Buffer::Cyclic(b) => b.put(value),
            Buffer::Keyed(b) => b.put(value),
        }
    }

    /// Validate and store one tuple at one slot; `Null` clears the slot.
    pub fn set(&mut self, key: &str, value: Value) {
        match self {
            Buffer::Fixed(b) => b.set(key, value),
            Buffer::Cyclic(b) => b.set(key, value),
            Buffer::Keyed(b) => b.set(key, value),
        }
    }

    /// Deep, self-describing snapshot. Never aliases live storage.
    pub fn dump(&self) -> BufferDump {
        match self {
            Buffer::Fixed(b) => b.dump(),
            Buffer::Cyclic(b) => b.dump(),
            Buffer::Keyed(b) => b.dump(),
        }
    }

    /// List the live tuples as field-keyed records, in variant order
    /// (slot order, append order, or sorted keys).
    pub fn records(&self) -> Vec<HashMap<String, Value>> {
        match self {
            Buffer::Fixed(b) => b.records(),
            Buffer::Cyclic(b) => b.records(),
            Buffer::Keyed(b) => b.records(),
        }
    }

    /// Rebuild a live buffer from its snapshot.
    pub fn from_dump(dump: BufferDump) -> Buffer {
        match dump {
            BufferDump::Fixed { schema, tuples } => {
                Buffer::Fixed(FixedBuffer::from_parts(schema, tuples))
            }
            BufferDump::Cyclic {
                schema,
                capacity,
                tuples,
            } => {
                let capacity = capacity.max(tuples.len());
                let filled = tuples.len();
                let mut slots: Vec<Option<Tuple>> = tuples.into_iter().map(Some).collect();
                slots.resize(capacity, None);
                // head = next write position, which keeps logical order intact
                let head = if capacity == 0 { 0 } else { filled % capacity };
                Buffer::Cyclic(CyclicBuffer::from_parts(schema, slots, head))
            }
            BufferDump::Keyed { schema, tuples } => {
                Buffer::Keyed(KeyedBuffer::from_parts(schema, tuples.into_iter().collect()))
            }
        }
    }
}

/// A buffer snapshot: variant tag, schema field list, and the tuple
/// collection in variant-appropriate order/keying.
///
/// Serializes internally tagged, e.g.
/// `{"kind":"fixed","schema":["name","points"],"tuples":[...]}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BufferDump {
    /// All slots in positional order; empty slots are `null`.
    Fixed {
        schema: Schema,
        tuples: Vec<Option<Tuple>>,
    },
    /// Live tuples oldest-to-newest, plus the declared capacity so a
    /// partially filled ring stays round-trippable.
    Cyclic {
        schema: Schema,
        capacity: usize,
        tuples: Vec<Tuple>,
    },
    /// Key-sorted tuples.
    Keyed {
        schema: Schema,
        tuples: BTreeMap<String, Tuple>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, points: i64) -> Value {
        Value::Seq(vec![name.into(), Value::Int(points)])
    }

    #[test]
    fn test_dump_does_not_alias_live_storage() {
        let mut buf = Buffer::from_declaration(&Value::Str("2 name points".into())).unwrap();
        buf.set("0", row("Ann", 10));
        let before = buf.dump();
        buf.set("0", row("Ann", 99));
        assert_ne!(before, buf.dump(), "snapshot must not track later writes");
        let BufferDump::Fixed { tuples, .. } = before else {
            panic!("fixed buffer must dump as fixed");
        };
        assert_eq!(tuples[0].as_ref().unwrap()[1], Value::Int(10));
    }

    #[test]
    fn test_from_dump_round_trips_fixed() {
        let mut buf = Buffer::from_declaration(&Value::Str("3 name points".into())).unwrap();
        buf.set("1", row("Bo", 7));
        let rebuilt = Buffer::from_dump(buf.dump());
        assert_eq!(rebuilt.dump(), buf.dump());
    }

    #[test]
    fn test_from_dump_round_trips_partial_ring() {
        let mut buf = Buffer::from_declaration(&Value::Str("-4 name points".into())).unwrap();
        buf.set("", row("Ann", 10));
        buf.set("", row("Bo", 7));
        let mut rebuilt = Buffer::from_dump(buf.dump());
        assert_eq!(rebuilt.dump(), buf.dump());

        // appends continue after the newest tuple, same as the original
        rebuilt.set("", row("Cy", 3));
        let recs = rebuilt.records();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[2]["name"], Value::Str("Cy".into()));
    }

    #[test]
    fn test_from_dump_round_trips_keyed() {
        let mut buf = Buffer::from_declaration(&Value::Str("0 name points".into())).unwrap();
        buf.set("ann", row("Ann", 10));
        buf.set("bo", row("Bo", 7));
        let rebuilt = Buffer::from_dump(buf.dump());
        assert_eq!(rebuilt.dump(), buf.dump());
    }

    #[test]
    fn test_dump_serde_round_trip() {
        let mut buf = Buffer::from_declaration(&Value::Str("-2 at msg".into())).unwrap();
        buf.set("", Value::Seq(vec![Value::Int(1), "tick".into()]));
        let dump = buf.dump();
        let json = serde_json::to_string(&dump).unwrap();
        assert!(json.contains(r#""kind":"cyclic""#));
        let back: BufferDump = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dump);
    }
}
