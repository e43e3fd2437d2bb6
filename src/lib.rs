//! Path-addressed document model with typed record buffers
//!
//! `relaydoc` is the in-memory state representation for a server process
//! holding UI-bound data: a mutable, hierarchical document whose leaves
//! are scalars, nested maps/sequences, or schema-typed record buffers
//! (fixed-capacity indexed, fixed-capacity cyclic, unbounded keyed).
//! Callers mutate documents through dotted/segmented paths and take deep
//! [`DocumentDump`](document::dump::DocumentDump) snapshots to push to a
//! remote renderer.
//!
//! The crate is single-threaded by design: serializing access per
//! document is the caller's job. Malformed per-field data never produces
//! a hard error: invalid writes are dropped and prior state survives.

pub mod buffers;
pub mod document;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use buffers::{Buffer, BufferDump, Cursor, CyclicBuffer, FixedBuffer, KeyedBuffer};
pub use document::dump::{DocumentDump, DumpValue};
pub use document::{Cell, Document};
pub use error::DocumentError;
pub use models::{Schema, Tuple, Value};
