//! Data models for the document core
//!
//! This module holds the value union shared by every container kind and
//! the schema/tuple pair that typed buffers validate against.

pub mod schema;
pub mod value;

pub use schema::{Schema, Tuple};
pub use value::Value;
