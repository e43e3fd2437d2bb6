//! Buffer declaration grammar
//!
//! A declaration is a whitespace-separated token string: a signed decimal
//! capacity followed by one or more field names, e.g. `"3 name points"`.
//! The capacity's sign selects the variant:
//!
//! - positive: fixed buffer of that capacity
//! - negative: cyclic buffer of the absolute capacity
//! - zero: keyed buffer (unbounded)
//!
//! Parsing is a pure function, kept apart from document construction so
//! the grammar is testable in isolation. A string that does not parse is
//! simply not a declaration; the document stores it as a plain value.

use crate::models::{Schema, Value};

use super::{Buffer, CyclicBuffer, FixedBuffer, KeyedBuffer};

/// Reserved sigil marking a document key as a buffer declaration.
pub const BUFFER_SIGIL: char = '#';

/// A parsed buffer declaration: signed capacity plus field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDecl {
    pub capacity: i64,
    pub fields: Vec<String>,
}

impl BufferDecl {
    /// Build the live buffer this declaration describes.
    pub fn build(self) -> Buffer {
        let schema = Schema::new(self.fields);
        if self.capacity > 0 {
            Buffer::Fixed(FixedBuffer::new(schema, self.capacity as usize))
        } else if self.capacity < 0 {
            Buffer::Cyclic(CyclicBuffer::new(schema, self.capacity.unsigned_abs() as usize))
        } else {
            Buffer::Keyed(KeyedBuffer::new(schema))
        }
    }
}

/// Parse a declaration token string.
///
/// Requires at least two tokens with an integer first token; anything
/// else yields `None`.
pub fn parse_declaration(decl: &str) -> Option<BufferDecl> {
    let mut tokens = decl.split_whitespace();
    let capacity: i64 = tokens.next()?.parse().ok()?;
    let fields: Vec<String> = tokens.map(str::to_string).collect();
    if fields.is_empty() {
        return None;
    }
    Some(BufferDecl { capacity, fields })
}

/// Classify a raw construction value as a buffer, if it is a string
/// holding a valid declaration.
pub fn declare_buffer(value: &Value) -> Option<Buffer> {
    let decl = value.as_str()?;
    Some(parse_declaration(decl)?.build())
}
