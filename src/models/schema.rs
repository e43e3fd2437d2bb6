//! Buffer schemas and the tuples they validate
//!
//! A [`Schema`] is an ordered list of field names owned by one buffer.
//! Every tuple stored in that buffer is produced by [`Schema::match_value`]
//! and therefore has exactly the schema's field count.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::value::Value;

/// An ordered, fixed-length array of values stored in one buffer slot.
pub type Tuple = Vec<Value>;

/// An ordered field list with a name-to-offset index.
///
/// Immutable once constructed. Shared by every tuple in the owning buffer.
#[derive(Clone, Debug)]
pub struct Schema {
    fields: Vec<String>,
    offsets: HashMap<String, usize>,
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for Schema {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<String>::deserialize(deserializer)?;
        Ok(Schema::new(fields))
    }
}

impl Schema {
    /// Create a schema from an ordered field list.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let offsets = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.clone(), i))
            .collect();
        Self { fields, offsets }
    }

    /// The ordered field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields, which is also the length of every matched tuple.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate a raw value into a positional tuple.
    ///
    /// Accepts exactly a sequence whose length equals the field count;
    /// anything else is rejected. This is the whole observable contract of
    /// the matcher; per-field coercion lives behind it and is not this
    /// crate's concern.
    pub fn match_value(&self, value: Value) -> Option<Tuple> {
        match value {
            Value::Seq(items) if items.len() == self.fields.len() => Some(items),
            _ => None,
        }
    }

    /// Resolve a field name or decimal positional index to a tuple offset.
    pub fn offset(&self, field: &str) -> Option<usize> {
        if let Some(&i) = self.offsets.get(field) {
            return Some(i);
        }
        match field.parse::<usize>() {
            Ok(i) if i < self.fields.len() => Some(i),
            _ => None,
        }
    }

    /// Render a tuple as a field-name-keyed record.
    pub fn record(&self, tuple: &Tuple) -> HashMap<String, Value> {
        self.fields
            .iter()
            .cloned()
            .zip(tuple.iter().cloned())
            .collect()
    }
}
