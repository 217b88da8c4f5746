//! Descriptive payload schemas.
//!
//! A [`Shape`] documents what an event payload looks like for webhook
//! consumers. It is metadata only — nothing in this service ever validates
//! a real payload against it.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// The shape of one value in an event payload.
///
/// Serializes to JSON as a bare type-tag string, an object of named fields,
/// or a single-element array describing the element shape of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A primitive type tag such as `"string"`, `"int"`, or `"string|null"`.
    Tag(&'static str),
    /// A sub-object with a fixed set of fields, in declaration order.
    Object(&'static [Field]),
    /// A sequence whose elements all share one shape.
    List(&'static Shape),
}

/// A named field inside a [`Shape::Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

/// Shorthand for building [`Field`]s in const catalog tables.
pub const fn field(name: &'static str, shape: Shape) -> Field {
    Field { name, shape }
}

pub const STRING: Shape = Shape::Tag("string");
pub const INT: Shape = Shape::Tag("int");
pub const BOOL: Shape = Shape::Tag("bool");
pub const NULLABLE_STRING: Shape = Shape::Tag("string|null");

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Shape::Tag(tag) => serializer.serialize_str(tag),
            Shape::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for field in *fields {
                    map.serialize_entry(field.name, &field.shape)?;
                }
                map.end()
            }
            Shape::List(element) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(*element)?;
                seq.end()
            }
        }
    }
}
