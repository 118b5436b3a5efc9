//! The in-memory tag value model.

use indexmap::IndexMap;

use crate::tag::Tag;
use crate::{Error, Result};

/// A compound's entry mapping. Insertion order is preserved so that a
/// decode/encode round trip reproduces the original entry order.
pub type Compound = IndexMap<String, Value>;

/// A homogeneous list: one declared element type plus the elements.
///
/// Every item must carry exactly the declared tag, including nested lists
/// and compounds. [`List::of`] validates on construction and the encoder
/// re-checks defensively before writing.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub element: Tag,
    pub items: Vec<Value>,
}

impl List {
    /// An empty list of the given element type.
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds a list from items, validating that each matches `element`.
    ///
    /// # Errors
    /// Returns [`Error::ListElementMismatch`] naming the first offending item.
    pub fn of(element: Tag, items: Vec<Value>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            if item.tag() != element {
                return Err(Error::ListElementMismatch {
                    declared: element,
                    index,
                    actual: item.tag(),
                });
            }
        }
        Ok(Self { element, items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single value in the tag tree, one variant per wire type.
///
/// `Long` holds a native `i64`. The historical representation as a pair of
/// 32-bit halves (high half first) exists only as the interop conversions
/// [`Value::long_from_halves`] and [`Value::as_long_halves`]; it is not the
/// canonical form.
///
/// `ByteArray` holds `Vec<u8>`: the wire bytes are identical whether the
/// payload is viewed as signed or unsigned, and raw bytes are the idiomatic
/// carrier in Rust.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The compound terminator. Carries no payload and normally never
    /// appears inside a materialized tree; it exists so that lists declared
    /// with element type `end` (the empty-list convention of some writers)
    /// stay representable.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Value {
    /// The tag identifying this value's wire type.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    /// Builds a `Long` from the two-halves interop form: high 32 bits
    /// first, then low 32 bits, both as signed values of a 64-bit
    /// two's-complement number. Non-canonical; prefer `Value::Long(i64)`.
    pub fn long_from_halves(high: i32, low: i32) -> Self {
        Value::Long(((high as i64) << 32) | (low as u32 as i64))
    }

    /// The two-halves interop view of a `Long`, high half first.
    /// Returns `None` for every other variant.
    pub fn as_long_halves(&self) -> Option<(i32, i32)> {
        match self {
            Value::Long(v) => Some(((*v >> 32) as i32, *v as i32)),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[u8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::ByteArray(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::IntArray(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Value::List(v)
    }
}

impl From<Compound> for Value {
    fn from(v: Compound) -> Self {
        Value::Compound(v)
    }
}
