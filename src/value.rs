//! The in-memory CBOR value tree.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::Error;
use crate::float::float_count;

/// A mapping of CBOR values keyed by canonical ordering, so that encoded
/// output is deterministic regardless of insertion order.
pub type Map = BTreeMap<Value, Value>;

/// A single CBOR data item.
///
/// Containers own their children outright; the tree is acyclic by
/// construction. Variants are declared in canonical cross-kind order,
/// which tracks the first byte of the encoded form.
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer in `0..=u64::MAX`.
    Positive(u64),
    /// The integer `-1 - n`, reaching down to `-2^64`.
    Negative(u64),
    Bytes(Vec<u8>),
    /// UTF-8 code units, carried verbatim. The decoder does not validate
    /// them; interpretation as `&str` happens through the fallible
    /// accessors.
    Text(Vec<u8>),
    Array(Vec<Value>),
    Map(Map),
    /// A semantic tag number and the single value it annotates. The tag
    /// is carried verbatim; no interpretation is attached.
    Tag(u64, Box<Value>),
    Bool(bool),
    Null,
    Undefined,
    Float(f64),
    /// The indefinite-length terminator. A wire artifact, not application
    /// data; container decoding consumes it before it reaches a tree.
    Break,
}

impl Value {
    /// Build a tagged value.
    pub fn tag(id: u64, value: impl Into<Value>) -> Self {
        Value::Tag(id, Box::new(value.into()))
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Positive(n) => Some(*n),
            _ => None,
        }
    }

    /// The integer value, if it is one `i64` can represent.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Positive(n) => i64::try_from(*n).ok(),
            Value::Negative(n) => i64::try_from(*n).ok().map(|n| -1 - n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The text as `&str`, if this is a text string holding valid UTF-8.
    /// Use [`Self::as_text`] for the raw code units, or
    /// `<&str>::try_from` to tell the two failure cases apart.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => std::str::from_utf8(text).ok(),
            _ => None,
        }
    }

    /// The raw code units of a text string, valid UTF-8 or not.
    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::Positive(_) => "positive integer",
            Value::Negative(_) => "negative integer",
            Value::Bytes(_) => "byte string",
            Value::Text(_) => "text string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Tag(..) => "semantic tag",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Float(_) => "float",
            Value::Break => "break",
        }
    }

    /// Position of the variant in canonical cross-kind order.
    fn rank(&self) -> u8 {
        match self {
            Value::Positive(_) => 0,
            Value::Negative(_) => 1,
            Value::Bytes(_) => 2,
            Value::Text(_) => 3,
            Value::Array(_) => 4,
            Value::Map(_) => 5,
            Value::Tag(..) => 6,
            Value::Bool(_) => 7,
            Value::Null => 8,
            Value::Undefined => 9,
            Value::Float(_) => 10,
            Value::Break => 11,
        }
    }
}

/// Canonical total order: same-kind containers and strings compare by
/// length first, then lexicographically by element; floats compare by
/// their canonical wire form; unrelated kinds follow the order of their
/// encoded bytes.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Positive(a), Value::Positive(b)) => a.cmp(b),
            (Value::Negative(a), Value::Negative(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Value::Text(a), Value::Text(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.iter().cmp(b.iter()))
            }
            (Value::Tag(a, inner_a), Value::Tag(b, inner_b)) => {
                a.cmp(b).then_with(|| inner_a.cmp(inner_b))
            }
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => float_count(*a).cmp(&float_count(*b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality is `cmp == Equal`, keeping `Eq` consistent with `Ord` as
/// `BTreeMap` keys require. For floats that means comparison of the
/// canonical encoding: every NaN equals every other NaN, and +0.0 and
/// -0.0 are distinct. Both diverge from IEEE 754 on purpose.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Positive(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Positive(value as u64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Positive(value as u64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Positive(value as u64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Positive(value as u64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Value::Positive(value as u64)
        } else {
            // -1 - n in two's complement is !n, which also lands
            // i64::MIN on Negative(i64::MAX) without overflow.
            Value::Negative(!value as u64)
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::from(value as i64)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::from(value as i64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::from(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl TryFrom<&Value> for u64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Positive(n) => Ok(*n),
            other => Err(Error::InvalidType {
                expected: "positive integer",
                found: other.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Positive(n) => Ok(i64::try_from(*n)?),
            Value::Negative(n) => Ok(-1 - i64::try_from(*n)?),
            other => Err(Error::InvalidType {
                expected: "integer",
                found: other.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Float(f) => Ok(*f),
            other => Err(Error::InvalidType {
                expected: "float",
                found: other.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::InvalidType {
                expected: "boolean",
                found: other.type_name(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Error> {
        match value {
            Value::Text(text) => Ok(std::str::from_utf8(text)?),
            other => Err(Error::InvalidType {
                expected: "text string",
                found: other.type_name(),
            }),
        }
    }
}
