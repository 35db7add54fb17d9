//! Encoding a [`Value`] tree into the canonical CBOR wire form.

use crate::float::float_count;
use crate::header::{write_header, Count, Header, MajorType};
use crate::value::Value;

/// Encode `value` into a fresh buffer.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_to(value, &mut out);
    out
}

/// Encode `value` onto the end of `out`, returning the number of bytes
/// written.
///
/// Output is always the canonical shortest form: minimal headers,
/// demoted floats, definite lengths, map entries in key order.
pub fn encode_to(value: &Value, out: &mut Vec<u8>) -> usize {
    match value {
        Value::Positive(n) => write_header(out, Header::new(MajorType::PositiveInteger, *n)),
        Value::Negative(n) => write_header(out, Header::new(MajorType::NegativeInteger, *n)),
        Value::Bytes(bytes) => {
            let len = write_header(out, Header::new(MajorType::ByteString, bytes.len() as u64));
            out.extend_from_slice(bytes);
            len + bytes.len()
        }
        Value::Text(text) => {
            let len = write_header(out, Header::new(MajorType::Utf8String, text.len() as u64));
            out.extend_from_slice(text);
            len + text.len()
        }
        Value::Array(items) => {
            let mut len = write_header(out, Header::new(MajorType::Array, items.len() as u64));
            for item in items {
                len += encode_to(item, out);
            }
            len
        }
        Value::Map(map) => {
            // BTreeMap iteration is already canonical key order.
            let mut len = write_header(out, Header::new(MajorType::Map, map.len() as u64));
            for (key, value) in map {
                len += encode_to(key, out);
                len += encode_to(value, out);
            }
            len
        }
        Value::Tag(id, inner) => {
            let len = write_header(out, Header::new(MajorType::SemanticTag, *id));
            len + encode_to(inner, out)
        }
        Value::Bool(value) => write_header(
            out,
            Header {
                major: MajorType::SpecialFloat,
                count: Count::Tiny(if *value { 21 } else { 20 }),
            },
        ),
        Value::Null => write_header(
            out,
            Header {
                major: MajorType::SpecialFloat,
                count: Count::Tiny(22),
            },
        ),
        Value::Undefined => write_header(
            out,
            Header {
                major: MajorType::SpecialFloat,
                count: Count::Tiny(23),
            },
        ),
        Value::Float(value) => write_header(
            out,
            Header {
                major: MajorType::SpecialFloat,
                count: float_count(*value),
            },
        ),
        Value::Break => write_header(out, Header::indefinite(MajorType::SpecialFloat)),
    }
}
