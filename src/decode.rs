//! Decoding RFC 8949 bytes into a [`Value`] tree.

use crate::error::Error;
use crate::float::read_half;
use crate::header::{read_header, Count, Header, MajorType, INDEFINITE};
use crate::value::{Map, Value};

/// Nesting depth allowed before [`decode`] fails with [`Error::MaxDepth`],
/// bounding stack use against hostile input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decode the first value in `data`. Trailing bytes are ignored.
pub fn decode(data: &[u8]) -> Result<Value, Error> {
    decode_from(data).map(|(value, _)| value)
}

/// Decode the first value in `data`, returning it together with the
/// number of bytes consumed, so a caller can keep reading a sequence.
pub fn decode_from(data: &[u8]) -> Result<(Value, usize), Error> {
    decode_with_max_depth(data, DEFAULT_MAX_DEPTH)
}

/// [`decode_from`] with a caller-chosen nesting depth cap.
pub fn decode_with_max_depth(data: &[u8], max_depth: usize) -> Result<(Value, usize), Error> {
    let mut offset = 0;
    let value = decode_value(data, &mut offset, max_depth)?;
    Ok((value, offset))
}

fn decode_value(data: &[u8], offset: &mut usize, depth: usize) -> Result<Value, Error> {
    let (header, len) = read_header(&data[*offset..])?;
    *offset += len;
    match header.major {
        MajorType::PositiveInteger => Ok(Value::Positive(header.definite_count()?)),
        MajorType::NegativeInteger => Ok(Value::Negative(header.definite_count()?)),
        MajorType::ByteString => {
            let bytes = decode_string_payload(data, offset, header)?;
            Ok(Value::Bytes(bytes))
        }
        MajorType::Utf8String => {
            // Code units are preserved as-is; nothing here cares whether
            // they are valid UTF-8.
            let bytes = decode_string_payload(data, offset, header)?;
            Ok(Value::Text(bytes))
        }
        MajorType::Array => {
            let depth = nested(depth)?;
            let mut items = Vec::new();
            match header.normalized_count()? {
                Some(count) => {
                    for _ in 0..count {
                        items.push(decode_value(data, offset, depth)?);
                    }
                }
                None => loop {
                    match decode_value(data, offset, depth)? {
                        Value::Break => break,
                        item => items.push(item),
                    }
                },
            }
            Ok(Value::Array(items))
        }
        MajorType::Map => {
            let depth = nested(depth)?;
            let mut map = Map::new();
            match header.normalized_count()? {
                Some(count) => {
                    for _ in 0..count {
                        let key = decode_value(data, offset, depth)?;
                        let value = decode_value(data, offset, depth)?;
                        map.insert(key, value);
                    }
                }
                None => loop {
                    let key = decode_value(data, offset, depth)?;
                    if matches!(key, Value::Break) {
                        break;
                    }
                    let value = decode_value(data, offset, depth)?;
                    if matches!(value, Value::Break) {
                        return Err(Error::PartialMap);
                    }
                    map.insert(key, value);
                },
            }
            Ok(Value::Map(map))
        }
        MajorType::SemanticTag => {
            let depth = nested(depth)?;
            let id = header.definite_count()?;
            let inner = decode_value(data, offset, depth)?;
            Ok(Value::Tag(id, Box::new(inner)))
        }
        MajorType::SpecialFloat => match header.count {
            Count::Tiny(20) => Ok(Value::Bool(false)),
            Count::Tiny(21) => Ok(Value::Bool(true)),
            Count::Tiny(22) => Ok(Value::Null),
            Count::Tiny(23) => Ok(Value::Undefined),
            Count::Tiny(INDEFINITE) => Ok(Value::Break),
            Count::Tiny(tiny) => Err(Error::IllegalSpecialFloat(tiny)),
            // Simple values 32-255 are not materialized.
            Count::One(value) => Err(Error::IllegalSpecialFloat(value)),
            Count::Two(bits) => Ok(Value::Float(read_half(bits))),
            Count::Four(bits) => Ok(Value::Float(f32::from_bits(bits) as f64)),
            Count::Eight(bits) => Ok(Value::Float(f64::from_bits(bits))),
        },
    }
}

/// A definite-length string payload, or the concatenation of an
/// indefinite string's chunks.
fn decode_string_payload(
    data: &[u8],
    offset: &mut usize,
    header: Header,
) -> Result<Vec<u8>, Error> {
    match header.normalized_count()? {
        Some(count) => Ok(take_payload(data, offset, count)?.to_vec()),
        None => {
            let mut bytes = Vec::new();
            loop {
                let (chunk, len) = read_header(&data[*offset..])?;
                *offset += len;
                if chunk.major == MajorType::SpecialFloat
                    && chunk.count == Count::Tiny(INDEFINITE)
                {
                    return Ok(bytes);
                }
                // Chunks must be definite-length strings of the same major.
                if chunk.major != header.major {
                    return Err(Error::InvalidChunk);
                }
                let Some(count) = chunk.normalized_count()? else {
                    return Err(Error::InvalidChunk);
                };
                bytes.extend_from_slice(take_payload(data, offset, count)?);
            }
        }
    }
}

fn take_payload<'a>(data: &'a [u8], offset: &mut usize, count: u64) -> Result<&'a [u8], Error> {
    let len = usize::try_from(count).map_err(|_| Error::EndOfInput)?;
    let end = offset.checked_add(len).ok_or(Error::EndOfInput)?;
    let payload = data.get(*offset..end).ok_or(Error::EndOfInput)?;
    *offset = end;
    Ok(payload)
}

fn nested(depth: usize) -> Result<usize, Error> {
    depth.checked_sub(1).ok_or(Error::MaxDepth)
}
