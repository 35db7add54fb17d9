//! The CBOR header: the major-type + count prefix on every data item.

use crate::error::Error;

/// Tiny count marking an indefinite length; also the BREAK byte's low bits.
pub(crate) const INDEFINITE: u8 = 31;

/// The major type carried in the top three bits of the initial byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MajorType {
    PositiveInteger = 0,
    NegativeInteger = 1,
    ByteString = 2,
    Utf8String = 3,
    Array = 4,
    Map = 5,
    SemanticTag = 6,
    SpecialFloat = 7,
}

impl MajorType {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => MajorType::PositiveInteger,
            1 => MajorType::NegativeInteger,
            2 => MajorType::ByteString,
            3 => MajorType::Utf8String,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::SemanticTag,
            7 => MajorType::SpecialFloat,
            _ => unreachable!(),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            MajorType::PositiveInteger => "positive integer",
            MajorType::NegativeInteger => "negative integer",
            MajorType::ByteString => "byte string",
            MajorType::Utf8String => "text string",
            MajorType::Array => "array",
            MajorType::Map => "map",
            MajorType::SemanticTag => "semantic tag",
            MajorType::SpecialFloat => "special or float",
        }
    }
}

/// How the count is represented on the wire.
///
/// The arm is load-bearing: a `SpecialFloat` header uses the `Two`,
/// `Four` and `Eight` arms as IEEE-754 bit patterns rather than lengths,
/// so a count must not be normalized to a plain integer before emission.
/// The derived ordering (arm first, then value) matches the lexicographic
/// order of the encoded form for a fixed major type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Count {
    /// The bottom five bits of the initial byte: 0-23, or 31 for indefinite.
    Tiny(u8),
    /// One following byte.
    One(u8),
    /// Two following big-endian bytes.
    Two(u16),
    /// Four following big-endian bytes.
    Four(u32),
    /// Eight following big-endian bytes.
    Eight(u64),
}

/// A decoded or to-be-encoded major type + count prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) major: MajorType,
    pub(crate) count: Count,
}

impl Header {
    /// Header with the smallest count arm that can carry `count`.
    pub(crate) fn new(major: MajorType, count: u64) -> Self {
        let count = if count < 24 {
            Count::Tiny(count as u8)
        } else if count <= u8::MAX as u64 {
            Count::One(count as u8)
        } else if count <= u16::MAX as u64 {
            Count::Two(count as u16)
        } else if count <= u32::MAX as u64 {
            Count::Four(count as u32)
        } else {
            Count::Eight(count)
        };
        Self { major, count }
    }

    /// Header carrying the indefinite-length marker.
    pub(crate) fn indefinite(major: MajorType) -> Self {
        Self {
            major,
            count: Count::Tiny(INDEFINITE),
        }
    }

    /// The numeric count, or `None` for an indefinite length.
    ///
    /// Tiny counts 24-30 are reserved and resolve to no number at all;
    /// asking for one is [`Error::SpecialCount`].
    pub(crate) fn normalized_count(&self) -> Result<Option<u64>, Error> {
        match self.count {
            Count::Tiny(tiny) if tiny < 24 => Ok(Some(tiny as u64)),
            Count::Tiny(INDEFINITE) => Ok(None),
            Count::Tiny(tiny) => Err(Error::SpecialCount(tiny)),
            Count::One(count) => Ok(Some(count as u64)),
            Count::Two(count) => Ok(Some(count as u64)),
            Count::Four(count) => Ok(Some(count as u64)),
            Count::Eight(count) => Ok(Some(count)),
        }
    }

    /// [`Self::normalized_count`] for majors where RFC 8949 forbids the
    /// indefinite marker (integers and tags).
    pub(crate) fn definite_count(&self) -> Result<u64, Error> {
        self.normalized_count()?
            .ok_or(Error::IndefiniteCount(self.major.name()))
    }
}

/// Append `header` to `out`, returning the number of bytes written.
pub(crate) fn write_header(out: &mut Vec<u8>, header: Header) -> usize {
    let major = (header.major as u8) << 5;
    match header.count {
        Count::Tiny(tiny) => {
            out.push(major | tiny);
            1
        }
        Count::One(count) => {
            out.push(major | 24);
            out.push(count);
            2
        }
        Count::Two(count) => {
            out.push(major | 25);
            out.extend_from_slice(&count.to_be_bytes());
            3
        }
        Count::Four(count) => {
            out.push(major | 26);
            out.extend_from_slice(&count.to_be_bytes());
            5
        }
        Count::Eight(count) => {
            out.push(major | 27);
            out.extend_from_slice(&count.to_be_bytes());
            9
        }
    }
}

/// Read one header from the front of `data`, returning it together with
/// the number of bytes consumed.
pub(crate) fn read_header(data: &[u8]) -> Result<(Header, usize), Error> {
    let initial = *data.first().ok_or(Error::EndOfInput)?;
    let major = MajorType::from_bits(initial >> 5);
    let (count, len) = match initial & 0x1f {
        24 => (Count::One(*data.get(1).ok_or(Error::EndOfInput)?), 2),
        25 => (Count::Two(u16::from_be_bytes(take(data, 1)?)), 3),
        26 => (Count::Four(u32::from_be_bytes(take(data, 1)?)), 5),
        27 => (Count::Eight(u64::from_be_bytes(take(data, 1)?)), 9),
        tiny => (Count::Tiny(tiny), 1),
    };
    Ok((Header { major, count }, len))
}

/// Grab `N` bytes starting at `offset` as a fixed array.
pub(crate) fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], Error> {
    data.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(Error::EndOfInput)
}
