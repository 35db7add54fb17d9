use thiserror::Error;

/// Everything that can go wrong while decoding or extracting values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not enough data for encoded value")]
    EndOfInput,

    #[error("Special value {0} is not assigned")]
    IllegalSpecialFloat(u8),

    #[error("Reserved tiny count {0} has no numeric value")]
    SpecialCount(u8),

    #[error("Indefinite length is not permitted for {0}")]
    IndefiniteCount(&'static str),

    #[error("Incorrect type, expecting {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Chunked string contains an invalid chunk")]
    InvalidChunk,

    #[error("Map has a key but no value")]
    PartialMap,

    #[error("Maximum nesting depth reached")]
    MaxDepth,

    #[error(transparent)]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    IntRange(#[from] std::num::TryFromIntError),
}
