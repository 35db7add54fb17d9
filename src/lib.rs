//! A tree-model CBOR (RFC 8949) codec.
//!
//! A [`Value`] is a recursive sum type covering every CBOR data item kind.
//! [`encode`] walks a tree depth-first and always emits the canonical,
//! shortest wire form: integers take the smallest header, floats are
//! demoted to single or half precision whenever the demotion is exact,
//! and map entries are emitted in canonical key order. [`decode`] accepts
//! any well-formed RFC 8949 input, including indefinite-length strings
//! and containers, and materializes the same tree either way.
//!
//! ```
//! use arbor::{decode, encode, Value};
//!
//! let value = Value::Array(vec![Value::from("meter"), Value::from(-40)]);
//! let bytes = encode(&value);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod decode;
pub mod encode;
pub mod value;

mod error;
mod float;
mod header;

pub use decode::{decode, decode_from, decode_with_max_depth};
pub use encode::{encode, encode_to};
pub use error::Error;
pub use value::{Map, Value};



#[cfg(test)]
mod value_tests;
