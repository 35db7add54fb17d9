use std::cmp::Ordering;

use hex_literal::hex;

use super::encode::encode;
use super::error::Error;
use super::value::{Map, Value};

#[test]
fn integer_constructors() {
    assert_eq!(Value::from(0), Value::Positive(0));
    assert_eq!(Value::from(200u8), Value::Positive(200));
    assert_eq!(Value::from(i64::MAX), Value::Positive(i64::MAX as u64));
    assert_eq!(Value::from(-1), Value::Negative(0));
    assert_eq!(Value::from(-6), Value::Negative(5));
    assert_eq!(encode(&Value::from(-6)), hex!("25"));
    // -1 - n arithmetic must stay in u64; negating i64::MIN would overflow.
    assert_eq!(Value::from(i64::MIN), Value::Negative(i64::MAX as u64));
}

#[test]
fn integer_accessors() {
    assert_eq!(Value::from(7).as_u64(), Some(7));
    assert_eq!(Value::from(-7).as_u64(), None);
    assert_eq!(Value::from(-7).as_i64(), Some(-7));
    assert_eq!(Value::from(i64::MIN).as_i64(), Some(i64::MIN));
    // One past i64::MIN is representable in CBOR but not in i64.
    assert_eq!(Value::Negative(i64::MAX as u64 + 1).as_i64(), None);
    assert_eq!(Value::Positive(u64::MAX).as_i64(), None);
}

#[test]
fn typed_extraction() {
    assert_eq!(u64::try_from(&Value::from(9)).unwrap(), 9);
    assert_eq!(i64::try_from(&Value::from(-9)).unwrap(), -9);
    assert_eq!(
        i64::try_from(&Value::Negative(i64::MAX as u64)).unwrap(),
        i64::MIN
    );
    assert_eq!(f64::try_from(&Value::from(1.5)).unwrap(), 1.5);
    assert!(bool::try_from(&Value::from(true)).unwrap());

    assert!(matches!(
        u64::try_from(&Value::from("nine")),
        Err(Error::InvalidType {
            expected: "positive integer",
            found: "text string",
        })
    ));
    assert!(matches!(
        i64::try_from(&Value::Positive(u64::MAX)),
        Err(Error::IntRange(_))
    ));
    assert!(matches!(
        f64::try_from(&Value::Null),
        Err(Error::InvalidType { .. })
    ));
}

#[test]
fn text_extraction() {
    let text = Value::from("nine");
    assert_eq!(<&str>::try_from(&text).unwrap(), "nine");
    assert!(matches!(
        <&str>::try_from(&Value::Null),
        Err(Error::InvalidType { .. })
    ));
    // The units are stored unchecked; the error surfaces on extraction.
    let mojibake = Value::Text(hex!("c328").to_vec());
    assert!(matches!(
        <&str>::try_from(&mojibake),
        Err(Error::InvalidUtf8(_))
    ));
    assert_eq!(mojibake.as_str(), None);
    assert_eq!(mojibake.as_text(), Some(hex!("c328").as_slice()));
}

#[test]
fn container_accessors() {
    let value = Value::Array(vec![1.into(), 2.into()]);
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert!(value.as_map().is_none());
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(
        Value::from(hex!("0102").as_slice()).as_bytes(),
        Some(hex!("0102").as_slice())
    );
}

#[test]
fn structural_equality() {
    let first = Value::Array(vec!["1337".into(), "6969".into()]);
    let second = Value::Array(vec!["1337".into(), "6969".into()]);
    assert_eq!(first, second);
    assert_ne!(first, Value::Array(vec!["1337".into()]));
    assert_ne!(Value::from(1), Value::from(1.0));
    assert_ne!(Value::Null, Value::Undefined);
}

#[test]
fn float_equality_is_canonical() {
    // Library contract, not IEEE 754: NaNs are all equal to each other,
    // and the two zeroes are distinct.
    assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_eq!(
        Value::from(f64::NAN),
        Value::from(f64::from_bits(0x7ff8000000000001))
    );
    assert_ne!(Value::from(0.0), Value::from(-0.0));
    assert_eq!(Value::from(1.5), Value::from(1.5));
}

#[test]
fn nan_works_as_a_map_key() {
    let mut map = Map::new();
    map.insert(Value::from(f64::NAN), Value::from(1));
    let other_nan = Value::from(f64::from_bits(0xfff8000000000042));
    assert_eq!(map.get(&other_nan), Some(&Value::from(1)));

    map.insert(Value::from(0.0), Value::from(2));
    map.insert(Value::from(-0.0), Value::from(3));
    assert_eq!(map.len(), 3);
}

#[test]
fn containers_order_by_length_first() {
    // A shorter container sorts before a longer one even when its
    // elements are larger.
    let short = Value::Array(vec![1000.into()]);
    let long = Value::Array(vec![1.into(), 1.into()]);
    assert_eq!(short.cmp(&long), Ordering::Less);

    assert!(Value::from("b") < Value::from("aa"));
    assert!(Value::from("ab") < Value::from("ac"));
    assert!(Value::from(hex!("ff").as_slice()) < Value::from(hex!("0000").as_slice()));

    let small = Value::Map(Map::from([("z".into(), 1.into())]));
    let large = Value::Map(Map::from([
        ("a".into(), 1.into()),
        ("b".into(), 2.into()),
    ]));
    assert_eq!(small.cmp(&large), Ordering::Less);
}

#[test]
fn float_ordering_follows_the_wire_form() {
    // Canonical byte order, so negatives sort after positives.
    assert!(Value::from(1.0) < Value::from(2.0));
    assert!(Value::from(1.0) < Value::from(-1.0));
    // Half-width forms sort before single, single before double.
    assert!(Value::from(1.5) < Value::from(100000.0));
    assert!(Value::from(100000.0) < Value::from(1.1));
}

#[test]
fn ordering_tracks_encoded_bytes() {
    // Across every kind pair, the canonical order must agree with the
    // lexicographic order of the encoded form.
    let samples = [
        Value::Positive(0),
        Value::Positive(23),
        Value::Positive(24),
        Value::Positive(u64::MAX),
        Value::Negative(0),
        Value::Negative(1000),
        Value::Bytes(vec![]),
        Value::Bytes(vec![1, 2]),
        Value::from(""),
        Value::from("b"),
        Value::from("aa"),
        Value::Array(vec![]),
        Value::Array(vec![2.into()]),
        Value::Array(vec![1.into(), 1.into()]),
        Value::Map(Map::new()),
        Value::Map(Map::from([("a".into(), 1.into())])),
        Value::tag(0, 0),
        Value::tag(1, "x"),
        Value::Bool(false),
        Value::Bool(true),
        Value::Null,
        Value::Undefined,
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::Float(1.0),
        Value::Float(-1.0),
        Value::Float(1.1),
        Value::Float(100000.0),
        Value::Float(f64::NAN),
        Value::Break,
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(
                a.cmp(b),
                encode(a).cmp(&encode(b)),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn map_keys_are_deterministic() {
    let mut forward = Map::new();
    forward.insert("z".into(), 1.into());
    forward.insert("a".into(), 2.into());
    forward.insert(Value::Array(vec![9.into()]), 3.into());

    let mut backward = Map::new();
    backward.insert(Value::Array(vec![9.into()]), 3.into());
    backward.insert("a".into(), 2.into());
    backward.insert("z".into(), 1.into());

    assert_eq!(forward, backward);
    assert_eq!(
        encode(&Value::Map(forward)),
        encode(&Value::Map(backward))
    );
}
