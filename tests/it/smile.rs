// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use json_smile::{decode, encode_smile_simple, Error, Member, Number, Value};

const HEADER: [u8; 4] = [0x3A, 0x29, 0x0A, 0x00];

fn with_header(payload: &[u8]) -> Vec<u8> {
    let mut buf = HEADER.to_vec();
    buf.extend_from_slice(payload);
    buf
}

fn word(coefficient: i64, exponent: i64) -> Value<'static> {
    Value::Number(Number::Word {
        coefficient,
        exponent,
    })
}

#[test]
fn test_smile_literals() {
    assert_eq!(encode_smile_simple(&Value::Null).unwrap(), with_header(&[0x21]));
    assert_eq!(encode_smile_simple(&Value::False).unwrap(), with_header(&[0x22]));
    assert_eq!(encode_smile_simple(&Value::True).unwrap(), with_header(&[0x23]));
}

#[test]
fn test_smile_string() {
    assert_eq!(
        encode_smile_simple(&Value::String(Cow::from("abc"))).unwrap(),
        with_header(&[0xE4, 0x61, 0x62, 0x63, 0xFC])
    );
    assert_eq!(
        encode_smile_simple(&Value::String(Cow::from(""))).unwrap(),
        with_header(&[0xE4, 0xFC])
    );
    // UTF-8 bytes pass through unchanged
    assert_eq!(
        encode_smile_simple(&Value::String(Cow::from("é"))).unwrap(),
        with_header(&[0xE4, 0xC3, 0xA9, 0xFC])
    );
}

#[test]
fn test_smile_int32() {
    assert_eq!(
        encode_smile_simple(&word(0, 0)).unwrap(),
        with_header(&[0x24, 0x00])
    );
    assert_eq!(
        encode_smile_simple(&word(1, 0)).unwrap(),
        with_header(&[0x24, 0x02])
    );
    assert_eq!(
        encode_smile_simple(&word(-1, 0)).unwrap(),
        with_header(&[0x24, 0x01])
    );
    assert_eq!(
        encode_smile_simple(&word(300, 0)).unwrap(),
        with_header(&[0x24, 0xD8, 0x04])
    );
    // the exponent folds into the integer when the value is exact
    assert_eq!(
        encode_smile_simple(&word(55, 2)).unwrap(),
        with_header(&[0x24, 0xF8, 0x55])
    );
    assert_eq!(
        encode_smile_simple(&word(i32::MAX as i64, 0)).unwrap(),
        with_header(&[0x24, 0xFE, 0xFF, 0xFF, 0xFF, 0x0F])
    );
}

#[test]
fn test_smile_int64() {
    // one past i32::MAX moves to the 64-bit token
    assert_eq!(
        encode_smile_simple(&word(i32::MAX as i64 + 1, 0)).unwrap(),
        with_header(&[0x25, 0x80, 0x80, 0x80, 0x80, 0x10])
    );
    assert_eq!(
        encode_smile_simple(&word(5_000_000_000, 0)).unwrap(),
        with_header(&[0x25, 0x80, 0xC8, 0xAF, 0xA0, 0x25])
    );
}

#[test]
fn test_smile_big_decimal() {
    // 0.5: exponent -1, 8 coefficient bytes, 7/8 packed
    assert_eq!(
        encode_smile_simple(&word(5, -1)).unwrap(),
        with_header(&[
            0x2A, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x40,
        ])
    );
    // -0.02: negative coefficient keeps its two's complement bytes
    assert_eq!(
        encode_smile_simple(&word(-2, -2)).unwrap(),
        with_header(&[
            0x2A, 0x03, 0x08, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x00,
        ])
    );
    // exponents beyond 32 bits wrap modulo 2^32
    assert_eq!(
        encode_smile_simple(&word(5, (1_i64 << 32) + 3)).unwrap(),
        with_header(&[
            0x2A, 0x06, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x40,
        ])
    );
}

#[test]
fn test_smile_unsupported_number() {
    let value = decode(b"123456789012345678901234567890123456789").unwrap();
    assert_eq!(
        encode_smile_simple(&value),
        Err(Error::UnsupportedNumber)
    );
    assert_eq!(value.to_smile_vec(), Err(Error::UnsupportedNumber));
}

#[test]
fn test_smile_array() {
    assert_eq!(
        encode_smile_simple(&Value::Array(vec![])).unwrap(),
        with_header(&[0xF8, 0xF9])
    );
    assert_eq!(
        encode_smile_simple(&Value::Array(vec![Value::True, Value::False, Value::Null]))
            .unwrap(),
        with_header(&[0xF8, 0x23, 0x22, 0x21, 0xF9])
    );
}

#[test]
fn test_smile_object() {
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![])).unwrap(),
        with_header(&[0xFA, 0xFB])
    );
    // empty key, integer zero value
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new(
            "",
            Value::Number(Number::from_int(0)),
        )]))
        .unwrap(),
        with_header(&[0xFA, 0x20, 0x24, 0x00, 0xFB])
    );
    // nested containers with a single-byte key
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new(
            "k",
            Value::Array(vec![Value::Null, word(12, 0)]),
        )]))
        .unwrap(),
        with_header(&[0xFA, 0x80, 0x6B, 0xF8, 0x21, 0x24, 0x18, 0xF9, 0xFB])
    );
}

#[test]
fn test_smile_keys() {
    // 2-byte key uses the length-prefixed short form
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new("ab", Value::Null)])).unwrap(),
        with_header(&[0xFA, 0xC0, 0x61, 0x62, 0x21, 0xFB])
    );
    // longest short key, 55 bytes
    let key = "k".repeat(55);
    let mut expected = vec![0xFA, 0xC0 + 53];
    expected.extend_from_slice(key.as_bytes());
    expected.extend_from_slice(&[0x21, 0xFB]);
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new(key, Value::Null)])).unwrap(),
        with_header(&expected)
    );
    // 56 bytes and beyond use the end-marker framing
    let key = "k".repeat(56);
    let mut expected = vec![0xFA, 0x34];
    expected.extend_from_slice(key.as_bytes());
    expected.extend_from_slice(&[0xFC, 0x21, 0xFB]);
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new(key, Value::Null)])).unwrap(),
        with_header(&expected)
    );
    // multi-byte keys count UTF-8 bytes, not characters
    assert_eq!(
        encode_smile_simple(&Value::Object(vec![Member::new("é", Value::Null)])).unwrap(),
        with_header(&[0xFA, 0xC0, 0xC3, 0xA9, 0x21, 0xFB])
    );
}

#[test]
fn test_smile_decoded_document() {
    let value = decode(b" [ 55e2 , 1 ] ").unwrap();
    assert_eq!(
        encode_smile_simple(&value).unwrap(),
        with_header(&[0xF8, 0x24, 0xF8, 0x55, 0x24, 0x02, 0xF9])
    );
}
