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

use json_smile::{decode, Member, Number, Value};

fn test_decode_err(errors: &[(&str, &'static str)]) {
    for &(s, err) in errors {
        let res = decode(s.as_bytes());
        assert!(res.is_err());
        assert_eq!(res.err().unwrap().to_string(), err);
    }
}

fn test_decode_ok(tests: Vec<(&str, Value<'_>)>) {
    for (s, val) in tests {
        assert_eq!(decode(s.as_bytes()).unwrap(), val);
    }
}

fn word(coefficient: i64, exponent: i64) -> Value<'static> {
    Value::Number(Number::Word {
        coefficient,
        exponent,
    })
}

#[test]
fn test_decode_literals() {
    test_decode_err(&[
        ("", "empty input, pos 0"),
        ("   ", "empty input, pos 3"),
        ("n", "expected null literal, pos 1"),
        ("nul", "expected null literal, pos 3"),
        ("nulla", "trailing characters, pos 5"),
        ("truz", "expected true literal, pos 4"),
        ("faz", "expected false literal, pos 3"),
        ("NULL", "expected some value, pos 1"),
    ]);

    test_decode_ok(vec![
        ("null", Value::Null),
        ("true", Value::True),
        ("false", Value::False),
        (" true ", Value::True),
        ("\t\r\n false \n", Value::False),
    ]);
}

#[test]
fn test_decode_string() {
    test_decode_err(&[
        ("\"abc", "EOF while parsing a string, pos 4"),
        ("\"a\\qb\"", "invalid escape sequence, pos 4"),
        ("\"a\\", "invalid escape sequence, pos 3"),
        ("\"\\uD8\"", "invalid escape sequence, pos 6"),
    ]);

    test_decode_ok(vec![
        ("\"\"", Value::String(Cow::from(""))),
        ("\"bar\"", Value::String(Cow::from("bar"))),
        ("\"Smile: 😂\"", Value::String(Cow::from("Smile: 😂"))),
        ("\"测试\"", Value::String(Cow::from("测试"))),
        (
            "\"\\\" \\\\ \\/ \\b \\f \\n \\r \\t\"",
            Value::String(Cow::from("\" \\ / \x08 \x0C \n \r \t")),
        ),
        ("\"\\u0041\\u00e9\"", Value::String(Cow::from("Aé"))),
        ("\"\\u6D4B\"", Value::String(Cow::from("测"))),
        // raw control characters inside strings are tolerated
        ("\"a\x01b\"", Value::String(Cow::from("a\x01b"))),
        // DEL is printable enough for the fast path
        ("\"a\x7Fb\"", Value::String(Cow::from("a\x7Fb"))),
    ]);
}

#[test]
fn test_decode_string_surrogates() {
    // lone surrogate escapes decode to the replacement character
    test_decode_ok(vec![
        ("\"\\uD800\"", Value::String(Cow::from("\u{FFFD}"))),
        ("\"\\uDBFF\"", Value::String(Cow::from("\u{FFFD}"))),
        ("\"\\uDFFF\"", Value::String(Cow::from("\u{FFFD}"))),
        (
            "\"\\uD83D\\uDE02\"",
            Value::String(Cow::from("\u{FFFD}\u{FFFD}")),
        ),
    ]);
}

#[test]
fn test_decode_string_fast_path_borrows() {
    let value = decode(b"\"plain ascii\"").unwrap();
    match value {
        Value::String(Cow::Borrowed(s)) => assert_eq!(s, "plain ascii"),
        _ => panic!("expected a borrowed string"),
    }

    // escapes and non-ASCII bytes force the owned slow path
    for input in [&b"\"a\\nb\""[..], "\"测\"".as_bytes()] {
        let value = decode(input).unwrap();
        assert!(matches!(value, Value::String(Cow::Owned(_))));
    }
}

#[test]
fn test_decode_number() {
    test_decode_err(&[
        ("07", "number with a leading zero, pos 1"),
        ("-01", "invalid number, pos 2"),
        ("-", "invalid number, pos 1"),
        ("-x", "invalid number, pos 2"),
        ("1.", "invalid number, pos 2"),
        ("1.e5", "invalid number, pos 2"),
        ("1e", "invalid number, pos 2"),
        ("1e+", "invalid number, pos 3"),
        ("+1", "expected some value, pos 1"),
    ]);

    test_decode_ok(vec![
        ("0", word(0, 0)),
        ("-0", word(0, 0)),
        ("12", word(12, 0)),
        ("-12", word(-12, 0)),
        ("0.5", word(5, -1)),
        ("12.34", word(1234, -2)),
        ("55e2", word(55, 2)),
        ("55E2", word(55, 2)),
        ("1e-2", word(1, -2)),
        ("1E+2", word(1, 2)),
        ("-1.25e3", word(-125, 1)),
        ("0e5", word(0, 0)),
        ("9223372036854775807", word(i64::MAX, 0)),
        ("-9223372036854775808", word(i64::MIN, 0)),
    ]);

    // values equal whenever they denote the same decimal
    assert_eq!(
        decode(b"5500").unwrap(),
        Value::Number(Number::from_int(5500))
    );
    assert_eq!(
        decode(b"55e2").unwrap(),
        Value::Number(Number::from_int(5500))
    );

    let value = decode(b"123456789012345678901234567890123456789").unwrap();
    assert!(matches!(value, Value::Number(Number::Big { .. })));
}

#[test]
fn test_decode_array() {
    test_decode_err(&[
        ("[", "EOF while parsing an array, pos 1"),
        ("[1", "EOF while parsing an array, pos 2"),
        ("[1,", "EOF while parsing an array, pos 3"),
        ("[1 2]", "expected `,` or `]`, pos 4"),
        (" [] x", "trailing characters, pos 5"),
    ]);

    test_decode_ok(vec![
        ("[]", Value::Array(vec![])),
        ("[\"bar\"]", Value::Array(vec![Value::String(Cow::from("bar"))])),
        (
            " [ {} , { } , null ] ",
            Value::Array(vec![
                Value::Object(vec![]),
                Value::Object(vec![]),
                Value::Null,
            ]),
        ),
        (
            " [ 55e2 , 1 ] ",
            Value::Array(vec![
                Value::Number(Number::from_int(5500)),
                Value::Number(Number::from_int(1)),
            ]),
        ),
        (
            "[[[]]]",
            Value::Array(vec![Value::Array(vec![Value::Array(vec![])])]),
        ),
    ]);
}

#[test]
fn test_decode_object() {
    test_decode_err(&[
        ("{", "EOF while parsing an object, pos 1"),
        ("{x", "expected `\"` or `}`, pos 2"),
        ("{\"a\"", "expected `:`, pos 4"),
        ("{\"a\" 1}", "expected `:`, pos 6"),
        ("{\"a\":", "EOF while parsing an object, pos 5"),
        ("{\"a\":1", "EOF while parsing an object, pos 6"),
        ("{\"a\":1,", "expected `\"`, pos 7"),
        ("{\"a\":1 2", "expected `,` or `]`, pos 8"),
    ]);

    test_decode_ok(vec![
        ("{}", Value::Object(vec![])),
        (
            "{\"foo\" : true}",
            Value::Object(vec![Member::new("foo", Value::True)]),
        ),
        (
            "{\"foo\" : true, \"bar\": false }",
            Value::Object(vec![
                Member::new("foo", Value::True),
                Member::new("bar", Value::False),
            ]),
        ),
        (
            "{\"b\":1,\"a\":2}",
            Value::Object(vec![
                Member::new("b", word(1, 0)),
                Member::new("a", word(2, 0)),
            ]),
        ),
        // duplicate keys are preserved in order
        (
            "{\"a\":1,\"a\":2}",
            Value::Object(vec![
                Member::new("a", word(1, 0)),
                Member::new("a", word(2, 0)),
            ]),
        ),
        (
            "{\"out\":{\"in\":[null]}}",
            Value::Object(vec![Member::new(
                "out",
                Value::Object(vec![Member::new("in", Value::Array(vec![Value::Null]))]),
            )]),
        ),
    ]);
}

#[test]
fn test_decode_whitespace_insensitivity() {
    let expected = decode(b"{\"a\":[1,true],\"b\":null}").unwrap();
    let padded = " \t{\r\n\"a\" : [ 1 ,\ttrue\n] ,\n\"b\"\t:\tnull\r\n} ";
    assert_eq!(decode(padded.as_bytes()).unwrap(), expected);

    // form feed is not JSON whitespace
    test_decode_err(&[("\x0Ctrue", "expected some value, pos 1")]);
}
