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

use crate::number::Number;
use crate::value::Value;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode a value as canonical JSON text: no whitespace, minimal string
/// escaping. Encoding is total, and the output decodes back to an equal
/// value.
pub fn encode(value: &Value<'_>) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf);
    encoder.encode(value);
    buf
}

/// Serializer from the value tree to JSON text bytes.
pub(crate) struct Encoder<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(buf: &'a mut Vec<u8>) -> Encoder<'a> {
        Self { buf }
    }

    pub(crate) fn encode(&mut self, value: &Value<'_>) {
        match value {
            Value::Null => self.buf.extend_from_slice(b"null"),
            Value::True => self.buf.extend_from_slice(b"true"),
            Value::False => self.buf.extend_from_slice(b"false"),
            Value::String(s) => self.encode_string(s),
            Value::Number(n) => self.encode_number(n),
            Value::Array(values) => {
                self.buf.push(b'[');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.buf.push(b',');
                    }
                    self.encode(value);
                }
                self.buf.push(b']');
            }
            Value::Object(members) => {
                self.buf.push(b'{');
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.buf.push(b',');
                    }
                    self.encode_string(&member.key);
                    self.buf.push(b':');
                    self.encode(&member.value);
                }
                self.buf.push(b'}');
            }
        }
    }

    /// Quote a string with minimal escaping: `"` and `\` always, control
    /// bytes below 0x20 with the shortest standard form. Everything else,
    /// DEL included, passes through as-is since the payload is already
    /// UTF-8.
    fn encode_string(&mut self, s: &str) {
        self.buf.push(b'"');
        for &c in s.as_bytes() {
            match c {
                b'"' => self.buf.extend_from_slice(b"\\\""),
                b'\\' => self.buf.extend_from_slice(b"\\\\"),
                0x08 => self.buf.extend_from_slice(b"\\b"),
                0x09 => self.buf.extend_from_slice(b"\\t"),
                0x0A => self.buf.extend_from_slice(b"\\n"),
                0x0C => self.buf.extend_from_slice(b"\\f"),
                0x0D => self.buf.extend_from_slice(b"\\r"),
                c if c < 0x20 => {
                    self.buf.extend_from_slice(b"\\u00");
                    self.buf.push(HEX_DIGITS[(c >> 4) as usize]);
                    self.buf.push(HEX_DIGITS[(c & 0x0F) as usize]);
                }
                c => self.buf.push(c),
            }
        }
        self.buf.push(b'"');
    }

    fn encode_number(&mut self, n: &Number) {
        match n {
            Number::Word {
                coefficient,
                exponent,
            } => {
                let mut buffer = itoa::Buffer::new();
                self.buf.extend_from_slice(buffer.format(*coefficient).as_bytes());
                if *exponent != 0 {
                    self.buf.push(b'e');
                    let mut buffer = itoa::Buffer::new();
                    self.buf.extend_from_slice(buffer.format(*exponent).as_bytes());
                }
            }
            Number::Big {
                coefficient,
                exponent,
            } => {
                self.buf.extend_from_slice(coefficient.to_string().as_bytes());
                if *exponent != 0 {
                    self.buf.push(b'e');
                    let mut buffer = itoa::Buffer::new();
                    self.buf.extend_from_slice(buffer.format(*exponent).as_bytes());
                }
            }
        }
    }
}
