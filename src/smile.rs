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

use byteorder::BigEndian;
use byteorder::ByteOrder;

use crate::constants::*;
use crate::error::Error;
use crate::error::Result;
use crate::number::Number;
use crate::value::Value;

/// Encode a value as a SMILE byte stream.
///
/// The stream starts with the 4-byte header `:)\n\0` and contains no
/// back-reference tokens and no shared name/value tables. Encoding fails
/// only for numbers whose coefficient does not fit in a machine word.
pub fn encode_smile_simple(value: &Value<'_>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&SMILE_HEADER);
    let mut encoder = SmileEncoder::new(&mut buf);
    encoder.encode(value)?;
    Ok(buf)
}

/// Serializer from the value tree to the SMILE wire format.
pub(crate) struct SmileEncoder<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> SmileEncoder<'a> {
    pub(crate) fn new(buf: &'a mut Vec<u8>) -> SmileEncoder<'a> {
        Self { buf }
    }

    pub(crate) fn encode(&mut self, value: &Value<'_>) -> Result<()> {
        match value {
            Value::Null => self.buf.push(TOKEN_NULL),
            Value::False => self.buf.push(TOKEN_FALSE),
            Value::True => self.buf.push(TOKEN_TRUE),
            Value::String(s) => self.encode_text(s),
            Value::Number(n) => self.encode_number(n)?,
            Value::Array(values) => {
                self.buf.push(TOKEN_START_ARRAY);
                for value in values.iter() {
                    self.encode(value)?;
                }
                self.buf.push(TOKEN_END_ARRAY);
            }
            Value::Object(members) => {
                self.buf.push(TOKEN_START_OBJECT);
                for member in members.iter() {
                    self.encode_key(&member.key);
                    self.encode(&member.value)?;
                }
                self.buf.push(TOKEN_END_OBJECT);
            }
        }
        Ok(())
    }

    /// String values use the long variable-length unicode framing, raw
    /// UTF-8 bytes between the text token and the end-of-text marker.
    fn encode_text(&mut self, s: &str) {
        self.buf.push(TOKEN_LONG_TEXT);
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(MARKER_END_OF_TEXT);
    }

    /// A key token precedes its value inside an object body. Short keys are
    /// length-prefixed, longer keys fall back to the end-marker framing.
    fn encode_key(&mut self, key: &str) {
        let bytes = key.as_bytes();
        match bytes.len() {
            0 => self.buf.push(TOKEN_KEY_EMPTY),
            1 => {
                self.buf.push(TOKEN_KEY_SINGLE_BYTE);
                self.buf.push(bytes[0]);
            }
            n if n <= MAX_SHORT_KEY_LEN => {
                self.buf.push(TOKEN_PREFIX_KEY_SHORT + (n as u8 - 2));
                self.buf.extend_from_slice(bytes);
            }
            _ => {
                self.buf.push(TOKEN_KEY_LONG_TEXT);
                self.buf.extend_from_slice(bytes);
                self.buf.push(MARKER_END_OF_TEXT);
            }
        }
    }

    /// Numbers pick the smallest exact integer token first, then the big
    /// decimal framing for values with a machine-word coefficient. A
    /// 256-bit coefficient has no encoding and fails.
    fn encode_number(&mut self, n: &Number) -> Result<()> {
        if let Some(v) = n.to_i32() {
            self.buf.push(TOKEN_INT32);
            write_zigzag_i32(self.buf, v);
        } else if let Some(v) = n.to_i64() {
            self.buf.push(TOKEN_INT64);
            write_zigzag_i64(self.buf, v);
        } else {
            match *n {
                Number::Word {
                    coefficient,
                    exponent,
                } => {
                    self.buf.push(TOKEN_BIG_DECIMAL);
                    // the wire format only carries a 32-bit exponent, wider
                    // values wrap
                    write_zigzag_i32(self.buf, exponent as i32);
                    write_unsigned(self.buf, WORD_COEFFICIENT_LEN as u64);
                    let mut raw = [0_u8; WORD_COEFFICIENT_LEN];
                    BigEndian::write_i64(&mut raw, coefficient);
                    write_packed7(self.buf, &raw);
                }
                Number::Big { .. } => return Err(Error::UnsupportedNumber),
            }
        }
        Ok(())
    }
}

/// Zigzag LEB128: fold the sign into the low bit, then emit base-128
/// groups, least significant first, with the high bit as continuation.
fn write_zigzag_i32(buf: &mut Vec<u8>, v: i32) {
    write_unsigned(buf, ((v << 1) ^ (v >> 31)) as u32 as u64);
}

fn write_zigzag_i64(buf: &mut Vec<u8>, v: i64) {
    write_unsigned(buf, ((v << 1) ^ (v >> 63)) as u64);
}

/// Unsigned LEB128.
fn write_unsigned(buf: &mut Vec<u8>, mut v: u64) {
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

/// 7/8 packing: each group of 7 input bytes becomes 8 output bytes whose
/// high bit is clear, carrying the 56 input bits high bits first. The final
/// partial group is left-aligned with zero padding in the unused trailing
/// bits.
fn write_packed7(buf: &mut Vec<u8>, data: &[u8]) {
    for chunk in data.chunks(7) {
        let mut bits = 0_u64;
        for byte in chunk {
            bits = (bits << 8) | u64::from(*byte);
        }
        let out_len = (chunk.len() * 8).div_ceil(7);
        bits <<= out_len * 7 - chunk.len() * 8;
        for i in (0..out_len).rev() {
            buf.push(((bits >> (7 * i)) & 0x7F) as u8);
        }
    }
}
