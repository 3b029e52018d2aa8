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

use super::constants::*;
use super::cursor::Cursor;
use super::error::Result;
use super::error::SyntaxErrorCode;

/// JSON whitespace is space, tab, line feed and carriage return. Nothing
/// else, in particular not form feed.
#[inline]
pub(crate) fn is_whitespace(c: u8) -> bool {
    matches!(c, 0x20 | 0x09 | 0x0A | 0x0D)
}

#[allow(clippy::zero_prefixed_literal)]
static HEX: [u8; 256] = {
    const __: u8 = 255; // not a hex digit
    [
        //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 0
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
        00, 01, 02, 03, 04, 05, 06, 07, 08, 09, __, __, __, __, __, __, // 3
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 4
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 6
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
    ]
};

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    let n = HEX[val as usize] as u16;
    if n == 255 {
        None
    } else {
        Some(n)
    }
}

/// Read the 4 ASCII hex digits of a `\uXXXX` escape into a 16-bit word.
fn read_hex_word(cursor: &mut Cursor<'_>) -> Result<u16> {
    let mut n = 0;
    for _ in 0..UNICODE_LEN {
        let c = cursor.any(SyntaxErrorCode::IncompleteEscapeSequence)?;
        match decode_hex_val(c) {
            Some(hex) => n = (n << 4) + hex,
            None => return Err(cursor.error(SyntaxErrorCode::InvalidEscapeSequence)),
        }
    }
    Ok(n)
}

/// Decode a JSON string literal. The cursor must sit immediately after the
/// opening quote and is left immediately after the closing quote.
///
/// The scanner runs in two passes. The measurement pass walks forward to the
/// closing quote carrying a single "can memcpy" bit: it survives only while
/// every byte is printable ASCII (above 0x1F, below 0x80) and no escape is
/// seen. If the bit survives, the raw region is borrowed as-is; otherwise
/// the cursor is rewound and `copy_and_escape` re-reads the region decoding
/// escapes and multi-byte code points into a fresh buffer.
pub(crate) fn parse_quoted_string<'a>(cursor: &mut Cursor<'a>) -> Result<Cow<'a, str>> {
    let start = cursor.position();
    let mut can_memcpy = true;
    loop {
        let c = cursor.any(SyntaxErrorCode::IncompleteString)?;
        match c {
            b'"' => {
                let end = cursor.position() - 1;
                if can_memcpy {
                    let raw = cursor.slice(start, end);
                    // the measurement pass verified the region is ASCII
                    let s = unsafe { std::str::from_utf8_unchecked(raw) };
                    return Ok(Cow::Borrowed(s));
                }
                cursor.rewind(cursor.position() - start);
                let s = copy_and_escape(cursor, end - start)?;
                return Ok(Cow::Owned(s));
            }
            b'\\' => {
                can_memcpy = false;
                // consume the escaped byte so a `\"` does not end the scan
                cursor.any(SyntaxErrorCode::InvalidEscapeSequence)?;
            }
            c => {
                if !(0x20..0x80).contains(&c) {
                    can_memcpy = false;
                }
            }
        }
    }
}

/// Rescan pass of the string scanner: decode escapes and raw code points
/// into an owned buffer of capacity `cap`. Escape expansions never grow the
/// payload, so the capacity is never exceeded.
fn copy_and_escape(cursor: &mut Cursor<'_>, cap: usize) -> Result<String> {
    let mut buf = String::with_capacity(cap);
    loop {
        let c = cursor.any(SyntaxErrorCode::IncompleteString)?;
        match c {
            b'"' => return Ok(buf),
            b'\\' => {
                let c = cursor.any(SyntaxErrorCode::IncompleteEscapeSequence)?;
                match c {
                    b'"' => buf.push(QU),
                    b'\\' => buf.push(BS),
                    b'/' => buf.push(SD),
                    b't' => buf.push(TT),
                    b'n' => buf.push(NN),
                    b'r' => buf.push(RR),
                    b'b' => buf.push(BB),
                    b'f' => buf.push(FF),
                    b'u' => {
                        let hex = read_hex_word(cursor)?;
                        let c = match hex {
                            // UTF-16 surrogate code units are not scalar
                            // values, rewrite them to the replacement
                            // character
                            0xD800..=0xDFFF => char::REPLACEMENT_CHARACTER,
                            // every u16 outside the surrogate range is
                            // guaranteed to be a legal char
                            n => char::from_u32(n as u32).unwrap(),
                        };
                        buf.push(c);
                    }
                    _ => return Err(cursor.error(SyntaxErrorCode::InvalidEscapeSequence)),
                }
            }
            c => {
                let c = read_code_point(cursor, c)?;
                buf.push(c);
            }
        }
    }
}

/// Decode one UTF-8 code point whose lead byte has already been consumed.
fn read_code_point(cursor: &mut Cursor<'_>, lead: u8) -> Result<char> {
    if lead < 0x80 {
        return Ok(lead as char);
    }
    // the number of continuation bytes follows from the lead byte
    let (trailing, mut n) = if lead >= 0xF0 {
        (3, (lead & 0x07) as u32)
    } else if lead >= 0xE0 {
        (2, (lead & 0x0F) as u32)
    } else if lead >= 0xC0 {
        (1, (lead & 0x1F) as u32)
    } else {
        return Err(cursor.error(SyntaxErrorCode::InvalidUnicodeCodePoint));
    };
    for _ in 0..trailing {
        let c = cursor.any(SyntaxErrorCode::IncompleteString)?;
        if c & 0xC0 != 0x80 {
            return Err(cursor.error(SyntaxErrorCode::InvalidUnicodeCodePoint));
        }
        n = (n << 6) | (c & 0x3F) as u32;
    }
    char::from_u32(n).ok_or_else(|| cursor.error(SyntaxErrorCode::InvalidUnicodeCodePoint))
}
