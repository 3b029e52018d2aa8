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

use crate::cursor::Cursor;
use crate::error::Result;
use crate::error::SyntaxErrorCode;
use crate::number::Number;
use crate::util::is_whitespace;
use crate::util::parse_quoted_string;
use crate::value::Member;
use crate::value::Value;

/// Decode a JSON document into a [`Value`] tree.
///
/// The whole input must hold exactly one value, optionally surrounded by
/// whitespace; anything after the value fails with `UnexpectedLeftovers`.
/// Strings whose body is printable ASCII without escapes borrow the input
/// buffer, which ties the returned tree to the input lifetime.
pub fn decode(buf: &[u8]) -> Result<Value<'_>> {
    let mut parser = Parser::new(buf);
    parser.parse()
}

/// Recursive-descent JSON parser over a byte cursor.
///
/// Every production reads its dispatch byte through the cursor and fails
/// with a structured syntax error carrying the byte position. There is no
/// partial-tree recovery: the first error aborts the whole decode.
struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    /// Parse a complete JSON document from the input buffer.
    fn parse(&mut self) -> Result<Value<'a>> {
        self.skip_whitespace();
        let c = self.cursor.any(SyntaxErrorCode::EmptyInput)?;
        let value = self.parse_value(c)?;

        self.skip_whitespace();
        if self.cursor.peek().is_some() {
            self.cursor.step();
            return Err(self.cursor.error(SyntaxErrorCode::UnexpectedLeftovers));
        }
        Ok(value)
    }

    /// Parse a single value whose leading byte `c` has been consumed.
    fn parse_value(&mut self, c: u8) -> Result<Value<'a>> {
        match c {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b't' => {
                self.cursor.expect_ident(b"rue", SyntaxErrorCode::ExpectedTrue)?;
                Ok(Value::True)
            }
            b'f' => {
                self.cursor
                    .expect_ident(b"alse", SyntaxErrorCode::ExpectedFalse)?;
                Ok(Value::False)
            }
            b'n' => {
                self.cursor.expect_ident(b"ull", SyntaxErrorCode::ExpectedNull)?;
                Ok(Value::Null)
            }
            b'"' => {
                let s = parse_quoted_string(&mut self.cursor)?;
                Ok(Value::String(s))
            }
            b'-' | b'0'..=b'9' => self.parse_number(c),
            _ => Err(self.cursor.error(SyntaxErrorCode::InvalidLeader)),
        }
    }

    /// Parse a number whose leader byte has been consumed. The leader
    /// classifies the production: a minus sign starts a negated number, a
    /// zero must not be followed by another digit, any other digit opens a
    /// plain integer part. The validated region is handed to the number
    /// type, which owns the numeric grammar.
    fn parse_number(&mut self, leader: u8) -> Result<Value<'a>> {
        let start = self.cursor.position() - 1;
        match leader {
            b'-' => {
                let c = self.cursor.any(SyntaxErrorCode::InvalidNumber)?;
                if !c.is_ascii_digit() {
                    return Err(self.cursor.error(SyntaxErrorCode::InvalidNumber));
                }
                if c == b'0' {
                    if matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                        return Err(self.cursor.error(SyntaxErrorCode::InvalidNumber));
                    }
                } else {
                    self.cursor.skip_while(|c| c.is_ascii_digit());
                }
            }
            b'0' => {
                if matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                    return Err(self.cursor.error(SyntaxErrorCode::LeadingZero));
                }
            }
            _ => self.cursor.skip_while(|c| c.is_ascii_digit()),
        }

        // optional fraction part `.<digits>`
        if self.cursor.peek() == Some(b'.') {
            self.cursor.step();
            if !matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                return Err(self.cursor.error(SyntaxErrorCode::InvalidNumber));
            }
            self.cursor.skip_while(|c| c.is_ascii_digit());
        }

        // optional exponent part `(e|E)[+-]?<digits>`
        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            self.cursor.step();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.step();
            }
            if !matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
                return Err(self.cursor.error(SyntaxErrorCode::InvalidNumber));
            }
            self.cursor.skip_while(|c| c.is_ascii_digit());
        }

        let raw = self.cursor.slice(start, self.cursor.position());
        match Number::from_ascii(raw) {
            Some(n) => Ok(Value::Number(n)),
            None => Err(self.cursor.error(SyntaxErrorCode::InvalidNumber)),
        }
    }

    /// Parse an object body after the opening brace.
    fn parse_object(&mut self) -> Result<Value<'a>> {
        let mut members = Vec::with_capacity(16);

        self.skip_whitespace();
        let c = self.cursor.any(SyntaxErrorCode::IncompleteObject)?;
        match c {
            b'}' => return Ok(Value::Object(members)),
            b'"' => members.push(self.parse_member()?),
            _ => return Err(self.cursor.error(SyntaxErrorCode::ExpectedQuoteOrRightBrace)),
        }

        loop {
            self.skip_whitespace();
            let c = self.cursor.any(SyntaxErrorCode::IncompleteObject)?;
            match c {
                b',' => {
                    self.skip_whitespace();
                    self.cursor.expect(b'"', SyntaxErrorCode::ExpectedQuote)?;
                    members.push(self.parse_member()?);
                }
                b'}' => return Ok(Value::Object(members)),
                _ => {
                    return Err(self
                        .cursor
                        .error(SyntaxErrorCode::ExpectedCommaOrRightBracket))
                }
            }
        }
    }

    /// Parse one `key: value` pair. The cursor sits after the opening quote
    /// of the key.
    fn parse_member(&mut self) -> Result<Member<'a>> {
        let key = parse_quoted_string(&mut self.cursor)?;
        self.skip_whitespace();
        self.cursor.expect(b':', SyntaxErrorCode::ExpectedColon)?;
        self.skip_whitespace();
        let c = self.cursor.any(SyntaxErrorCode::IncompleteObject)?;
        let value = self.parse_value(c)?;
        Ok(Member { key, value })
    }

    /// Parse an array body after the opening bracket.
    fn parse_array(&mut self) -> Result<Value<'a>> {
        let mut values = Vec::with_capacity(8);

        self.skip_whitespace();
        let c = self.cursor.any(SyntaxErrorCode::IncompleteArray)?;
        if c == b']' {
            return Ok(Value::Array(values));
        }
        values.push(self.parse_value(c)?);

        loop {
            self.skip_whitespace();
            let c = self.cursor.any(SyntaxErrorCode::IncompleteArray)?;
            match c {
                b',' => {
                    self.skip_whitespace();
                    let c = self.cursor.any(SyntaxErrorCode::IncompleteArray)?;
                    values.push(self.parse_value(c)?);
                }
                b']' => return Ok(Value::Array(values)),
                _ => {
                    return Err(self
                        .cursor
                        .error(SyntaxErrorCode::ExpectedCommaOrRightBracket))
                }
            }
        }
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        self.cursor.skip_while(is_whitespace);
    }
}
