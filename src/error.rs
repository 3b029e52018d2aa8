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

use std::fmt::Display;
use std::fmt::Formatter;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the decoder and the SMILE encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not valid JSON. Carries the byte position the decoder
    /// had reached when it gave up.
    Syntax(SyntaxErrorCode, usize),
    /// The SMILE encoder was asked to serialize a number whose coefficient
    /// does not fit in a machine word.
    UnsupportedNumber,
}

/// The kind of a JSON syntax error.
///
/// The set is open: new kinds may be added without a breaking release, so
/// callers should match non-exhaustively.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorCode {
    EmptyInput,
    ExpectedColon,
    ExpectedCommaOrRightBracket,
    ExpectedFalse,
    ExpectedNull,
    ExpectedQuote,
    ExpectedQuoteOrRightBrace,
    ExpectedTrue,
    IncompleteArray,
    IncompleteEscapeSequence,
    IncompleteObject,
    IncompleteString,
    InvalidEscapeSequence,
    InvalidLeader,
    InvalidNumber,
    InvalidUnicodeCodePoint,
    LeadingZero,
    UnexpectedLeftovers,
}

impl Display for SyntaxErrorCode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SyntaxErrorCode::EmptyInput => write!(f, "empty input"),
            SyntaxErrorCode::ExpectedColon => write!(f, "expected `:`"),
            SyntaxErrorCode::ExpectedCommaOrRightBracket => write!(f, "expected `,` or `]`"),
            SyntaxErrorCode::ExpectedFalse => write!(f, "expected false literal"),
            SyntaxErrorCode::ExpectedNull => write!(f, "expected null literal"),
            SyntaxErrorCode::ExpectedQuote => write!(f, "expected `\"`"),
            SyntaxErrorCode::ExpectedQuoteOrRightBrace => write!(f, "expected `\"` or `}}`"),
            SyntaxErrorCode::ExpectedTrue => write!(f, "expected true literal"),
            SyntaxErrorCode::IncompleteArray => write!(f, "EOF while parsing an array"),
            SyntaxErrorCode::IncompleteEscapeSequence => {
                write!(f, "EOF while parsing an escape sequence")
            }
            SyntaxErrorCode::IncompleteObject => write!(f, "EOF while parsing an object"),
            SyntaxErrorCode::IncompleteString => write!(f, "EOF while parsing a string"),
            SyntaxErrorCode::InvalidEscapeSequence => write!(f, "invalid escape sequence"),
            SyntaxErrorCode::InvalidLeader => write!(f, "expected some value"),
            SyntaxErrorCode::InvalidNumber => write!(f, "invalid number"),
            SyntaxErrorCode::InvalidUnicodeCodePoint => write!(f, "invalid unicode code point"),
            SyntaxErrorCode::LeadingZero => write!(f, "number with a leading zero"),
            SyntaxErrorCode::UnexpectedLeftovers => write!(f, "trailing characters"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
            Error::UnsupportedNumber => {
                write!(f, "number coefficient does not fit in a machine word")
            }
        }
    }
}

impl std::error::Error for Error {}
