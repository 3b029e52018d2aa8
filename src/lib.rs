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

//! `json-smile` is a JSON codec with a secondary encoder for the
//! [SMILE](https://github.com/FasterXML/smile-format-specification) binary
//! JSON format. It parses JSON text into an in-memory syntax tree, and
//! serializes that tree back to canonical JSON text or to a SMILE byte
//! stream.
//!
//! ## Features
//!
//! - A byte-accurate streaming JSON parser over a contiguous input slice,
//!   with structured syntax errors carrying the byte position.
//! - Zero-copy string decoding: string bodies made of printable ASCII with
//!   no escapes borrow the input buffer, everything else is decoded into a
//!   fresh owned buffer.
//! - Exact decimal numbers stored as `coefficient * 10^exponent`, with
//!   256-bit coefficients for values beyond the machine word.
//! - A canonical JSON encoder (no whitespace, minimal escaping) and a SMILE
//!   encoder without back-references or shared tables.
//!
//! ## SMILE encoding format
//!
//! Every SMILE stream starts with the 4-byte header `:)\n\0`, followed by
//! a single value encoding. Containers nest recursively.
//!
//! ```text
//! // JSON value
//! {"k": [null, 12]}
//!
//! // SMILE encoding
//! 0x3A 0x29 0x0A 0x00    header ":)\n\0"
//! 0xFA                   start object
//! 0x80 0x6B              1-byte key "k"
//! 0xF8                   start array
//! 0x21                   null
//! 0x24 0x18              32-bit integer, zigzag vint of 12
//! 0xF9                   end array
//! 0xFB                   end object
//! ```
//!
//! Strings are framed as `0xE4 <utf-8 bytes> 0xFC`. Numbers that are not
//! exactly representable as 32-bit or 64-bit integers use the big decimal
//! token `0x2A` with the coefficient bytes packed 7 bits per byte.

mod constants;
mod cursor;
mod error;
mod from;
mod number;
mod parser;
mod ser;
mod smile;
mod util;
mod value;

pub use error::Error;
pub use error::Result;
pub use error::SyntaxErrorCode;
pub use number::Number;
pub use parser::decode;
pub use ser::encode;
pub use smile::encode_smile_simple;
pub use value::Member;
pub use value::Value;
