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

// JSON text constants
pub(crate) const UNICODE_LEN: usize = 4;

// JSON text escape characters constants
pub(crate) const BS: char = '\x5C'; // \\ Backslash
pub(crate) const QU: char = '\x22'; // \" Double quotation mark
pub(crate) const SD: char = '\x2F'; // \/ Slash or divide
pub(crate) const BB: char = '\x08'; // \b Backspace
pub(crate) const FF: char = '\x0C'; // \f Formfeed Page Break
pub(crate) const NN: char = '\x0A'; // \n Newline
pub(crate) const RR: char = '\x0D'; // \r Carriage Return
pub(crate) const TT: char = '\x09'; // \t Horizontal Tab

// SMILE stream header, the ASCII bytes ":)\n" and a format version byte
pub(crate) const SMILE_HEADER: [u8; 4] = [0x3A, 0x29, 0x0A, 0x00];

// SMILE value tokens
pub(crate) const TOKEN_NULL: u8 = 0x21;
pub(crate) const TOKEN_FALSE: u8 = 0x22;
pub(crate) const TOKEN_TRUE: u8 = 0x23;
pub(crate) const TOKEN_INT32: u8 = 0x24;
pub(crate) const TOKEN_INT64: u8 = 0x25;
pub(crate) const TOKEN_BIG_DECIMAL: u8 = 0x2A;
pub(crate) const TOKEN_LONG_TEXT: u8 = 0xE4;
pub(crate) const TOKEN_START_ARRAY: u8 = 0xF8;
pub(crate) const TOKEN_END_ARRAY: u8 = 0xF9;
pub(crate) const TOKEN_START_OBJECT: u8 = 0xFA;
pub(crate) const TOKEN_END_OBJECT: u8 = 0xFB;

// SMILE key tokens
pub(crate) const TOKEN_KEY_EMPTY: u8 = 0x20;
pub(crate) const TOKEN_KEY_SINGLE_BYTE: u8 = 0x80;
pub(crate) const TOKEN_PREFIX_KEY_SHORT: u8 = 0xC0;
pub(crate) const TOKEN_KEY_LONG_TEXT: u8 = 0x34;

// End marker for variable-length text sections
pub(crate) const MARKER_END_OF_TEXT: u8 = 0xFC;

// Longest key encodable with a length-prefixed short key token
pub(crate) const MAX_SHORT_KEY_LEN: usize = 55;

// Byte length of a machine word coefficient in the big decimal token
pub(crate) const WORD_COEFFICIENT_LEN: usize = 8;
