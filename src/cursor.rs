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

use crate::error::Error;
use crate::error::Result;
use crate::error::SyntaxErrorCode;

/// A read-only position over the input slice, shared by the parser, the
/// string scanner and the number scanner.
///
/// The position is non-decreasing except for the bounded `rewind` the string
/// scanner performs after a measured forward scan. The cursor never
/// allocates.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, idx: 0 }
    }

    /// Byte at the current position, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    /// Consume one byte, failing with `code` at end of input.
    #[inline]
    pub(crate) fn any(&mut self, code: SyntaxErrorCode) -> Result<u8> {
        match self.buf.get(self.idx) {
            Some(c) => {
                self.idx += 1;
                Ok(*c)
            }
            None => Err(self.error(code)),
        }
    }

    /// Advance while the predicate holds.
    #[inline]
    pub(crate) fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(c) = self.buf.get(self.idx) {
            if !pred(*c) {
                break;
            }
            self.idx += 1;
        }
    }

    /// Current offset from the input origin.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.idx
    }

    /// Move backward `n` bytes. Callers only rewind over bytes they have
    /// already consumed.
    #[inline]
    pub(crate) fn rewind(&mut self, n: usize) {
        self.idx -= n;
    }

    /// Borrow a region of the input.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.buf[start..end]
    }

    #[inline]
    pub(crate) fn step(&mut self) {
        self.idx += 1;
    }

    /// Consume one byte and require it to equal `expected`, failing with
    /// `code` on a mismatch or at end of input.
    #[inline]
    pub(crate) fn expect(&mut self, expected: u8, code: SyntaxErrorCode) -> Result<()> {
        let c = self.any(code)?;
        if c == expected {
            Ok(())
        } else {
            Err(self.error(code))
        }
    }

    /// Match a run of ASCII bytes, failing with `code` at the first
    /// mismatch.
    pub(crate) fn expect_ident(&mut self, ident: &[u8], code: SyntaxErrorCode) -> Result<()> {
        for expected in ident {
            self.expect(*expected, code)?;
        }
        Ok(())
    }

    pub(crate) fn error(&self, code: SyntaxErrorCode) -> Error {
        Error::Syntax(code, self.idx)
    }
}
