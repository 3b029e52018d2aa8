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

use ethnum::i256;

// A 38 digit coefficient always fits in an i128, wider coefficients move to
// 256-bit storage.
const MAX_WORD_DIGITS: usize = 38;

// 10^76 is the largest power of ten below i256::MAX.
const MAX_POW10: i64 = 76;

/// A decimal number in scientific form, `coefficient * 10^exponent`.
///
/// The representation is exact: no binary floating point is involved at any
/// stage. Two numbers are equal when they denote the same decimal value, so
/// `55e2` and `5500` compare equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// The coefficient fits in a single 64-bit machine word.
    Word { coefficient: i64, exponent: i64 },
    /// The coefficient needs 256-bit storage.
    Big { coefficient: i256, exponent: i64 },
}

impl Number {
    /// Builds an integer number from a non-negative value.
    pub fn from_int(v: u64) -> Number {
        match i64::try_from(v) {
            Ok(coefficient) => Number::Word {
                coefficient,
                exponent: 0,
            },
            Err(_) => Number::Big {
                coefficient: i256::from(v as i128),
                exponent: 0,
            },
        }
    }

    /// Parses a decimal number from a UTF-8 byte region, an optional minus
    /// sign followed by digits with an optional fraction and an optional
    /// exponent part.
    ///
    /// Digits are accumulated in a machine word first and widened to 256-bit
    /// arithmetic only past 38 digits. Digits beyond the 256-bit capacity
    /// shift into the exponent (integer part) or are discarded (fraction
    /// part), so extreme inputs lose precision instead of failing.
    pub fn from_ascii(buf: &[u8]) -> Option<Number> {
        let mut idx = 0;
        let negative = matches!(buf.first(), Some(b'-'));
        if negative {
            idx += 1;
        }

        let ten = i256::from(10_i128);
        let mut word = 0_i128;
        let mut wide: Option<i256> = None;
        let mut saturated = false;
        let mut precision = 0_usize;
        let mut int_digits = 0_usize;
        let mut frac_digits = 0_usize;
        let mut scale = 0_i64;
        let mut dropped = 0_i64;
        let mut has_fraction = false;

        while idx < buf.len() {
            match buf[idx] {
                c @ b'0'..=b'9' => {
                    let digit = (c - b'0') as i128;
                    if has_fraction {
                        frac_digits += 1;
                    } else {
                        int_digits += 1;
                    }
                    if saturated {
                        if !has_fraction {
                            dropped += 1;
                        }
                    } else if precision < MAX_WORD_DIGITS {
                        word = word * 10 + digit;
                        precision += 1;
                        if has_fraction {
                            scale += 1;
                        }
                    } else {
                        let acc = wide.unwrap_or_else(|| i256::from(word));
                        match acc
                            .checked_mul(ten)
                            .and_then(|v| v.checked_add(i256::from(digit)))
                        {
                            Some(v) => {
                                wide = Some(v);
                                precision += 1;
                                if has_fraction {
                                    scale += 1;
                                }
                            }
                            None => {
                                wide = Some(acc);
                                saturated = true;
                                if !has_fraction {
                                    dropped += 1;
                                }
                            }
                        }
                    }
                }
                b'.' if !has_fraction => has_fraction = true,
                b'e' | b'E' => break,
                _ => return None,
            }
            idx += 1;
        }

        if int_digits == 0 || (has_fraction && frac_digits == 0) {
            return None;
        }

        let mut explicit = 0_i64;
        if idx < buf.len() {
            // exponent part, `(e|E)[+-]?<digits>`
            idx += 1;
            let mut exp_negative = false;
            if idx < buf.len() && matches!(buf[idx], b'+' | b'-') {
                exp_negative = buf[idx] == b'-';
                idx += 1;
            }
            if idx == buf.len() {
                return None;
            }
            while idx < buf.len() {
                let c = buf[idx];
                if !c.is_ascii_digit() {
                    return None;
                }
                explicit = explicit.saturating_mul(10).saturating_add((c - b'0') as i64);
                idx += 1;
            }
            if exp_negative {
                explicit = -explicit;
            }
        }
        let exponent = explicit.saturating_add(dropped).saturating_sub(scale);

        let number = match wide {
            Some(coefficient) => Number::Big {
                coefficient: if negative { -coefficient } else { coefficient },
                exponent,
            },
            None => {
                let coefficient = if negative { -word } else { word };
                match i64::try_from(coefficient) {
                    Ok(coefficient) => Number::Word {
                        coefficient,
                        exponent,
                    },
                    Err(_) => Number::Big {
                        coefficient: i256::from(coefficient),
                        exponent,
                    },
                }
            }
        };
        Some(number)
    }

    /// The value as an i32, when exactly representable.
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|v| i32::try_from(v).ok())
    }

    /// The value as an i64, when exactly representable.
    pub fn to_i64(&self) -> Option<i64> {
        let (c, e) = self.reduced();
        if c == i256::ZERO {
            return Some(0);
        }
        if e < 0 {
            // the reduced coefficient has no trailing zeros left to cancel
            // a negative exponent, so the value is not an integer
            return None;
        }
        let value = c.checked_mul(pow10(e)?)?;
        narrow_i64(value)
    }

    /// Coefficient and exponent with trailing zeros stripped from the
    /// coefficient. Zero reduces to `(0, 0)`.
    fn reduced(&self) -> (i256, i64) {
        let (mut c, mut e) = match *self {
            Number::Word {
                coefficient,
                exponent,
            } => (i256::from(coefficient as i128), exponent),
            Number::Big {
                coefficient,
                exponent,
            } => (coefficient, exponent),
        };
        if c == i256::ZERO {
            return (i256::ZERO, 0);
        }
        let ten = i256::from(10_i128);
        while c % ten == i256::ZERO {
            c /= ten;
            e = e.saturating_add(1);
        }
        (c, e)
    }
}

fn pow10(e: i64) -> Option<i256> {
    if !(0..=MAX_POW10).contains(&e) {
        return None;
    }
    let ten = i256::from(10_i128);
    let mut value = i256::from(1_i128);
    for _ in 0..e {
        value = value.checked_mul(ten)?;
    }
    Some(value)
}

fn narrow_i64(v: i256) -> Option<i64> {
    if v < i256::from(i64::MIN as i128) || v > i256::from(i64::MAX as i128) {
        return None;
    }
    // within i64 range the low 64 bits carry the whole two's complement
    // value, so plain truncation is the conversion
    let (_, lo) = v.into_words();
    Some(lo as i64)
}

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Number::Word {
            coefficient: 0,
            exponent: 0,
        }
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.reduced() == other.reduced()
    }
}

impl Eq for Number {}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Number::Word {
                coefficient,
                exponent,
            } => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*coefficient))?;
                if *exponent != 0 {
                    let mut buffer = itoa::Buffer::new();
                    f.write_str("e")?;
                    f.write_str(buffer.format(*exponent))?;
                }
                Ok(())
            }
            Number::Big {
                coefficient,
                exponent,
            } => {
                write!(f, "{}", coefficient)?;
                if *exponent != 0 {
                    write!(f, "e{}", exponent)?;
                }
                Ok(())
            }
        }
    }
}
