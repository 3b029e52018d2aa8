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
use std::fmt::Display;
use std::fmt::Formatter;

use rand::distr::Alphanumeric;
use rand::distr::SampleString;
use rand::rng;
use rand::Rng;

use crate::error::Result;
use crate::number::Number;
use crate::ser::Encoder;
use crate::smile;

/// A JSON value.
///
/// Strings borrow the input buffer when the decoder could take the zero-copy
/// path and own their bytes otherwise; the two forms compare equal whenever
/// their text is equal. `True` and `False` are distinct variants, so literal
/// discrimination is a single tag test. Arrays and objects preserve the
/// order of appearance, and objects keep duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value<'a> {
    #[default]
    Null,
    True,
    False,
    String(Cow<'a, str>),
    Number(Number),
    Array(Vec<Value<'a>>),
    Object(Vec<Member<'a>>),
}

/// A single key-value pair in an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<'a> {
    pub key: Cow<'a, str>,
    pub value: Value<'a>,
}

impl<'a> Member<'a> {
    pub fn new(key: impl Into<Cow<'a, str>>, value: Value<'a>) -> Member<'a> {
        Member {
            key: key.into(),
            value,
        }
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let buf = self.to_vec();
        // the encoder only ever emits UTF-8
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl<'a> Value<'a> {
    pub fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_object()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_v))
    }

    pub fn as_object(&self) -> Option<&Vec<Member<'a>>> {
        match self {
            Value::Object(ref members) => Some(members),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_v))
    }

    pub fn as_array(&self) -> Option<&Vec<Value<'a>>> {
        match self {
            Value::Array(ref array) => Some(array),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    pub fn as_str(&self) -> Option<&Cow<'_, str>> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::True | Value::False)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn array_length(&self) -> Option<usize> {
        match self {
            Value::Array(arr) => Some(arr.len()),
            _ => None,
        }
    }

    /// Serialize the value as canonical JSON text into `buf`.
    pub fn write_to_vec(&self, buf: &mut Vec<u8>) {
        let mut encoder = Encoder::new(buf);
        encoder.encode(self);
    }

    /// Serialize the value as canonical JSON text.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to_vec(&mut buf);
        buf
    }

    /// Serialize the value as a SMILE byte stream.
    pub fn to_smile_vec(&self) -> Result<Vec<u8>> {
        smile::encode_smile_simple(self)
    }

    /// generate random JSON value
    pub fn rand_value() -> Value<'static> {
        let mut rng = rng();
        let val = match rng.random_range(0..=2) {
            0 => {
                let len = rng.random_range(0..=5);
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(Self::rand_scalar_value());
                }
                Value::Array(values)
            }
            1 => {
                let len = rng.random_range(0..=5);
                let mut members = Vec::with_capacity(len);
                for _ in 0..len {
                    let key = Alphanumeric.sample_string(&mut rng, 5);
                    let value = Self::rand_scalar_value();
                    members.push(Member::new(key, value));
                }
                Value::Object(members)
            }
            _ => Self::rand_scalar_value(),
        };
        val
    }

    fn rand_scalar_value() -> Value<'static> {
        let mut rng = rng();
        let val = match rng.random_range(0..=3) {
            0 => {
                if rng.random_bool(0.5) {
                    Value::True
                } else {
                    Value::False
                }
            }
            1 => {
                let s = Alphanumeric.sample_string(&mut rng, 5);
                Value::String(Cow::from(s))
            }
            2 => {
                let coefficient: i64 = rng.random_range(-100000..=100000);
                let exponent: i64 = rng.random_range(-10..=10);
                Value::Number(Number::Word {
                    coefficient,
                    exponent,
                })
            }
            _ => Value::Null,
        };
        val
    }
}
