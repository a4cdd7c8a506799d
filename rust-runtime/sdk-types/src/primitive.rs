/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for formatting and parsing primitives in places other than JSON bodies:
//! headers, query strings and URI labels.
//!
//! Floating point values use the textual forms `NaN`, `Infinity` and `-Infinity`.
//!
//! # Example
//! ```
//! use sdk_types::primitive::{Encoder, Parse};
//!
//! let value = 5.5f64;
//! assert_eq!("5.5", Encoder::from(value).encode());
//! assert_eq!(Ok(5.5), f64::parse_smithy_primitive("5.5"));
//! ```

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Inner {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

/// Primitive type encoder
///
/// Encodes primitive types in Smithy's specified format. For floating-point numbers,
/// Smithy requires that NaN and Infinity values be specially encoded.
///
/// This type implements `From<T>` for all Smithy primitive types.
#[non_exhaustive]
#[derive(Debug)]
pub struct Encoder {
    value: Inner,
    buffer: String,
}

impl Encoder {
    fn new(value: Inner) -> Self {
        Self {
            value,
            buffer: String::new(),
        }
    }

    /// Encodes a Smithy primitive as a string.
    pub fn encode(&mut self) -> &str {
        self.buffer.clear();
        match self.value {
            Inner::Bool(true) => return "true",
            Inner::Bool(false) => return "false",
            Inner::I8(v) => self.buffer.push_str(itoa::Buffer::new().format(v)),
            Inner::I16(v) => self.buffer.push_str(itoa::Buffer::new().format(v)),
            Inner::I32(v) => self.buffer.push_str(itoa::Buffer::new().format(v)),
            Inner::I64(v) => self.buffer.push_str(itoa::Buffer::new().format(v)),
            Inner::F32(v) => {
                if v.is_nan() {
                    return float::NAN;
                } else if v == f32::INFINITY {
                    return float::INFINITY;
                } else if v == f32::NEG_INFINITY {
                    return float::NEG_INFINITY;
                }
                self.buffer.push_str(ryu::Buffer::new().format_finite(v));
            }
            Inner::F64(v) => {
                if v.is_nan() {
                    return float::NAN;
                } else if v == f64::INFINITY {
                    return float::INFINITY;
                } else if v == f64::NEG_INFINITY {
                    return float::NEG_INFINITY;
                }
                self.buffer.push_str(ryu::Buffer::new().format_finite(v));
            }
        }
        &self.buffer
    }
}

macro_rules! encoder_from {
    ($typ:ident, $variant:ident) => {
        impl From<$typ> for Encoder {
            fn from(input: $typ) -> Self {
                Self::new(Inner::$variant(input))
            }
        }
    };
}

encoder_from!(bool, Bool);
encoder_from!(i8, I8);
encoder_from!(i16, I16);
encoder_from!(i32, I32);
encoder_from!(i64, I64);
encoder_from!(f32, F32);
encoder_from!(f64, F64);

mod float {
    pub(crate) const INFINITY: &str = "Infinity";
    pub(crate) const NEG_INFINITY: &str = "-Infinity";
    pub(crate) const NAN: &str = "NaN";
}

/// An error during primitive parsing
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq)]
pub struct PrimitiveParseError(&'static str);

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse input as {}", self.0)
    }
}

impl Error for PrimitiveParseError {}

/// Parse a Smithy primitive from a `&str`.
pub trait Parse
where
    Self: Sized,
{
    /// Parses a Smithy primitive from a string.
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError("bool")),
        }
    }
}

macro_rules! parse_int {
    ($typ:ident) => {
        impl Parse for $typ {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                input
                    .parse::<$typ>()
                    .map_err(|_| PrimitiveParseError(stringify!($typ)))
            }
        }
    };
}

parse_int!(i8);
parse_int!(i16);
parse_int!(i32);
parse_int!(i64);

macro_rules! parse_float {
    ($typ:ident) => {
        impl Parse for $typ {
            fn parse_smithy_primitive(input: &str) -> Result<Self, PrimitiveParseError> {
                match input {
                    float::NAN => Ok($typ::NAN),
                    float::INFINITY => Ok($typ::INFINITY),
                    float::NEG_INFINITY => Ok($typ::NEG_INFINITY),
                    // `str::parse` also accepts "inf" and "nan" spellings
                    other if other.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => {
                        Err(PrimitiveParseError(stringify!($typ)))
                    }
                    other => other
                        .parse::<$typ>()
                        .map_err(|_| PrimitiveParseError(stringify!($typ))),
                }
            }
        }
    };
}

parse_float!(f32);
parse_float!(f64);
