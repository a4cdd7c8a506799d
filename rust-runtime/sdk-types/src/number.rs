/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A number type that implements Javascript / JSON semantics.

use crate::error::{TryFromNumberError, TryFromNumberErrorKind};

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Unsigned 64-bit integer value.
    PosInt(u64),
    /// Signed 64-bit integer value. The wrapped value is _always_ negative.
    NegInt(i64),
    /// 64-bit floating-point value.
    Float(f64),
}

/// Largest integer that an `f64` can represent without losing precision.
const MAX_SAFE_F64_INTEGER: u64 = 1 << 53;

impl Number {
    /// Converts to an `f64` lossily.
    /// Use `Number::try_from` to make the conversion only if it is not lossy.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Converts to an `f32` lossily.
    /// Use `Number::try_from` to make the conversion only if it is not lossy.
    pub fn to_f32_lossy(self) -> f32 {
        self.to_f64_lossy() as f32
    }
}

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i64::try_from(v)?),
            Number::NegInt(v) => Ok(v),
            Number::Float(v) => Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into()),
        }
    }
}

impl TryFrom<Number> for u64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(v),
            Number::NegInt(v) => {
                Err(TryFromNumberErrorKind::NegativeToUnsignedLossyConversion(v).into())
            }
            Number::Float(v) => Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into()),
        }
    }
}

macro_rules! to_signed_integer_impl {
    ($typ:ident) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                match value {
                    Number::PosInt(v) => Ok(Self::try_from(v)?),
                    Number::NegInt(v) => Ok(Self::try_from(v)?),
                    Number::Float(v) => {
                        Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into())
                    }
                }
            }
        }
    };
}

to_signed_integer_impl!(i8);
to_signed_integer_impl!(i16);
to_signed_integer_impl!(i32);

impl TryFrom<Number> for f64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => {
                if v <= MAX_SAFE_F64_INTEGER {
                    Ok(v as f64)
                } else {
                    Err(TryFromNumberErrorKind::U64ToFloatLossyConversion(v).into())
                }
            }
            Number::NegInt(v) => {
                if v.unsigned_abs() <= MAX_SAFE_F64_INTEGER {
                    Ok(v as f64)
                } else {
                    Err(TryFromNumberErrorKind::I64ToFloatLossyConversion(v).into())
                }
            }
            Number::Float(v) => Ok(v),
        }
    }
}

impl TryFrom<Number> for f32 {
    type Error = TryFromNumberError;

    // JSON only has one float width, so narrowing a finite double is accepted as long as it
    // stays finite.
    fn try_from(value: Number) -> Result<Self, Self::Error> {
        let wide = f64::try_from(value)?;
        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            Err(TryFromNumberErrorKind::F64ToF32LossyConversion(wide).into())
        } else {
            Ok(narrow)
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn to_signed_integers() {
        assert_eq!(Ok(5i32), i32::try_from(Number::PosInt(5)).map_err(|_| ()));
        assert_eq!(Ok(-5i32), i32::try_from(Number::NegInt(-5)).map_err(|_| ()));
        assert!(i8::try_from(Number::PosInt(300)).is_err());
        assert!(i32::try_from(Number::Float(1.5)).is_err());
        assert_eq!(
            Ok(i64::MIN),
            i64::try_from(Number::NegInt(i64::MIN)).map_err(|_| ())
        );
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
    }

    #[test]
    fn to_unsigned() {
        assert_eq!(Ok(7u64), u64::try_from(Number::PosInt(7)).map_err(|_| ()));
        let err = u64::try_from(Number::NegInt(-7)).expect_err("negative");
        assert_eq!(
            "cannot convert negative integer -7 into an unsigned integer type",
            err.to_string()
        );
    }

    #[test]
    fn to_floats() {
        assert_eq!(Ok(1.5f64), f64::try_from(Number::Float(1.5)).map_err(|_| ()));
        assert_eq!(Ok(2.0f64), f64::try_from(Number::PosInt(2)).map_err(|_| ()));
        assert!(f64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert_eq!(Ok(0.25f32), f32::try_from(Number::Float(0.25)).map_err(|_| ()));
        assert!(f32::try_from(Number::Float(f64::MAX)).is_err());
    }

    #[test]
    fn from_i64() {
        assert_eq!(Number::PosInt(3), Number::from(3i64));
        assert_eq!(Number::NegInt(-3), Number::from(-3i64));
    }
}
