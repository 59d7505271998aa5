//! Fixed-point quantization of normalized floating-point values.
//!
//! A normalized value is a real number in `[0, 1]` (unsigned targets) or `[-1, 1]` (signed
//! targets) stored as an integer spanning the full range of its width. Encoding multiplies
//! by the integer maximum and rounds to nearest; decoding divides by the same maximum.
//!
//! Integers of 8 and 16 bits quantize through `f32`. 32 and 64-bit integers carry more
//! significant bits than an `f32` mantissa, so they quantize through `f64`.
//!
//! Signed widths all use the full `MAX` scale, so `1.0` encodes to `MAX` and `-1.0` to
//! `-MAX`. The one code below that, `MIN`, decodes to `-1.0` as well.
//!
//! ```rust
//! use bytecursor::io::Normalized;
//!
//! assert_eq!(u8::normalize(0.5)?, 128);
//! assert!((128_u8.denormalize() - 0.50196).abs() < 1e-5);
//! assert!(u8::normalize(1.5).is_err());
//! # Ok::<(), bytecursor::Error>(())
//! ```

use std::fmt;

use super::primitive::Primitive;
use crate::Result;

/// Integer types that can carry a normalized floating-point value.
pub trait Normalized: Primitive {
    /// Floating-point type used for the quantization math and the decoded value.
    type Float: Copy + PartialOrd + fmt::Display;

    /// Lower bound of the accepted domain: `0.0` for unsigned, `-1.0` for signed types.
    const DOMAIN_MIN: Self::Float;

    /// Upper bound of the accepted domain, always `1.0`.
    const DOMAIN_MAX: Self::Float;

    /// Quantizes `value` without validating its domain.
    ///
    /// Values outside the domain saturate at the integer range, NaN becomes `0`.
    fn quantize(value: Self::Float) -> Self;

    /// Maps the integer back onto its normalized domain.
    fn denormalize(self) -> Self::Float;

    /// Returns `true` if `value` lies inside `[DOMAIN_MIN, DOMAIN_MAX]`. NaN never does.
    fn in_domain(value: Self::Float) -> bool {
        value >= Self::DOMAIN_MIN && value <= Self::DOMAIN_MAX
    }

    /// Quantizes `value` after validating its domain.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidValue`] if `value` lies outside the domain or is NaN.
    fn normalize(value: Self::Float) -> Result<Self> {
        if !Self::in_domain(value) {
            return Err(invalid_value_error!(
                "normalized value {} outside [{}, {}]",
                value,
                Self::DOMAIN_MIN,
                Self::DOMAIN_MAX
            ));
        }

        Ok(Self::quantize(value))
    }
}

macro_rules! impl_normalized_unsigned {
    ($($ty:ty => $float:ty),* $(,)?) => {
        $(
            impl Normalized for $ty {
                type Float = $float;

                const DOMAIN_MIN: $float = 0.0;
                const DOMAIN_MAX: $float = 1.0;

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn quantize(value: $float) -> Self {
                    // `as` saturates, which covers 1.0 * u64::MAX rounding up to 2^64
                    (value * (<$ty>::MAX as $float) + 0.5) as $ty
                }

                #[inline]
                fn denormalize(self) -> $float {
                    self as $float / <$ty>::MAX as $float
                }
            }
        )*
    };
}

macro_rules! impl_normalized_signed {
    ($($ty:ty => $float:ty),* $(,)?) => {
        $(
            impl Normalized for $ty {
                type Float = $float;

                const DOMAIN_MIN: $float = -1.0;
                const DOMAIN_MAX: $float = 1.0;

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn quantize(value: $float) -> Self {
                    // Half away from zero keeps the encoding symmetric around 0
                    (value * (<$ty>::MAX as $float)).round() as $ty
                }

                #[inline]
                fn denormalize(self) -> $float {
                    (self as $float / <$ty>::MAX as $float).max(-1.0)
                }
            }
        )*
    };
}

impl_normalized_unsigned! {
    u8 => f32,
    u16 => f32,
    u32 => f64,
    u64 => f64,
}

impl_normalized_signed! {
    i8 => f32,
    i16 => f32,
    i32 => f64,
    i64 => f64,
}
