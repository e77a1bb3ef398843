use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use thiserror::Error;

/// Failure to read a scalar from decimal text.
#[derive(Debug, Error)]
pub enum ParseRealError {
    #[error("invalid number {input:?}: {source}")]
    Native {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[cfg(feature = "multiprec")]
    #[error("invalid number {input:?}: {source}")]
    MultiPrecision {
        input: String,
        #[source]
        source: rug::float::ParseFloatError,
    },
}

/// A real number representation that vectors can be built from.
///
/// This is the minimal set of operations the vector algebra and the
/// geometry formulas need: the four arithmetic operators and negation on
/// owned values, a square root, an absolute value and an ordering.  It is
/// implemented for `f32`, `f64` and, with the `multiprec` feature, for
/// [`MpReal`](crate::MpReal).
///
/// The type is also the key of the process-wide regularisation state, hence
/// the `'static + Send + Sync` bounds.
pub trait Real:
    Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts from an `f64`, rounding to this type's precision.
    ///
    /// Small integers (the divisors used for centroids, say) are exact.
    fn from_f64(v: f64) -> Self;

    fn sqrt(self) -> Self;

    fn abs(self) -> Self;

    /// Reads a decimal literal such as `"1e-20"`.
    ///
    /// For extended precision types this is the way to get constants that
    /// are exact to the type's precision rather than to `f64`'s.
    fn parse_decimal(s: &str) -> Result<Self, ParseRealError>;

    /// The regularisation epsilon a scalar type starts out with.
    fn default_eps() -> Self {
        Self::from_f64(1e-7)
    }
}

macro_rules! impl_real_native {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                #[inline(always)]
                fn zero() -> $t {
                    0.0
                }

                #[inline(always)]
                fn from_f64(v: f64) -> $t {
                    v as $t
                }

                #[inline(always)]
                fn sqrt(self) -> $t {
                    <$t>::sqrt(self)
                }

                #[inline(always)]
                fn abs(self) -> $t {
                    <$t>::abs(self)
                }

                fn parse_decimal(s: &str) -> Result<$t, ParseRealError> {
                    s.trim()
                        .parse::<$t>()
                        .map_err(|source| ParseRealError::Native {
                            input: s.to_string(),
                            source,
                        })
                }
            }
        )*
    };
}

impl_real_native!(f32, f64);
