//! Extended precision scalars backed by MPFR.
//!
//! The binary precision is a const parameter of the type, so `MpReal<167>`
//! and `MpReal<256>` are different scalar types.  That keeps every value
//! of a type at one precision, and gives each precision its own
//! regularisation setting.

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use rug::Float;

use crate::{ParseRealError, Real, Vector3D};

/// Binary precision needed to hold `digits` decimal digits, i.e.
/// `ceil(digits * log2(10))`.
pub const fn digits_to_bits(digits: u32) -> u32 {
    // log2(10) to ten decimal places, rounded up.
    ((digits as u64 * 33_219_280_949 + 9_999_999_999) / 10_000_000_000) as u32
}

/// A floating point number with `PREC` bits of mantissa.
///
/// Every operation rounds to nearest at `PREC` bits.  `PREC` must be at
/// least 1.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct MpReal<const PREC: u32>(Float);

/// Fifty decimal digits.
pub type MpReal50 = MpReal<{ digits_to_bits(50) }>;

impl<const PREC: u32> MpReal<PREC> {
    pub const PRECISION: u32 = PREC;

    pub fn new(v: f64) -> MpReal<PREC> {
        MpReal(Float::with_val(PREC, v))
    }

    /// Wraps an MPFR value, rounding it if its precision isn't `PREC`.
    pub fn from_float(f: Float) -> MpReal<PREC> {
        if f.prec() == PREC {
            MpReal(f)
        } else {
            MpReal(Float::with_val(PREC, f))
        }
    }

    #[inline]
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    #[inline]
    pub fn into_float(self) -> Float {
        self.0
    }
}

impl<const PREC: u32> From<f64> for MpReal<PREC> {
    fn from(v: f64) -> MpReal<PREC> {
        MpReal::new(v)
    }
}

impl<const PREC: u32> fmt::Display for MpReal<PREC> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const PREC: u32> Add for MpReal<PREC> {
    type Output = MpReal<PREC>;

    #[inline]
    fn add(self, other: MpReal<PREC>) -> MpReal<PREC> {
        MpReal(self.0 + other.0)
    }
}

impl<const PREC: u32> Sub for MpReal<PREC> {
    type Output = MpReal<PREC>;

    #[inline]
    fn sub(self, other: MpReal<PREC>) -> MpReal<PREC> {
        MpReal(self.0 - other.0)
    }
}

impl<const PREC: u32> Mul for MpReal<PREC> {
    type Output = MpReal<PREC>;

    #[inline]
    fn mul(self, other: MpReal<PREC>) -> MpReal<PREC> {
        MpReal(self.0 * other.0)
    }
}

impl<const PREC: u32> Div for MpReal<PREC> {
    type Output = MpReal<PREC>;

    #[inline]
    fn div(self, other: MpReal<PREC>) -> MpReal<PREC> {
        MpReal(self.0 / other.0)
    }
}

impl<const PREC: u32> Neg for MpReal<PREC> {
    type Output = MpReal<PREC>;

    #[inline]
    fn neg(self) -> MpReal<PREC> {
        MpReal(-self.0)
    }
}

impl<const PREC: u32> Real for MpReal<PREC> {
    fn zero() -> MpReal<PREC> {
        MpReal(Float::new(PREC))
    }

    fn from_f64(v: f64) -> MpReal<PREC> {
        MpReal::new(v)
    }

    fn sqrt(self) -> MpReal<PREC> {
        MpReal(self.0.sqrt())
    }

    fn abs(self) -> MpReal<PREC> {
        MpReal(self.0.abs())
    }

    fn parse_decimal(s: &str) -> Result<MpReal<PREC>, ParseRealError> {
        let parsed =
            Float::parse(s.trim()).map_err(|source| ParseRealError::MultiPrecision {
                input: s.to_string(),
                source,
            })?;
        Ok(MpReal(Float::with_val(PREC, parsed)))
    }
}

impl<const PREC: u32> Mul<Vector3D<MpReal<PREC>>> for MpReal<PREC> {
    type Output = Vector3D<MpReal<PREC>>;

    #[inline]
    fn mul(self, v: Vector3D<MpReal<PREC>>) -> Vector3D<MpReal<PREC>> {
        v * self
    }
}

impl<'a, const PREC: u32> Mul<&'a Vector3D<MpReal<PREC>>> for &'a MpReal<PREC> {
    type Output = Vector3D<MpReal<PREC>>;

    #[inline]
    fn mul(self, v: &'a Vector3D<MpReal<PREC>>) -> Vector3D<MpReal<PREC>> {
        v * self
    }
}
