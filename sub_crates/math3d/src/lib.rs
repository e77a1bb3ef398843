//! Three dimensional cartesian vectors over a caller-chosen scalar type.
//!
//! Everything here is generic over [`Real`], so the same formulas run at
//! `f64` and at hundreds of bits of precision (see [`MpReal`] behind the
//! `multiprec` feature).  The vector norm is regularised, and the
//! regularisation is configured per scalar type; see [`regularisation`].

#[cfg(feature = "multiprec")]
mod multiprec;
mod real;
pub mod regularisation;
mod vector3d;

#[cfg(feature = "multiprec")]
pub use self::multiprec::{digits_to_bits, MpReal, MpReal50};
pub use self::real::{ParseRealError, Real};
pub use self::regularisation::Regularisation;
pub use self::vector3d::{norm, norm_squared, norm_with, normalised, normalised_with, Vector3D};

/// Trait for calculating dot products.
pub trait DotProduct {
    type Scalar;

    fn dot(&self, other: &Self) -> Self::Scalar;
}

#[inline]
pub fn dot<V: DotProduct>(a: &V, b: &V) -> V::Scalar {
    a.dot(b)
}

/// Trait for calculating cross products.
pub trait CrossProduct {
    fn cross(&self, other: &Self) -> Self;
}

#[inline]
pub fn cross<V: CrossProduct>(a: &V, b: &V) -> V {
    a.cross(b)
}
