//! Geometric measurements of edges, triangles and tetrahedra.
//!
//! The formulas are generic over the scalar type, so the same code runs at
//! `f64` and at extended precision.  The vector algebra lives in the
//! `math3d` crate and is re-exported here.
//!
//! Nothing here checks for degenerate shapes.  Norm based quantities go
//! through the regularised norm (see [`regularisation`]) and stay finite;
//! the tetrahedron volume of coplanar points simply comes out as (nearly)
//! zero.

pub mod geometry;

pub use math3d::{
    cross, dot, norm, norm_squared, norm_with, normalised, normalised_with, regularisation,
    CrossProduct, DotProduct, ParseRealError, Real, Regularisation, Vector3D,
};
#[cfg(feature = "multiprec")]
pub use math3d::{digits_to_bits, MpReal, MpReal50};

pub use self::geometry::{
    edge_center, edge_length, edge_length_with, edge_orientation, edge_orientation_with,
    tetrahedron_center, tetrahedron_volume, triangle_area, triangle_area_with, triangle_center,
    triangle_normal, triangle_normal_with,
};
