//! Edge, triangle and tetrahedron measurements.
//!
//! All of these are plain functions of their vertices.  The ones built on
//! the norm come in two flavours: the plain function uses the process-wide
//! regularisation for the scalar type, the `*_with` one takes it as an
//! argument.

use math3d::{cross, norm, norm_with, normalised, normalised_with, Real, Regularisation, Vector3D};

/// Length of the edge between `r1` and `r2`, using the regularised norm.
///
/// Symmetric in its arguments.
pub fn edge_length<T: Real>(r1: &Vector3D<T>, r2: &Vector3D<T>) -> T {
    norm(&(r1 - r2))
}

pub fn edge_length_with<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    reg: &Regularisation<T>,
) -> T {
    norm_with(&(r1 - r2), reg)
}

/// Midpoint of the edge between `r1` and `r2`.
pub fn edge_center<T: Real>(r1: &Vector3D<T>, r2: &Vector3D<T>) -> Vector3D<T> {
    (r1 + r2) / T::from_f64(2.0)
}

/// Unit vector pointing from `r1` towards `r2`.
///
/// The normalisation is regularised, so coincident end points give the
/// zero vector rather than NaNs.
pub fn edge_orientation<T: Real>(r1: &Vector3D<T>, r2: &Vector3D<T>) -> Vector3D<T> {
    normalised(&(r2 - r1))
}

pub fn edge_orientation_with<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    reg: &Regularisation<T>,
) -> Vector3D<T> {
    normalised_with(&(r2 - r1), reg)
}

/// Unit normal of the triangle `r1, r2, r3`: the normalised
/// `cross(r2 - r1, r3 - r1)`.
///
/// By the right hand rule the normal points towards the side from which
/// `r1 -> r2 -> r3` appears counter-clockwise.  (Older documentation of
/// this function described the winding as clockwise, which doesn't match
/// the formula; the formula is what callers get.)  Swapping any two
/// vertices flips the normal.
pub fn triangle_normal<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
) -> Vector3D<T> {
    normalised(&cross(&(r2 - r1), &(r3 - r1)))
}

pub fn triangle_normal_with<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
    reg: &Regularisation<T>,
) -> Vector3D<T> {
    normalised_with(&cross(&(r2 - r1), &(r3 - r1)), reg)
}

/// Centroid of the triangle `r1, r2, r3`.
pub fn triangle_center<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
) -> Vector3D<T> {
    let sum = &(r1 + r2) + r3;
    sum / T::from_f64(3.0)
}

/// Area of the triangle `r1, r2, r3`, using the regularised norm.  Never
/// negative.
pub fn triangle_area<T: Real>(r1: &Vector3D<T>, r2: &Vector3D<T>, r3: &Vector3D<T>) -> T {
    norm(&cross(&(r2 - r1), &(r3 - r1))) / T::from_f64(2.0)
}

pub fn triangle_area_with<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
    reg: &Regularisation<T>,
) -> T {
    norm_with(&cross(&(r2 - r1), &(r3 - r1)), reg) / T::from_f64(2.0)
}

/// Centroid of the tetrahedron `r1, r2, r3, r4`.
pub fn tetrahedron_center<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
    r4: &Vector3D<T>,
) -> Vector3D<T> {
    let sum = &(&(r1 + r2) + r3) + r4;
    sum / T::from_f64(4.0)
}

/// Signed volume of the tetrahedron `r1, r2, r3, r4`.
///
/// The magnitude is the volume.  The sign is that of
/// `-det[r2 - r1, r3 - r1, r4 - r1]`, so e.g. the origin followed by the
/// x, y and z unit points gives `-1/6`.  Any odd permutation of the
/// vertices flips the sign.
///
/// This is the full 24 term expansion of the determinant, evaluated left
/// to right in this exact order.  Keep it that way: rearranging it changes
/// the rounding, and callers compare orientations.
#[rustfmt::skip]
pub fn tetrahedron_volume<T: Real>(
    r1: &Vector3D<T>,
    r2: &Vector3D<T>,
    r3: &Vector3D<T>,
    r4: &Vector3D<T>,
) -> T {
    let (x1, y1, z1) = (r1.x(), r1.y(), r1.z());
    let (x2, y2, z2) = (r2.x(), r2.y(), r2.z());
    let (x3, y3, z3) = (r3.x(), r3.y(), r3.z());
    let (x4, y4, z4) = (r4.x(), r4.y(), r4.z());

    let det = triple(&y1, &z2, &x3) - triple(&z1, &y2, &x3)
            + triple(&z1, &x2, &y3) - triple(&x1, &z2, &y3)
            - triple(&y1, &x2, &z3) + triple(&x1, &y2, &z3)
            + triple(&z1, &y2, &x4) - triple(&y1, &z2, &x4)
            - triple(&z1, &y3, &x4) + triple(&z2, &y3, &x4)
            + triple(&y1, &z3, &x4) - triple(&y2, &z3, &x4)
            - triple(&z1, &x2, &y4) + triple(&x1, &z2, &y4)
            + triple(&z1, &x3, &y4) - triple(&z2, &x3, &y4)
            - triple(&x1, &z3, &y4) + triple(&x2, &z3, &y4)
            + triple(&y1, &x2, &z4) - triple(&x1, &y2, &z4)
            - triple(&y1, &x3, &z4) + triple(&y2, &x3, &z4)
            + triple(&x1, &y3, &z4) - triple(&x2, &y3, &z4);

    det / T::from_f64(6.0)
}

/// `(a * b) * c`
#[inline(always)]
fn triple<T: Real>(a: &T, b: &T, c: &T) -> T {
    a.clone() * b.clone() * c.clone()
}
