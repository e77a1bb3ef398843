use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use glam::{DVec3, Vec3};

use super::{regularisation, CrossProduct, DotProduct, Real, Regularisation};

/// A cartesian vector in 3d space.
///
/// Vectors are values: every operation returns a new vector and leaves
/// its operands alone.  Operators are implemented both for owned vectors
/// and for references, since extended precision scalars aren't `Copy`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector3D<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: Real> Vector3D<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Vector3D<T> {
        Vector3D { x, y, z }
    }

    #[inline]
    pub fn zero() -> Vector3D<T> {
        Vector3D {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x.clone()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y.clone()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.z.clone()
    }

    /// Sets the process-wide regularisation epsilon for **all** vectors
    /// over `T`, existing ones included.
    pub fn set_eps(eps: T) {
        regularisation::set_global_eps(eps);
    }

    /// The process-wide regularisation epsilon for `T`.
    pub fn eps() -> T {
        regularisation::global::<T>().eps().clone()
    }

    /// The process-wide regularisation epsilon for `T`, squared.
    pub fn eps_squared() -> T {
        regularisation::global_eps_squared::<T>()
    }

    /// Vector-scalar product, the same as `self * lambda`.
    #[inline]
    pub fn scale(&self, lambda: &T) -> Vector3D<T> {
        self * lambda
    }

    /// Vector-scalar division, the same as `self / lambda`.
    ///
    /// Dividing by zero does whatever `T`'s own division does.
    #[inline]
    pub fn divide(&self, lambda: &T) -> Vector3D<T> {
        self / lambda
    }

    #[inline]
    pub fn norm(&self) -> T {
        norm(self)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        norm_squared(self)
    }

    #[inline]
    pub fn normalised(&self) -> Vector3D<T> {
        normalised(self)
    }
}

impl<T: Real> Default for Vector3D<T> {
    fn default() -> Vector3D<T> {
        Vector3D::zero()
    }
}

/// The regularised norm, `sqrt(dot(v, v) + eps²)`, using the process-wide
/// regularisation for `T`.
///
/// This is not the euclidean length when `|v|` is comparable to `eps`.
/// Use [`norm_squared`] for an exact, unregularised quantity.
#[inline]
pub fn norm<T: Real>(v: &Vector3D<T>) -> T {
    (v.dot(v) + regularisation::global_eps_squared::<T>()).sqrt()
}

/// The regularised norm with an explicit regularisation.
#[inline]
pub fn norm_with<T: Real>(v: &Vector3D<T>, reg: &Regularisation<T>) -> T {
    (v.dot(v) + reg.eps_squared().clone()).sqrt()
}

/// `dot(v, v)`, with no regularisation.
#[inline]
pub fn norm_squared<T: Real>(v: &Vector3D<T>) -> T {
    v.dot(v)
}

/// `v / norm(v)`.
///
/// Since the norm is regularised, the result has unit length only when
/// `|v|` is much larger than `eps`.  The zero vector maps to itself.
#[inline]
pub fn normalised<T: Real>(v: &Vector3D<T>) -> Vector3D<T> {
    v / &norm(v)
}

#[inline]
pub fn normalised_with<T: Real>(v: &Vector3D<T>, reg: &Regularisation<T>) -> Vector3D<T> {
    v / &norm_with(v, reg)
}

impl<T: Real> DotProduct for Vector3D<T> {
    type Scalar = T;

    #[inline]
    fn dot(&self, other: &Vector3D<T>) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
}

impl<T: Real> CrossProduct for Vector3D<T> {
    #[inline]
    fn cross(&self, other: &Vector3D<T>) -> Vector3D<T> {
        Vector3D {
            x: self.y() * other.z() - self.z() * other.y(),
            y: -self.x() * other.z() + self.z() * other.x(),
            z: self.x() * other.y() - self.y() * other.x(),
        }
    }
}

macro_rules! impl_componentwise_op {
    ($Op:ident, $op:ident) => {
        impl<T: Real> $Op for Vector3D<T> {
            type Output = Vector3D<T>;

            #[inline]
            fn $op(self, other: Vector3D<T>) -> Vector3D<T> {
                Vector3D {
                    x: self.x.$op(other.x),
                    y: self.y.$op(other.y),
                    z: self.z.$op(other.z),
                }
            }
        }

        impl<'a, T: Real> $Op<&'a Vector3D<T>> for &'a Vector3D<T> {
            type Output = Vector3D<T>;

            #[inline]
            fn $op(self, other: &'a Vector3D<T>) -> Vector3D<T> {
                Vector3D {
                    x: self.x().$op(other.x()),
                    y: self.y().$op(other.y()),
                    z: self.z().$op(other.z()),
                }
            }
        }
    };
}

impl_componentwise_op!(Add, add);
impl_componentwise_op!(Sub, sub);

// Scalar products put the scalar on the left in both call orders, so
// `v * s` and `s * v` agree exactly.
impl<T: Real> Mul<T> for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn mul(self, lambda: T) -> Vector3D<T> {
        Vector3D {
            x: lambda.clone() * self.x,
            y: lambda.clone() * self.y,
            z: lambda * self.z,
        }
    }
}

impl<'a, T: Real> Mul<&'a T> for &'a Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn mul(self, lambda: &'a T) -> Vector3D<T> {
        Vector3D {
            x: lambda.clone() * self.x(),
            y: lambda.clone() * self.y(),
            z: lambda.clone() * self.z(),
        }
    }
}

impl<T: Real> Div<T> for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn div(self, lambda: T) -> Vector3D<T> {
        Vector3D {
            x: self.x / lambda.clone(),
            y: self.y / lambda.clone(),
            z: self.z / lambda,
        }
    }
}

impl<'a, T: Real> Div<&'a T> for &'a Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn div(self, lambda: &'a T) -> Vector3D<T> {
        Vector3D {
            x: self.x() / lambda.clone(),
            y: self.y() / lambda.clone(),
            z: self.z() / lambda.clone(),
        }
    }
}

impl<T: Real> Neg for Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn neg(self) -> Vector3D<T> {
        Vector3D {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<'a, T: Real> Neg for &'a Vector3D<T> {
    type Output = Vector3D<T>;

    #[inline]
    fn neg(self) -> Vector3D<T> {
        -self.clone()
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector3D<$t>> for $t {
                type Output = Vector3D<$t>;

                #[inline]
                fn mul(self, v: Vector3D<$t>) -> Vector3D<$t> {
                    v * self
                }
            }

            impl<'a> Mul<&'a Vector3D<$t>> for &'a $t {
                type Output = Vector3D<$t>;

                #[inline]
                fn mul(self, v: &'a Vector3D<$t>) -> Vector3D<$t> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

/// Renders as `<x, y, z>`.  A precision (`{:.20}`) is passed on to each
/// component.  This is for people to read, not a storage format.
impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "<{:.*}, {:.*}, {:.*}>",
                p, self.x, p, self.y, p, self.z
            ),
            None => write!(f, "<{}, {}, {}>", self.x, self.y, self.z),
        }
    }
}

impl<T: Real> From<(T, T, T)> for Vector3D<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Vector3D<T> {
        Vector3D { x, y, z }
    }
}

impl<T: Real> From<[T; 3]> for Vector3D<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Vector3D<T> {
        Vector3D { x, y, z }
    }
}

impl From<DVec3> for Vector3D<f64> {
    #[inline]
    fn from(v: DVec3) -> Vector3D<f64> {
        Vector3D::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D<f64>> for DVec3 {
    #[inline]
    fn from(v: Vector3D<f64>) -> DVec3 {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3D<f32> {
    #[inline]
    fn from(v: Vec3) -> Vector3D<f32> {
        Vector3D::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D<f32>> for Vec3 {
    #[inline]
    fn from(v: Vector3D<f32>) -> Vec3 {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl<T> AbsDiffEq for Vector3D<T>
where
    T: Real + AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vector3D<T>, epsilon: T::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon.clone())
            && self.y.abs_diff_eq(&other.y, epsilon.clone())
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Vector3D<T>
where
    T: Real + RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Vector3D<T>,
        epsilon: T::Epsilon,
        max_relative: T::Epsilon,
    ) -> bool {
        self.x
            .relative_eq(&other.x, epsilon.clone(), max_relative.clone())
            && self
                .y
                .relative_eq(&other.y, epsilon.clone(), max_relative.clone())
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Vector3D<T>
where
    T: Real + UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Vector3D<T>, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon.clone(), max_ulps)
            && self.y.ulps_eq(&other.y, epsilon.clone(), max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{cross, dot};
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};

    // Nothing in this module changes the process-wide regularisation for
    // `f64`, so it stays at the default.
    const EPS: f64 = 1e-7;

    #[test]
    fn new_and_components() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn default_is_zero() {
        let v = Vector3D::<f64>::default();
        assert_eq!(v, Vector3D::new(0.0, 0.0, 0.0));
        assert_eq!(v, Vector3D::zero());
    }

    #[test]
    fn add() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        let v3 = Vector3D::new(5.0, 7.0, 9.0);

        assert_eq!(v3, &v1 + &v2);
        assert_eq!(v3, v1 + v2);
    }

    #[test]
    fn sub() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        let v3 = Vector3D::new(3.0, 3.0, 3.0);

        assert_eq!(v3, &v2 - &v1);
        assert_eq!(-v3, v1 - v2);
    }

    #[test]
    fn neg() {
        let v = Vector3D::new(1.0, -2.0, 0.5);
        assert_eq!(-&v, Vector3D::new(-1.0, 2.0, -0.5));
        assert_eq!(-(-v.clone()), v);
    }

    #[test]
    fn mul_scalar() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = 2.0;
        let v3 = Vector3D::new(2.0, 4.0, 6.0);

        assert_eq!(v3, &v1 * &v2);
        assert_eq!(v3, v1.scale(&v2));
        assert_eq!(v3, v1 * v2);
    }

    #[test]
    fn scalar_mul() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = 2.0;
        let v3 = Vector3D::new(2.0, 4.0, 6.0);

        assert_eq!(v3, &v2 * &v1);
        assert_eq!(v3, v2 * v1);
    }

    #[test]
    fn scalar_mul_commutes_exactly() {
        let v = Vector3D::new(0.1, -7.3, 1e-12);
        let s = 1.0 / 3.0;
        assert_eq!(&v * &s, &s * &v);
        assert_eq!(v.clone() * s, s * v);
    }

    #[test]
    fn div() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = 2.0;
        let v3 = Vector3D::new(0.5, 1.0, 1.5);

        assert_eq!(v3, &v1 / &v2);
        assert_eq!(v3, v1.divide(&v2));
        assert_eq!(v3, v1 / v2);
    }

    #[test]
    fn div_by_zero_is_unchecked() {
        let v = Vector3D::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x(), std::f64::INFINITY);
        assert_eq!(v.y(), std::f64::NEG_INFINITY);
        assert!(v.z().is_nan());
    }

    #[test]
    fn dot_test() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);

        assert_eq!(32.0, dot(&v1, &v2));
        assert_eq!(dot(&v2, &v1), v1.dot(&v2));
    }

    #[test]
    fn cross_test() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);

        assert_eq!(Vector3D::new(-3.0, 6.0, -3.0), cross(&v1, &v2));
        assert_eq!(-cross(&v2, &v1), v1.cross(&v2));
    }

    #[test]
    fn cross_right_handed() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        let z = Vector3D::new(0.0, 0.0, 1.0);

        assert_eq!(z, cross(&x, &y));
        assert_eq!(x, cross(&y, &z));
        assert_eq!(y, cross(&z, &x));
    }

    #[test]
    fn norm_is_regularised() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_relative_eq!(v.norm(), (14.0f64 + EPS * EPS).sqrt());
        assert!((v.norm() - 14.0f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn norm_of_zero_is_eps() {
        let v = Vector3D::<f64>::zero();
        assert_relative_eq!(norm(&v), EPS);
        assert_eq!(norm_squared(&v), 0.0);
    }

    #[test]
    fn norm_with_explicit_regularisation() {
        let v = Vector3D::new(3.0, 4.0, 0.0);
        assert_eq!(norm_with(&v, &Regularisation::new(0.0)), 5.0);
        assert_relative_eq!(
            norm_with(&v, &Regularisation::new(1.0)),
            26.0f64.sqrt()
        );
    }

    #[test]
    fn norm_squared_is_exact() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v.norm_squared(), 14.0);
        assert_eq!(norm_squared(&v), dot(&v, &v));
    }

    #[test]
    fn normalised_test() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(
            0.2672612419124244,
            0.5345224838248488,
            0.8017837257372732,
        );
        let v3 = v1.normalised();
        assert_abs_diff_eq!(v3, v2, epsilon = 1e-14);
        assert_abs_diff_eq!(norm(&v3), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn normalised_zero_stays_finite() {
        let v = normalised(&Vector3D::<f64>::zero());
        assert_eq!(v, Vector3D::zero());
    }

    #[test]
    fn normalised_tiny_is_shortened() {
        // Comparable to eps, so the result is far from unit length.
        let v = Vector3D::new(EPS, 0.0, 0.0);
        let n = normalised(&v);
        assert_relative_eq!(n.x(), 1.0 / 2.0f64.sqrt(), max_relative = 1e-12);

        let exact = normalised_with(&v, &Regularisation::new(0.0));
        assert_relative_eq!(exact, Vector3D::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn eps_facade_reads_default() {
        assert_eq!(Vector3D::<f64>::eps(), EPS);
        assert_eq!(Vector3D::<f64>::eps_squared(), EPS * EPS);
    }

    #[test]
    fn display() {
        let v = Vector3D::new(1.0, 2.5, -3.0);
        assert_eq!(v.to_string(), "<1, 2.5, -3>");
        assert_eq!(format!("{:.2}", v), "<1.00, 2.50, -3.00>");
    }

    #[test]
    fn from_tuple_and_array() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3D::from((1.0, 2.0, 3.0)));
        assert_eq!(v, Vector3D::from([1.0, 2.0, 3.0]));
    }

    #[test]
    fn glam_conversion() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let g: DVec3 = v.clone().into();
        assert_eq!(g, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3D::from(g), v);

        let h: Vec3 = Vector3D::new(1.0f32, 2.0, 3.0).into();
        assert_eq!(Vector3D::from(h), Vector3D::new(1.0f32, 2.0, 3.0));
    }

    #[test]
    fn approx_componentwise() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(1.0 + 1e-15, 2.0, 3.0 - 1e-15);
        assert_ulps_eq!(v1, v2, max_ulps = 8);
        assert_relative_eq!(v1, v2, max_relative = 1e-14);
        assert!(!v1.abs_diff_eq(&Vector3D::new(1.1, 2.0, 3.0), 1e-3));
    }

    #[cfg(feature = "multiprec")]
    mod multiprec {
        use crate::{MpReal50, Real};
        use super::*;

        type Mp = MpReal50;
        type Vec3D = Vector3D<Mp>;

        fn mp(v: f64) -> Mp {
            Mp::new(v)
        }

        fn close(a: &Mp, b: &Mp, tol: &str) -> bool {
            (a.clone() - b.clone()).abs() < Mp::parse_decimal(tol).unwrap()
        }

        #[test]
        fn arithmetic() {
            let u = Vec3D::new(mp(1.0), mp(2.0), mp(3.0));
            let v = Vec3D::new(mp(4.0), mp(5.0), mp(6.0));

            assert_eq!(&u + &v, Vec3D::new(mp(5.0), mp(7.0), mp(9.0)));
            assert_eq!(&v - &u, Vec3D::new(mp(3.0), mp(3.0), mp(3.0)));
            assert_eq!(&u * &mp(2.0), Vec3D::new(mp(2.0), mp(4.0), mp(6.0)));
            assert_eq!(&mp(2.0) * &u, &u * &mp(2.0));
            assert_eq!(mp(2.0) * u.clone(), u.clone() * mp(2.0));
            assert_eq!(&u / &mp(2.0), Vec3D::new(mp(0.5), mp(1.0), mp(1.5)));
        }

        #[test]
        fn products() {
            let u = Vec3D::new(mp(1.0), mp(2.0), mp(3.0));
            let v = Vec3D::new(mp(4.0), mp(5.0), mp(6.0));

            assert_eq!(dot(&u, &v), mp(32.0));
            assert_eq!(cross(&u, &v), Vec3D::new(mp(-3.0), mp(6.0), mp(-3.0)));
        }

        #[test]
        fn one_third_survives() {
            let third = mp(1.0) / mp(3.0);
            let v = Vec3D::new(mp(1.0), mp(1.0), mp(1.0)) / mp(3.0);
            assert_eq!(v.x(), third);
            assert!(close(&(v.x() * mp(3.0)), &mp(1.0), "1e-49"));
        }

        #[test]
        fn norm_at_high_precision() {
            let reg = Regularisation::new(Mp::parse_decimal("1e-20").unwrap());
            let v = Vec3D::new(mp(1.0), mp(2.0), mp(3.0));
            let expected = mp(14.0).sqrt();

            assert!(close(&norm_with(&v, &reg), &expected, "1e-40"));
            assert_eq!(norm_squared(&v), mp(14.0));

            let n = normalised_with(&v, &reg);
            assert!(close(&n.x(), &(mp(1.0) / expected.clone()), "1e-40"));
            assert!(close(&n.z(), &(mp(3.0) / expected), "1e-40"));
        }
    }
}
