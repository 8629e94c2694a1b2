/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Methods of the fixed-size vector types `V2`, `V3` and `V4`.
//!
//! Methods taking `&mut self` modify the vector in place and hand back the
//! same vector for chaining (`v.scale(2.0).normalize()`).  Everything else,
//! including all of the operators, produces a new vector.

use crate::traits::Field;

use super::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The size of the vector is inferred from how it is used.
#[inline]
pub fn from_fn<V: FromFn<Elem=B>, B, F>(f: F) -> V
where F: FnMut(usize) -> B,
{ V::from_fn(f) }

/// Get a zero vector (using type inference).
#[inline(always)]
pub fn zero<V: Zero + IsV>() -> V
{ Zero::zero() }

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:expr}
    ) => {
        impl<X> $Vn<X> {
            /// The zero vector.  (`vee::zero` is the same thing, with the type inferred)
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Build the vector from its components' indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { FromFn::from_fn(f) }

            /// Elementwise conversion into a vector of another scalar.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Vn<B>
            where X: Copy, F: FnMut(X) -> B,
            { <$Vn<B>>::from_fn(|k| f(self.0[k])) }
        }

        impl<X: Field> $Vn<X> {
            /// Inner product.  `V3::dot(a, b)` reads better than `a.dot(b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> X
            { Dot::dot(self, other) }

            /// Squared magnitude; the dot product of the vector with itself.
            #[inline(always)]
            pub fn sqnorm(&self) -> X
            { Dot::dot(self, self) }

            /// Get the vector's Euclidean magnitude.
            #[inline(always)]
            pub fn norm(&self) -> X
            { self.sqnorm().sqrt() }

            /// Synonym for `norm`.
            #[inline(always)]
            pub fn magnitude(&self) -> X
            { self.norm() }

            /// Multiply each component by a scalar, in place.
            ///
            /// Use `v * s` to get a new vector instead.
            #[inline]
            pub fn scale(&mut self, scalar: X) -> &mut Self
            {
                for x in &mut self.0 {
                    *x = *x * scalar;
                }
                self
            }

            /// Divide each component by a scalar, in place.
            ///
            /// Dividing by zero is not checked, and produces infinities or NaNs.
            #[inline]
            pub fn divide(&mut self, scalar: X) -> &mut Self
            {
                for x in &mut self.0 {
                    *x = *x / scalar;
                }
                self
            }

            /// Rescale the vector in place to have a magnitude of 1.
            ///
            /// A vector of exactly zero magnitude is left untouched.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self
            {
                let norm = self.norm();
                if norm == X::zero() {
                    trace!("normalize: left a zero {}d vector unchanged", $n);
                    return self;
                }
                self.divide(norm)
            }

            /// Get a normalized copy of the vector.  (see `normalize`)
            #[inline]
            pub fn normalized(&self) -> Self
            {
                let mut out = *self;
                out.normalize();
                out
            }

            /// Set every component to zero, in place.
            #[inline]
            pub fn set_zero(&mut self) -> &mut Self
            {
                *self = Zero::zero();
                self
            }

            /// The unit vector along axis `i`.
            ///
            /// # Panics
            ///
            /// Panics if `i` is not a valid axis for this vector type.
            #[inline]
            pub fn axis_unit(i: usize) -> Self
            {
                let mut v = Self::zero();
                *v.get_mut(i)
                    .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", $n, i)) = X::one();
                v
            }

            /// Get the angle between this vector and another, as `acos` of the
            /// normalized dot product.
            ///
            /// Nothing is guarded here.  The result is NaN if either vector is zero,
            /// or if rounding error pushes the cosine slightly outside of `[-1, 1]`.
            /// See `angle_to` for a version that can't fall into the latter trap.
            #[inline]
            pub fn angle(&self, other: &Self) -> X
            { X::acos(dot(self, other) / (self.norm() * other.norm())) }

            /// Like `angle`, but always in `[0, pi]` for nonzero vectors.
            ///
            /// The cosine is clamped to `[-1, 1]` before taking `acos`.
            #[inline]
            pub fn angle_to(&self, other: &Self) -> X
            {
                let arg = dot(self, other) / X::sqrt(self.sqnorm() * other.sqnorm());
                X::acos(arg.min(X::one()).max(-X::one()))
            }

            /// Euclidean distance between two points.
            #[inline]
            pub fn distance_between(&self, other: &Self) -> X
            { (self - other).norm() }

            /// The point halfway between two points.
            #[inline]
            pub fn mid_point(&self, other: &Self) -> Self
            { Self::from_fn(|k| (self[k] + other[k]) / X::two()) }
        }
    }
}

impl<X: Field> V2<X> {
    /// The 2D "cross product", i.e. the z component of the 3D cross product
    /// of the two vectors embedded in the xy plane.
    #[inline]
    pub fn cross(&self, other: &Self) -> X
    { self[0] * other[1] - self[1] * other[0] }

    /// Rotate the vector in place, either counter-clockwise by an angle in radians,
    /// or by left-multiplying a rotation matrix.
    ///
    /// ```
    /// # use eucl::{V2, M22};
    /// let mut v = V2([1.0, 0.0]);
    /// v.rotate(std::f64::consts::FRAC_PI_2);
    /// v.rotate(M22::rotation(-std::f64::consts::FRAC_PI_2));
    /// assert!((v[0] - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn rotate(&mut self, rotation: impl Into<Rotation<X>>) -> &mut Self
    {
        *self = match rotation.into() {
            Rotation::Angle(angle) => {
                let (sin, cos) = (angle.sin(), angle.cos());
                V2([
                    cos * self[0] - sin * self[1],
                    sin * self[0] + cos * self[1],
                ])
            },
            Rotation::Matrix(matrix) => &matrix * &*self,
        };
        self
    }

    /// Overwrite the vector with the unit vector at `angle` radians
    /// counter-clockwise from the x axis.
    #[inline]
    pub fn set_rotation(&mut self, angle: X) -> &mut Self
    {
        *self = V2([angle.cos(), angle.sin()]);
        self
    }
}

/// Argument to `V2::rotate`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rotation<X=f64> {
    /// Counter-clockwise angle in radians.
    Angle(X),
    /// A matrix to left-multiply the (column) vector by.
    Matrix(M22<X>),
}

gen_each!{
    @{field}
    impl_rotation_from_scalar!({$X:ty}) => {
        impl From<$X> for Rotation<$X> {
            #[inline(always)]
            fn from(angle: $X) -> Self { Rotation::Angle(angle) }
        }
    }
}

impl<X> From<M22<X>> for Rotation<X> {
    #[inline(always)]
    fn from(matrix: M22<X>) -> Self { Rotation::Matrix(matrix) }
}

impl<X: Field> V3<X> {
    /// Cross-product, by the determinant expansion
    /// `(y1 z2 - y2 z1, -(x1 z2 - x2 z1), x1 y2 - x2 y1)`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - other[1] * self[2],
            -(self[0] * other[2] - other[0] * self[2]),
            self[0] * other[1] - other[0] * self[1],
        ])
    }

    /// Scalar triple product `self · (b × c)`.
    ///
    /// This is the signed volume of the parallelepiped spanned by the three vectors.
    #[inline]
    pub fn triple_s(&self, b: &Self, c: &Self) -> X
    { dot(self, &b.cross(c)) }

    /// Vector triple product `self × (b × c)`.
    #[inline]
    pub fn triple_v(&self, b: &Self, c: &Self) -> Self
    { self.cross(&b.cross(c)) }
}

gen_each!{
    @{Vn_n}
    impl_random_unit!( {$Vn:ident $n:tt} ) => {
        impl<X: Field> $Vn<X> where Self: RandomUnit {
            /// A unit vector pointing in a uniformly random direction.
            #[inline(always)]
            pub fn random_unit() -> Self
            { RandomUnit::random_unit() }

            /// `random_unit`, drawing from the given generator.
            #[inline(always)]
            pub fn random_unit_with(rng: impl rand::Rng) -> Self
            { RandomUnit::random_unit_with(rng) }
        }
    }
}

/// Inner product of two vectors of the same size.
///
/// The free-function form of `{V2,V3,V4}::dot`, for symmetric call sites.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;
/// Maps `V2`/`V3`/`V4` to their scalar type.
pub trait IsV {
    type Scalar;
}

gen_each!{
    @{Vn}
    for_each!(
        {$Vn:ident}
    ) => {
        impl<X> IsV for $Vn<X>
        { type Scalar = X; }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: Field> Zero for $Vn<X> {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of `V3::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn: Sized {
    type Elem;

    fn from_fn(f: impl FnMut(usize) -> Self::Elem) -> Self;
}

impl<A> FromFn for V2<A> {
    type Elem = A;

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> Self::Elem) -> Self
    { V2([f(0), f(1)]) }
}

impl<A> FromFn for V3<A> {
    type Elem = A;

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> Self::Elem) -> Self
    { V3([f(0), f(1), f(2)]) }
}

impl<A> FromFn for V4<A> {
    type Elem = A;

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> Self::Elem) -> Self
    { V4([f(0), f(1), f(2), f(3)]) }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3,V4}::dot`.
///
/// > **_Fuggedaboudit._**
///
/// Lets the free function `dot` accept every vector size.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Field> Dot for $Vn<X> {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> X
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3}::random_unit`.
///
/// > **_Fuggedaboudit._**
pub trait RandomUnit: IsV + Sized {
    #[inline]
    fn random_unit() -> Self
    { RandomUnit::random_unit_with(rand::thread_rng()) }

    fn random_unit_with(rng: impl rand::Rng) -> Self;
}

// http://mathworld.wolfram.com/CirclePointPicking.html
impl<X: Field> RandomUnit for V2<X> {
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let r2 = x1 * x1 + x2 * x2;
            if r2 >= X::one() || r2 == X::zero() {
                continue;
            }
            return V2([(x1 * x1 - x2 * x2) / r2, X::two() * x1 * x2 / r2]);
        }
    }
}

// http://mathworld.wolfram.com/SpherePointPicking.html
impl<X: Field> RandomUnit for V3<X> {
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let r2 = x1 * x1 + x2 * x2;
            if r2 >= X::one() {
                continue;
            }
            let scale = X::two() * X::sqrt(X::one() - r2);
            return V3([x1 * scale, x2 * scale, X::one() - X::two() * r2]);
        }
    }
}

// ---------------------------------------------------------------------------

// Summing an iterator of vectors.

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Field> std::iter::Sum for $Vn<X> {
            fn sum<I: Iterator<Item=$Vn<X>>>(iter: I) -> Self
            { iter.fold(Zero::zero(), |acc, v| acc + v) }
        }

        impl<'a, X: Field> std::iter::Sum<&'a $Vn<X>> for $Vn<X> {
            fn sum<I: Iterator<Item=&'a $Vn<X>>>(iter: I) -> Self
            { iter.fold(Zero::zero(), |acc, v| acc + v) }
        }
    }
}

// slice-of-array integration, so that `&[V3]` can be `.flat()`ed into `&[f64]`.
gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        unsafe impl<X> slice_of_array::IsSliceomorphic for $Vn<X> {
            type Element = X;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::close::Tolerances;
    use std::f64::consts::{PI, FRAC_PI_2};

    #[test]
    fn magnitude() {
        assert_eq!(V2([3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(V3([2.0, 3.0, 6.0]).magnitude(), 7.0);
        assert_eq!(V4([1.0, 1.0, 1.0, 1.0]).magnitude(), 2.0);
    }

    #[test]
    fn scale_and_divide_chain_in_place() {
        let mut v = V3([1.0, -2.0, 3.0]);
        v.scale(4.0).divide(2.0);
        assert_eq!(v, V3([2.0, -4.0, 6.0]));
    }

    #[test]
    fn divide_by_zero_is_unchecked() {
        let mut v = V2::<f64>([1.0, 0.0]);
        v.divide(0.0);
        assert!(v[0].is_infinite());
        assert!(v[1].is_nan());
    }

    #[test]
    fn normalize() {
        let mut v = V3([0.0, 3.0, 4.0]);
        v.normalize();
        assert_close!(1.0, v.magnitude());
        assert_close!(abs=1e-15, [0.0, 0.6, 0.8], v.0);

        let mut zero = V4::<f64>::zero();
        assert_eq!(*zero.normalize(), V4::zero());
    }

    #[test]
    fn normalized_leaves_original_alone() {
        let v = V2([0.0, -2.0]);
        assert_eq!(v.normalized(), V2([0.0, -1.0]));
        assert_eq!(v, V2([0.0, -2.0]));
    }

    #[test]
    fn set_zero() {
        let mut v = V4([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(*v.set_zero(), V4([0.0; 4]));
    }

    #[test]
    fn axis_unit() {
        assert_eq!(V3::axis_unit(1), V3([0.0, 1.0, 0.0]));
        assert_eq!(V4::axis_unit(3), V4([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    #[should_panic(expected = "Invalid axis")]
    fn axis_unit_out_of_range() {
        let _ = V2::<f64>::axis_unit(2);
    }

    #[test]
    fn cross() {
        assert_eq!(V2([1.0, 0.0]).cross(&V2([0.0, 1.0])), 1.0);
        assert_eq!(V2([0.0, 1.0]).cross(&V2([1.0, 0.0])), -1.0);

        let x = V3([1.0, 0.0, 0.0]);
        let y = V3([0.0, 1.0, 0.0]);
        let z = V3([0.0, 0.0, 1.0]);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), -z);
    }

    #[test]
    fn triple_products() {
        let a = V3([1.0, 2.0, 3.0]);
        let b = V3([-1.0, 0.5, 2.0]);
        let c = V3([4.0, 0.0, -1.0]);

        assert_close!(a.triple_s(&b, &c), b.triple_s(&c, &a));
        assert_close!(a.triple_s(&b, &c), c.triple_s(&a, &b));

        // a × (b × c) = b (a · c) - c (a · b)
        let expected = b * dot(&a, &c) - c * dot(&a, &b);
        assert_close!(expected.0, a.triple_v(&b, &c).0);
    }

    #[test]
    fn angle() {
        assert_close!(PI / 2.0, V2([1.0, 0.0]).angle(&V2([0.0, 1.0])));

        let a: V3 = V3([0.5, 0.0,  0.0]);
        let b: V3 = V3([8.0, 0.0, -8.0]);
        assert_close!(45.0, a.angle(&b).to_degrees());
        assert_close!(45.0, a.angle_to(&b).to_degrees());
    }

    #[test]
    fn angle_of_zero_vector_is_nan() {
        let zero = V3::<f64>::zero();
        assert!(V3([1.0, 0.0, 0.0]).angle(&zero).is_nan());
    }

    #[test]
    fn angle_to_is_clamped() {
        let a = V2::<f64>([1.0, 1e-9]);
        let b = V2([1.0, 1e-9]);
        assert!(!a.angle_to(&b).is_nan());
        assert_close!(abs=1e-7, 0.0, a.angle_to(&b));
    }

    #[test]
    fn distance_and_midpoint() {
        let a = V3([1.0, 1.0, 1.0]);
        let b = V3([3.0, 3.0, 2.0]);
        assert_eq!(a.distance_between(&b), 3.0);
        assert_eq!(a.mid_point(&b), V3([2.0, 2.0, 1.5]));
        assert_eq!(V2([0.0, 0.0]).mid_point(&V2([-1.0, 5.0])), V2([-0.5, 2.5]));
    }

    #[test]
    fn rotate_by_angle() {
        let mut v = V2([1.0, 0.0]);
        v.rotate(PI / 2.0);
        assert_close!(abs=1e-15, [0.0, 1.0], v.0);

        v.rotate(PI);
        assert_close!(abs=1e-15, [0.0, -1.0], v.0);
    }

    #[test]
    fn set_rotation_discards_old_contents() {
        let tol = Tolerances { abs: 1e-15, rel: 0.0 };
        let mut v = V2([7.0, -3.0]);
        v.set_rotation(FRAC_PI_2);
        assert!(v.is_close(&V2([0.0, 1.0]), tol));

        let mut w = V2::zero();
        w.set_rotation(PI).scale(2.0);
        assert!(w.is_close(&V2([-2.0, 0.0]), tol));
    }

    #[test]
    fn rotate_by_matrix() {
        let mut v = V2([2.0, 3.0]);
        v.rotate(crate::mat::from_array([[0.0, -1.0], [1.0, 0.0]]));
        assert_eq!(v, V2([-3.0, 2.0]));
    }

    #[test]
    fn random_unit_norm() {
        for _ in 0..10 {
            assert_close!(abs=1e-10, 1.0, V2::<f64>::random_unit().sqnorm());
            assert_close!(abs=1e-10, 1.0, V3::<f64>::random_unit().sqnorm());
        }
    }

    #[test]
    fn sum() {
        let vs = vec![V2([1.0, 2.0]), V2([3.0, 4.0]), V2([-1.0, 0.5])];
        assert_eq!(vs.iter().sum::<V2>(), V2([3.0, 6.5]));
        assert_eq!(vs.into_iter().sum::<V2>(), V2([3.0, 6.5]));
    }

    #[test]
    fn map() {
        assert_eq!(V3([1.0, 4.0, 9.0]).map(f64::sqrt), V3([1.0, 2.0, 3.0]));
    }
}
