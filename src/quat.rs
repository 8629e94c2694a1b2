/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Quaternions.
//!
//! `p * q` is the Hamilton product, computed as the 4x4 matrix that
//! left-multiplies by `p`, applied to `q` as a 4-vector.

use std::ops::{Add, Sub, Mul, Div};

use num_traits::{Zero, One};

use crate::traits::Field;
use crate::types::*;
use crate::methods_m::from_array;

impl<X> Quat<X> {
    /// Construct from the scalar part `q0` and vector part `(q1, q2, q3)`.
    #[inline(always)]
    pub fn new(q0: X, q1: X, q2: X, q3: X) -> Self
    { Quat([q0, q1, q2, q3]) }

    #[inline(always)]
    pub fn from_v4(v: V4<X>) -> Self
    { Quat(v.0) }

    #[inline(always)]
    pub fn into_v4(self) -> V4<X>
    { V4(self.0) }
}

impl<X: Field> Quat<X> {
    /// The zero quaternion.
    #[inline(always)]
    pub fn zero() -> Self
    { Zero::zero() }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    #[inline(always)]
    pub fn one() -> Self
    { One::one() }

    /// The scalar (real) part `q0`.
    #[inline(always)]
    pub fn scalar(&self) -> X
    { self[0] }

    /// The vector part `(q1, q2, q3)`.
    #[inline(always)]
    pub fn vector(&self) -> V3<X>
    { V3([self[1], self[2], self[3]]) }

    #[inline]
    pub fn conjugate(&self) -> Self
    { Quat([self[0], -self[1], -self[2], -self[3]]) }

    #[inline]
    pub fn sqnorm(&self) -> X
    { self.iter().fold(X::zero(), |acc, &x| acc + x * x) }

    #[inline]
    pub fn norm(&self) -> X
    { self.sqnorm().sqrt() }

    /// Alias of `norm`.
    #[inline(always)]
    pub fn magnitude(&self) -> X
    { self.norm() }

    /// Multiply each component by a scalar, in place.
    ///
    /// Use `q * s` to get a new quaternion instead.
    #[inline]
    pub fn scale(&mut self, scalar: X) -> &mut Self
    {
        for x in &mut self.0 {
            *x = *x * scalar;
        }
        self
    }

    /// Rescale the quaternion in place to have a norm of 1.
    ///
    /// A quaternion of exactly zero norm is left untouched.
    #[inline]
    pub fn unit(&mut self) -> &mut Self
    {
        let norm = self.norm();
        if norm == X::zero() {
            trace!("normalize: left a zero quaternion unchanged");
            return self;
        }
        for x in &mut self.0 {
            *x = *x / norm;
        }
        self
    }

    /// Alias of `unit`.
    #[inline(always)]
    pub fn normalize(&mut self) -> &mut Self
    { self.unit() }

    /// Componentwise addition, in place.  This is also `q += p`.
    #[inline]
    pub fn add_quat(&mut self, other: &Self) -> &mut Self
    {
        *self = &*self + other;
        self
    }

    /// Componentwise subtraction, in place.  This is also `q -= p`.
    #[inline]
    pub fn sub_quat(&mut self, other: &Self) -> &mut Self
    {
        *self = &*self - other;
        self
    }

    /// The matrix `L` such that `L * q` (as a 4-vector) is `self * q`.
    pub fn left_matrix(&self) -> M44<X>
    {
        let [q0, q1, q2, q3] = self.0;
        from_array([
            [q0, -q1, -q2, -q3],
            [q1,  q0, -q3,  q2],
            [q2,  q3,  q0, -q1],
            [q3, -q2,  q1,  q0],
        ])
    }

    /// Generate a random unit quaternion, uniformly distributed over rotations.
    #[inline(always)]
    pub fn random_unit() -> Self
    { Self::random_unit_with(rand::thread_rng()) }

    // K. Shoemake, "Uniform random rotations", Graphics Gems III (1992)
    pub fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        let tau = X::from_f64(2.0 * std::f64::consts::PI);
        let u1 = X::uniform_with(&mut rng, (X::zero(), X::one()));
        let u2 = X::uniform_with(&mut rng, (X::zero(), X::one()));
        let u3 = X::uniform_with(&mut rng, (X::zero(), X::one()));

        let a = (X::one() - u1).sqrt();
        let b = u1.sqrt();
        Quat([
            a * (tau * u2).sin(),
            a * (tau * u2).cos(),
            b * (tau * u3).sin(),
            b * (tau * u3).cos(),
        ])
    }
}

// ---------------------------------------------------------------------------

impl<X> From<V4<X>> for Quat<X> {
    #[inline(always)]
    fn from(v: V4<X>) -> Self { Quat::from_v4(v) }
}

impl<X> From<Quat<X>> for V4<X> {
    #[inline(always)]
    fn from(q: Quat<X>) -> Self { q.into_v4() }
}

impl<X: Field> Zero for Quat<X> {
    #[inline]
    fn zero() -> Self
    { Quat([X::zero(); 4]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(|x| x.is_zero()) }
}

impl<X: Field> One for Quat<X> {
    #[inline]
    fn one() -> Self
    { Quat([X::one(), X::zero(), X::zero(), X::zero()]) }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{ref_a}
    @{ref_b}
    impl_quat_quat_ops!(
        {[$($la:lifetime)?] [$($ra:tt)*]}
        {[$($lb:lifetime)?] [$($rb:tt)*]}
    ) => {
        impl<$($la,)? $($lb,)? X: Field> Add<$($rb)* Quat<X>> for $($ra)* Quat<X> {
            type Output = Quat<X>;

            #[inline]
            fn add(self, other: $($rb)* Quat<X>) -> Self::Output
            { Quat([self[0] + other[0], self[1] + other[1], self[2] + other[2], self[3] + other[3]]) }
        }

        impl<$($la,)? $($lb,)? X: Field> Sub<$($rb)* Quat<X>> for $($ra)* Quat<X> {
            type Output = Quat<X>;

            #[inline]
            fn sub(self, other: $($rb)* Quat<X>) -> Self::Output
            { Quat([self[0] - other[0], self[1] - other[1], self[2] - other[2], self[3] - other[3]]) }
        }

        // Hamilton product
        impl<$($la,)? $($lb,)? X: Field> Mul<$($rb)* Quat<X>> for $($ra)* Quat<X> {
            type Output = Quat<X>;

            #[inline]
            fn mul(self, other: $($rb)* Quat<X>) -> Self::Output
            { Quat::from_v4(&self.left_matrix() * V4(other.0)) }
        }
    }
}

gen_each!{
    @{field}
    @{ref_a}
    impl_quat_scalar_ops!(
        {$X:ty}
        {[$($la:lifetime)?] [$($ra:tt)*]}
    ) => {
        impl<$($la)?> Mul<$X> for $($ra)* Quat<$X> {
            type Output = Quat<$X>;

            #[inline]
            fn mul(self, scalar: $X) -> Self::Output
            {
                let mut out = Quat(self.0);
                out.scale(scalar);
                out
            }
        }

        impl<$($la)?> Mul<$($ra)* Quat<$X>> for $X {
            type Output = Quat<$X>;

            #[inline]
            fn mul(self, quat: $($ra)* Quat<$X>) -> Self::Output
            { quat * self }
        }

        impl<$($la)?> Div<$X> for $($ra)* Quat<$X> {
            type Output = Quat<$X>;

            #[inline]
            fn div(self, scalar: $X) -> Self::Output
            { Quat([self[0] / scalar, self[1] / scalar, self[2] / scalar, self[3] / scalar]) }
        }
    }
}

// ---------------------------------------------------------------------------
