/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The value types.  Each one is a `repr(transparent)` newtype around a
//! fixed-size array, and is `Copy`.  Equality is exact.

use std::ops::{Deref, DerefMut};
use std::slice;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

macro_rules! array_newtypes {
    ($( $(#[$meta:meta])* $Cn:ident<$T:ident $(= $Default:ty)*>([$n:tt]); )+) => {$(
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $Cn<$T $(= $Default)*>(pub [$T; $n]);
    )+};
}

array_newtypes!{
    /// A 2D vector `(x, y)`.
    V2<X = f64>([2]);
    /// A 3D vector `(x, y, z)`.
    V3<X = f64>([3]);
    /// A 4D vector `(x, y, z, w)`.
    ///
    /// With `w = 1` this is a point in homogeneous coordinates; with `w = 0`
    /// it is a direction.
    V4<X = f64>([4]);

    /// A matrix of 2 rows.  Use it through the alias `M22`.
    ///
    /// The rows are vectors, so the scalars of an `M22` sit in memory exactly
    /// like a flat row-major `[X; 4]`.
    M2<V>([2]);
    /// A matrix of 3 rows.  Use it through the alias `M33`.
    M3<V>([3]);
    /// A matrix of 4 rows.  Use it through the alias `M44`.
    M4<V>([4]);

    /// A quaternion `q0 + q1 i + q2 j + q3 k`.
    ///
    /// Element 0 is the scalar (real) part, and elements 1 through 3
    /// are the vector part.
    Quat<X = f64>([4]);
}

/// A 2x2 matrix, used for rotating and scaling `V2`s.
pub type M22<X=f64> = M2<V2<X>>;
/// A 3x3 matrix.  Doubles as a 2D affine transform acting on `V3([x, y, 1.0])`.
pub type M33<X=f64> = M3<V3<X>>;
/// A 4x4 matrix.  Doubles as a 3D affine transform acting on `V4([x, y, z, 1.0])`.
pub type M44<X=f64> = M4<V4<X>>;

// ---------------------------------------------------------------------------
// Array-like behavior.

gen_each!{
    [
        {V2 X 2} {V3 X 3} {V4 X 4}
        {M2 V 2} {M3 V 3} {M4 V 4}
        {Quat X 4}
    ]
    impl_array_like!( {$Cn:ident $T:ident $n:tt} ) => {
        // Indexing and slicing come from here.
        impl<$T> Deref for $Cn<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &[$T; $n] { &self.0 }
        }

        impl<$T> DerefMut for $Cn<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut [$T; $n] { &mut self.0 }
        }

        impl<$T> From<[$T; $n]> for $Cn<$T> {
            #[inline(always)]
            fn from(array: [$T; $n]) -> Self { $Cn(array) }
        }

        impl<'a, $T> IntoIterator for &'a $Cn<$T> {
            type Item = &'a $T;
            type IntoIter = slice::Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter { self.0.iter() }
        }

        impl<'a, $T> IntoIterator for &'a mut $Cn<$T> {
            type Item = &'a mut $T;
            type IntoIter = slice::IterMut<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
        }

        // Prints the bare array.  A matrix comes out as `[[1.0, 0.0], [0.0, 1.0]]`.
        impl<$T: fmt::Debug> fmt::Debug for $Cn<$T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}
