/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementary transformation matrices, and builders that compose them.
//!
//! Vectors are columns on the right of a matrix, so `&m * v` applies `m` to `v`.
//! The builders accumulate by right-multiplication (`self = self * T`), which
//! means that the most recently added transform is the first to act on a vector.
//!
//! `M33` holds 2D affine transforms and `M44` holds 3D affine transforms, with
//! the translation in the last column.
//!
//! ```
//! # use eucl::{M33, V3};
//! let mut m = M33::eye();
//! m.translate(5.0, 7.0).scale(2.0, 2.0);
//!
//! // scaled first, then translated
//! assert_eq!(&m * V3([1.0, 1.0, 1.0]), V3([7.0, 9.0, 1.0]));
//! ```

use crate::traits::Field;
use crate::types::*;
use crate::methods_m::from_array;

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_compose!( {$Mnn:ident $Mn:ident $Vn:ident $n:tt} ) => {
        impl<X: Field> $Mnn<X> {
            /// Right-multiply the matrix by another, in place.
            #[inline]
            pub fn compose(&mut self, transform: &Self) -> &mut Self
            {
                *self = &*self * transform;
                self
            }
        }
    }
}

impl<X: Field> M22<X> {
    /// Counter-clockwise rotation by an angle in radians.
    pub fn rotation(angle: X) -> Self
    {
        let (s, c) = (angle.sin(), angle.cos());
        from_array([
            [c, -s],
            [s,  c],
        ])
    }

    /// Scaling along each axis.
    pub fn scaling(sx: X, sy: X) -> Self
    {
        let o = X::zero();
        from_array([
            [sx,  o],
            [ o, sy],
        ])
    }

    pub fn rotate(&mut self, angle: X) -> &mut Self
    { self.compose(&Self::rotation(angle)) }

    pub fn scale(&mut self, sx: X, sy: X) -> &mut Self
    { self.compose(&Self::scaling(sx, sy)) }
}

impl<X: Field> M33<X> {
    /// 2D translation.
    pub fn translation(dx: X, dy: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        from_array([
            [i, o, dx],
            [o, i, dy],
            [o, o,  i],
        ])
    }

    /// 2D counter-clockwise rotation about the origin by an angle in radians.
    pub fn rotation(angle: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        let (s, c) = (angle.sin(), angle.cos());
        from_array([
            [c, -s, o],
            [s,  c, o],
            [o,  o, i],
        ])
    }

    /// 2D scaling along each axis.
    pub fn scaling(sx: X, sy: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        from_array([
            [sx,  o, o],
            [ o, sy, o],
            [ o,  o, i],
        ])
    }

    /// 2D shear.  `sx` is the amount of `x` added per unit of `y`,
    /// and `sy` is the amount of `y` added per unit of `x`.
    pub fn shearing(sx: X, sy: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        from_array([
            [ i, sx, o],
            [sy,  i, o],
            [ o,  o, i],
        ])
    }

    pub fn translate(&mut self, dx: X, dy: X) -> &mut Self
    { self.compose(&Self::translation(dx, dy)) }

    pub fn rotate(&mut self, angle: X) -> &mut Self
    { self.compose(&Self::rotation(angle)) }

    pub fn scale(&mut self, sx: X, sy: X) -> &mut Self
    { self.compose(&Self::scaling(sx, sy)) }

    pub fn shear(&mut self, sx: X, sy: X) -> &mut Self
    { self.compose(&Self::shearing(sx, sy)) }

    /// Alias of `shear`.
    #[inline(always)]
    pub fn share(&mut self, sx: X, sy: X) -> &mut Self
    { self.shear(sx, sy) }
}

impl<X: Field> M44<X> {
    /// 3D translation.
    pub fn translation(dx: X, dy: X, dz: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        from_array([
            [i, o, o, dx],
            [o, i, o, dy],
            [o, o, i, dz],
            [o, o, o,  i],
        ])
    }

    /// Counter-clockwise rotation about the x axis (taking y towards z).
    pub fn rotation_x(angle: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        let (s, c) = (angle.sin(), angle.cos());
        from_array([
            [i, o,  o, o],
            [o, c, -s, o],
            [o, s,  c, o],
            [o, o,  o, i],
        ])
    }

    /// Counter-clockwise rotation about the y axis (taking z towards x).
    pub fn rotation_y(angle: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        let (s, c) = (angle.sin(), angle.cos());
        from_array([
            [ c, o, s, o],
            [ o, i, o, o],
            [-s, o, c, o],
            [ o, o, o, i],
        ])
    }

    /// Counter-clockwise rotation about the z axis (taking x towards y).
    pub fn rotation_z(angle: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        let (s, c) = (angle.sin(), angle.cos());
        from_array([
            [c, -s, o, o],
            [s,  c, o, o],
            [o,  o, i, o],
            [o,  o, o, i],
        ])
    }

    /// 3D scaling along each axis.
    pub fn scaling(sx: X, sy: X, sz: X) -> Self
    {
        let (o, i) = (X::zero(), X::one());
        from_array([
            [sx,  o,  o, o],
            [ o, sy,  o, o],
            [ o,  o, sz, o],
            [ o,  o,  o, i],
        ])
    }

    pub fn translate(&mut self, dx: X, dy: X, dz: X) -> &mut Self
    { self.compose(&Self::translation(dx, dy, dz)) }

    pub fn rotate_x(&mut self, angle: X) -> &mut Self
    { self.compose(&Self::rotation_x(angle)) }

    pub fn rotate_y(&mut self, angle: X) -> &mut Self
    { self.compose(&Self::rotation_y(angle)) }

    pub fn rotate_z(&mut self, angle: X) -> &mut Self
    { self.compose(&Self::rotation_z(angle)) }

    pub fn scale(&mut self, sx: X, sy: X, sz: X) -> &mut Self
    { self.compose(&Self::scaling(sx, sy, sz)) }
}
