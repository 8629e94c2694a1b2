/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality.
//!
//! `PartialEq` on every type in this crate is exact.  Results of rotations,
//! normalization and inversion should instead be compared with `is_close`,
//! or with `assert_close!` from `eucl-assert-close`.

pub use eucl_assert_close::{CheckClose, CheckCloseError, Tolerances};

use crate::traits::Field;
use crate::types::*;

/// Row-major view of every scalar in a value.
trait Scalars<X> {
    fn scalars(&self) -> &[X];
}

gen_each!{
    [{V2} {V3} {V4} {Quat}]
    impl_scalars_vec!( {$T:ident} ) => {
        impl<X: Field> Scalars<X> for $T<X> {
            #[inline(always)]
            fn scalars(&self) -> &[X] { &self.0[..] }
        }
    }
}

gen_each!{
    [{M22} {M33} {M44}]
    impl_scalars_mat!( {$T:ident} ) => {
        impl<X: Field> Scalars<X> for $T<X> {
            #[inline(always)]
            fn scalars(&self) -> &[X] { self.elements() }
        }
    }
}

fn check_flat<X: Field>(a: &[X], b: &[X], tol: Tolerances) -> Result<(), CheckCloseError>
{
    a.iter().zip(b)
        .try_for_each(|(a, b)| a.to_f64().check_close(&b.to_f64(), tol))
}

gen_each!{
    [{V2} {V3} {V4} {M22} {M33} {M44} {Quat}]
    impl_check_close!( {$T:ident} ) => {
        // Comparison is done in f64 regardless of the scalar type.
        impl<X: Field> CheckClose for $T<X> {
            type Scalar = f64;

            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            { check_flat(self.scalars(), other.scalars(), tol) }
        }

        impl<X: Field> $T<X> {
            /// Test every element for approximate equality with the matching
            /// element of `other`.
            #[inline]
            pub fn is_close(&self, other: &Self, tol: Tolerances) -> bool
            { self.check_close(other, tol).is_ok() }
        }
    }
}
