/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Free reinterpretation between plain arrays and the vector types.
//!
//! Point data often arrives as `&[[f64; 3]]` or `Vec<[f64; 2]>`.  `envee`
//! views it as vectors without copying, and `unvee` goes the other way.
//!
//! ```
//! use eucl::{V2, Envee, Unvee};
//!
//! let mut points = vec![[0.0, 0.0], [3.0, 4.0]];
//! assert_eq!(points[..].envee_ref()[1].norm(), 5.0);
//!
//! points[..].envee_mut()[0] += V2([1.0, 1.0]);
//! assert_eq!(points[0], [1.0, 1.0]);
//!
//! let vs: Vec<V2> = points.envee();
//! assert_eq!(vs.unvee(), vec![[1.0, 1.0], [3.0, 4.0]]);
//! ```

use std::mem;

use crate::types::{V2, V3, V4};

macro_rules! reinterpret_trait {
    (
        $(#[$meta:meta])*
        trait $Trait:ident {
            type $Out:ident;
            fn $by_value:ident, $by_ref:ident, $by_mut:ident;
        }
    ) => {
        $(#[$meta])*
        ///
        /// # Safety
        ///
        /// `Self` and `Self::Out` must have identical layout, and references to
        /// them must be interchangeable.  Every vector type is `repr(transparent)`
        /// over its array, which is what the impls in this module rely on.
        pub unsafe trait $Trait {
            type $Out: ?Sized;

            /// Reinterpret by value.
            #[inline(always)]
            fn $by_value(self) -> Self::$Out
            where Self: Sized, Self::$Out: Sized
            { unsafe { mem::transmute_copy(&mem::ManuallyDrop::new(self)) } }

            /// Reinterpret behind a shared reference.
            #[inline(always)]
            fn $by_ref(&self) -> &Self::$Out { self.$by_value() }

            /// Reinterpret behind a mutable reference.
            #[inline(always)]
            fn $by_mut(&mut self) -> &mut Self::$Out { self.$by_value() }
        }

        unsafe impl<'a, T: $Trait + ?Sized> $Trait for &'a T { type $Out = &'a T::$Out; }
        unsafe impl<'a, T: $Trait + ?Sized> $Trait for &'a mut T { type $Out = &'a mut T::$Out; }
    };
}

reinterpret_trait!{
    /// Arrays (or collections of arrays) that can be viewed as `V2`/`V3`/`V4`.
    trait Envee {
        type En;
        fn envee, envee_ref, envee_mut;
    }
}

reinterpret_trait!{
    /// `V2`/`V3`/`V4`s (or collections of them) that can be viewed as arrays.
    trait Unvee {
        type Un;
        fn unvee, unvee_ref, unvee_mut;
    }
}

gen_each!{
    @{Vn_n}
    impl_for_collections!( {$Vn:ident $n:tt} ) => {
        unsafe impl<X> Envee for [[X; $n]] { type En = [$Vn<X>]; }
        unsafe impl<X> Unvee for [$Vn<X>] { type Un = [[X; $n]]; }

        // Vec<T> is layout-compatible with Vec<U> when T and U are.
        unsafe impl<X> Envee for Vec<[X; $n]> { type En = Vec<$Vn<X>>; }
        unsafe impl<X> Unvee for Vec<$Vn<X>> { type Un = Vec<[X; $n]>; }
    }
}

// Fixed-length lists of rows, as used by the square matrices.
gen_each!{
    @{Vn_n}
    [{2} {3} {4}]
    impl_for_rows!( {$Vn:ident $n:tt} {$rows:tt} ) => {
        unsafe impl<X> Envee for [[X; $n]; $rows] { type En = [$Vn<X>; $rows]; }
        unsafe impl<X> Unvee for [$Vn<X>; $rows] { type Un = [[X; $n]; $rows]; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows() {
        let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let vs: [V3; 2] = rows.envee();
        assert_eq!(vs, [V3([1.0, 2.0, 3.0]), V3([4.0, 5.0, 6.0])]);
        assert_eq!(vs.unvee(), rows);
        assert_eq!(vs.unvee_ref()[1][2], 6.0);
    }

    #[test]
    fn slices_borrow_in_place() {
        let mut data = vec![[1.0, 2.0, 3.0, 4.0]; 3];
        data[..].envee_mut()[2].scale(2.0);
        assert_eq!(data[2], [2.0, 4.0, 6.0, 8.0]);
        assert_eq!(data[..].envee_ref()[0], V4([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn vecs() {
        let vs = vec![V2([1.0, 0.0]), V2([0.0, 1.0])];
        let arrays: Vec<[f64; 2]> = vs.unvee();
        assert_eq!(arrays, vec![[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(arrays.envee(), vec![V2([1.0, 0.0]), V2([0.0, 1.0])]);
    }
}
