/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// The scalar trait is implemented for a closed set of types, so that adding
// a method to it later is not a breaking change.

pub use self::field::Field;
mod field {
    use super::internal::PrimitiveFloat;

    /// The scalar type of every vector, matrix and quaternion: `f32` or `f64`.
    ///
    /// This trait is sealed.
    pub trait Field: PrimitiveFloat + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

gen_each!{
    @{field}
    impl_field!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

/// The operations that generic code in this crate needs from a scalar.
///
/// These are reachable through `Field`, but the module that holds them
/// is not exported.
#[doc(hidden)]
pub mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};
    use std::fmt;

    pub trait PrimitiveFloat
        : Copy + Default + 'static
        + PartialEq + PartialOrd
        + fmt::Debug + fmt::Display
        + Add<Output=Self> + Sub<Output=Self>
        + Mul<Output=Self> + Div<Output=Self>
        + Neg<Output=Self>
        + num_traits::Zero + num_traits::One
        + std::iter::Sum
    {
        fn from_f64(x: f64) -> Self;
        fn to_f64(self) -> f64;

        #[inline(always)]
        fn two() -> Self { Self::one() + Self::one() }

        fn sqrt(self) -> Self;
        fn acos(self) -> Self;
        fn sin(self) -> Self;
        fn cos(self) -> Self;
        fn min(self, b: Self) -> Self;
        fn max(self, b: Self) -> Self;

        /// A value from the uniform distribution on `[lo, hi)`.
        fn uniform_with(rng: impl rand::Rng, range: (Self, Self)) -> Self;
    }

    gen_each!{
        @{field}
        impl_primitive_float!({$T:ident}) => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn from_f64(x: f64) -> $T { x as $T }
                #[inline(always)] fn to_f64(self) -> f64 { f64::from(self) }

                #[inline(always)] fn sqrt(self) -> $T { $T::sqrt(self) }
                #[inline(always)] fn acos(self) -> $T { $T::acos(self) }
                #[inline(always)] fn sin(self) -> $T { $T::sin(self) }
                #[inline(always)] fn cos(self) -> $T { $T::cos(self) }
                #[inline(always)] fn min(self, b: $T) -> $T { $T::min(self, b) }
                #[inline(always)] fn max(self, b: $T) -> $T { $T::max(self, b) }

                #[inline(always)]
                fn uniform_with(mut rng: impl rand::Rng, (lo, hi): ($T, $T)) -> $T {
                    let alpha: $T = rng.gen();
                    lo + (hi - lo) * alpha
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::internal::PrimitiveFloat;

    #[test]
    fn primitive_float() {
        assert_eq!(<f32 as PrimitiveFloat>::two(), 2.0);
        assert_eq!(PrimitiveFloat::sqrt(16.0f64), 4.0);
        assert_eq!(PrimitiveFloat::to_f64(0.5f32), 0.5);
        assert_eq!(<f32 as PrimitiveFloat>::from_f64(0.25), 0.25);

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x = f64::uniform_with(&mut rng, (-2.0, 3.0));
            assert!(-2.0 <= x && x < 3.0);
        }
    }
}
