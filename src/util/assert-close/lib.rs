/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!` and the `CheckClose` trait behind it.
//!
//! ```
//! # use eucl_assert_close::assert_close;
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-3, [1.0, 2.0], [1.0001, 1.9999]);
//! assert_close!(rel=1e-2, abs=0.0, 100.0, 100.5, "custom {}", "message");
//! ```

use failure::Fail;
use std::fmt;

/// Relative tolerance used by `assert_close!` and `Tolerances::default()`.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are approximately equal.
///
/// Tolerances may be given as leading `abs=` and `rel=` arguments; any that
/// are omitted take their values from `Tolerances::default()`.  Arguments
/// after the two values are a panic message, as with `assert_eq!`.
#[macro_export]
macro_rules! assert_close {
    ($($arg:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances::default()] $($arg)*}
    };
}

/// `assert_close!` that only runs with debug assertions on.
#[macro_export]
macro_rules! debug_assert_close {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_close!{$($arg)*}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    (@opts [$tol:expr] abs = $abs:expr, $($rest:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances { abs: $abs, ..$tol }] $($rest)*}
    };
    (@opts [$tol:expr] rel = $rel:expr, $($rest:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances { rel: $rel, ..$tol }] $($rest)*}
    };
    (@opts [$tol:expr] $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close!{@check [$tol] [$a, $b] ["values are not close"]}
    };
    (@opts [$tol:expr] $a:expr, $b:expr, $($msg:tt)+) => {
        $crate::__assert_close!{@check [$tol] [$a, $b] [$($msg)+]}
    };
    (@check [$tol:expr] [$a:expr, $b:expr] [$($msg:tt)+]) => {{
        let (left, right, tol): (_, _, $crate::Tolerances) = (&$a, &$b, $tol);
        if let Err(e) = $crate::CheckClose::check_close(left, right, tol) {
            panic!(
                "{} (abs={}, rel={})\n  left: {:?}\n right: {:?}\n{}",
                format_args!($($msg)+), tol.abs, tol.rel, left, right, e,
            );
        }
    }};
}

/// Test two floats for approximate equality.
///
/// Either tolerance can make the values close; a difference below `abs`
/// is always accepted, so use a nonzero `abs` when comparing against zero.
/// The semantics are those of Python's `math.isclose`.
#[inline]
pub fn is_close(a: f64, b: f64, tol: Tolerances) -> bool {
    assert!(tol.abs >= 0.0 && tol.rel >= 0.0, "negative tolerance: {:?}", tol);

    if a == b {
        // also equal infinities
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        // an infinity would make the relative bound infinite; NaN never compares
        return false;
    }
    let bound = f64::max(tol.abs, tol.rel * f64::max(a.abs(), b.abs()));
    (a - b).abs() < bound
}

/// A pair of values is close if their difference is within *either* tolerance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

/// The first pair of values found to differ.
#[derive(Debug)]
pub struct CheckCloseError<T = f64> {
    pub values: (T, T),
    pub tol: Tolerances<T>,
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = &self.values;
        writeln!(f, "first mismatch:")?;
        writeln!(f, "  left: {:?}", left)?;
        writeln!(f, " right: {:?}", right)?;
        write!(f, "   tol: abs={:?}, rel={:?}", self.tol.abs, self.tol.rel)
    }
}

impl<T: fmt::Debug + Send + Sync + 'static> Fail for CheckCloseError<T> {}

/// Elementwise approximate equality, reporting the first mismatch.
pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar;

    /// Compare every scalar of `self` against the matching one in `other`.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

macro_rules! impl_for_floats {
    ($($F:ident)*) => {$(
        impl CheckClose for $F {
            type Scalar = $F;

            #[inline]
            fn check_close(&self, other: &$F, tol: Tolerances) -> Result<(), CheckCloseError<$F>> {
                match is_close(f64::from(*self), f64::from(*other), tol) {
                    true => Ok(()),
                    false => Err(CheckCloseError {
                        values: (*self, *other),
                        tol: Tolerances { abs: tol.abs as $F, rel: tol.rel as $F },
                    }),
                }
            }
        }
    )*};
}

impl_for_floats!{ f32 f64 }

impl<'a, T: CheckClose + ?Sized> CheckClose for &'a T {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &&'a T, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { T::check_close(self, other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>> {
        assert_eq!(self.len(), other.len(), "check_close: lengths differ");
        self.iter().zip(other).try_for_each(|(a, b)| a.check_close(b, tol))
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn every_argument_form() {
        assert_close!(2.0, 2.0);
        assert_close!(2.0, 2.0,);
        assert_close!(abs=1e-8, 2.0, 2.0);
        assert_close!(rel=1e-8, 2.0, 2.0,);
        assert_close!(rel=1e-8, abs=1e-8, 2.0, 2.0);
        assert_close!(abs=1e-8, rel=1e-8, 2.0, 2.0, "with {}", "message");
        assert_close!(0.5f32, 0.5f32);
        debug_assert_close!(abs=1e-8, 2.0, 2.0);
    }

    #[test]
    fn method_chains_as_operands() {
        #[derive(Debug)]
        struct Always;
        impl Always { fn again(self) -> Always { self } }
        impl CheckClose for Always {
            type Scalar = f64;
            fn check_close(&self, _: &Always, _: Tolerances) -> Result<(), CheckCloseError> { Ok(()) }
        }

        assert_close!(abs=1e-3, Always.again().again(), Always.again());
        debug_assert_close!(rel=1e-3, Always.again(), Always.again().again(),);
        assert_close!(Always.again(), Always, "{}", "message",);
    }

    #[test]
    fn tolerances() {
        let tol = Tolerances::default();
        assert!(is_close(1.0, 1.0 + 1e-12, tol));
        assert!(!is_close(1.0, 1.0 + 1e-6, tol));
        assert!(!is_close(0.0, 1e-300, tol));
        assert!(is_close(0.0, 1e-300, Tolerances { abs: 1e-12, rel: 0.0 }));
        assert!(is_close(std::f64::INFINITY, std::f64::INFINITY, tol));
        assert!(!is_close(std::f64::INFINITY, -std::f64::INFINITY, tol));
        assert!(!is_close(std::f64::INFINITY, 1e300, tol));
        assert!(!is_close(std::f64::NAN, std::f64::NAN, tol));
    }

    #[test]
    #[should_panic(expected = "negative tolerance")]
    fn negative_tolerance() {
        is_close(1.0, 1.0, Tolerances { abs: -1.0, rel: 0.0 });
    }

    #[test]
    fn reports_first_mismatch() {
        let tol = Tolerances::default();
        assert_close!(abs=1e-8, [[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0 + 1e-10]]);

        let err = [[1.0, 2.0], [3.0, 9.0]].check_close(&[[1.0, 2.5], [3.0, 4.0]], tol).unwrap_err();
        assert_eq!(err.values, (2.0, 2.5));

        let err = vec![1.0f32, 2.0].check_close(&vec![1.0, 3.0], tol).unwrap_err();
        assert_eq!(err.values, (2.0f32, 3.0f32));
        assert!(err.to_string().starts_with("first mismatch:"));
    }

    #[test]
    fn mismatch_is_a_failure() {
        let err = 1.0.check_close(&2.0, Tolerances::default()).unwrap_err();
        let err: failure::Error = err.into();
        assert!(err.to_string().contains("left: 1.0"));
        assert!(err.downcast_ref::<CheckCloseError>().is_some());
    }

    #[test]
    #[should_panic(expected = "custom message")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1, "custom {}", "message");
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
