/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operator impls.  Every operator produces a new value; the `*Assign`
//! forms overwrite the left operand.

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use crate::traits::Field;
use crate::vee;
use crate::mat;
use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// Both operands have the same type.  `V2 + V3` does not compile.
gen_each!{
    @{Vn}
    @{ref_a}
    @{ref_b}
    impl_v_add_sub!(
        {$Vn:ident}
        {[$($la:lifetime)?] [$($ra:tt)*]}
        {[$($lb:lifetime)?] [$($rb:tt)*]}
    ) => {
        // vector + vector
        impl<$($la,)? $($lb,)? X: Field> Add<$($rb)* $Vn<X>> for $($ra)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, other: $($rb)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($la,)? $($lb,)? X: Field> Sub<$($rb)* $Vn<X>> for $($ra)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, other: $($rb)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] - other[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    @{ref_a}
    impl_v_unops!(
        {$Vn:ident}
        {[$($la:lifetime)?] [$($ra:tt)*]}
    ) => {
        // -vector
        impl<$($la,)? X: Field> Neg for $($ra)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { vee::from_fn(|k| -self.0[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar * vector
gen_each!{
    @{Vn}
    // `impl<X: Field> Mul<V2<X>> for X` is not allowed by the orphan rules,
    // so there is one impl per scalar type.
    @{field}
    @{ref_a}
    impl_v_scalar_ops!(
        {$Vn:ident}
        {$X:ty}
        {[$($la:lifetime)?] [$($ra:tt)*]}
    ) => {
        impl<$($la)?> Mul<$($ra)* $Vn<$X>> for $X {
            type Output = $Vn<$X>;

            #[inline(always)]
            fn mul(self, vector: $($ra)* $Vn<$X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{Vn}
    @{ref_a}
    impl_v_scalar_ops!(
        {$Vn:ident}
        {[$($la:lifetime)?] [$($ra:tt)*]}
    ) => {
        // vector * scalar
        impl<$($la,)? X: Field> Mul<X> for $($ra)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        impl<$($la,)? X: Field> Div<X> for $($ra)* $Vn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    @{Mnn_Mn_Vn_n}
    @{ref_a}
    @{ref_b}
    impl_m_m_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        {[$($la:lifetime)?] [$($ra:tt)*]}
        {[$($lb:lifetime)?] [$($rb:tt)*]}
    ) => {
        // matrix + matrix
        impl<$($la,)? $($lb,)? X: Field> Add<$($rb)* $Mnn<X>> for $($ra)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn add(self, other: $($rb)* $Mnn<X>) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        // matrix - matrix
        impl<$($la,)? $($lb,)? X: Field> Sub<$($rb)* $Mnn<X>> for $($ra)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn sub(self, other: $($rb)* $Mnn<X>) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] - other[r][c]) }
        }

        // matrix * matrix
        impl<$($la,)? $($lb,)? X: Field> Mul<$($rb)* $Mnn<X>> for $($ra)* $Mnn<X> {
            type Output = $Mnn<X>;

            #[inline]
            fn mul(self, other: $($rb)* $Mnn<X>) -> Self::Output {
                mat::from_fn(|r, c| {
                    (1..$n).fold(self[r][0] * other[0][c], |s, i| s + self[r][i] * other[i][c])
                })
            }
        }

        // matrix * column vector
        impl<$($la,)? $($lb,)? X: Field> Mul<$($rb)* $Vn<X>> for $($ra)* $Mnn<X> {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, vector: $($rb)* $Vn<X>) -> Self::Output {
                vee::from_fn(|r| {
                    (1..$n).fold(self[r][0] * vector[0], |s, i| s + self[r][i] * vector[i])
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

gen_each!{
    @{Mnn_Mn_Vn_n}
    @{field}
    @{ref_a}
    impl_m_scalar_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        {$X:ty}
        {[$($la:lifetime)?] [$($ra:tt)*]}
    ) => {
        // One impl per scalar type.  A generic `Mul<X>` would overlap
        // with `Mul<V3<X>>` and `Mul<M33<X>>` as far as coherence can tell.

        // matrix * scalar
        impl<$($la)?> Mul<$X> for $($ra)* $Mnn<$X> {
            type Output = $Mnn<$X>;

            #[inline]
            fn mul(self, scalar: $X) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] * scalar) }
        }

        // scalar * matrix
        impl<$($la)?> Mul<$($ra)* $Mnn<$X>> for $X {
            type Output = $Mnn<$X>;

            #[inline(always)]
            fn mul(self, matrix: $($ra)* $Mnn<$X>) -> Self::Output
            { matrix * self }
        }

        // matrix / scalar
        impl<$($la)?> Div<$X> for $($ra)* $Mnn<$X> {
            type Output = $Mnn<$X>;

            #[inline]
            fn div(self, scalar: $X) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// compound assignment, for any `&T op B` that produces a `T`

gen_each!{
    [
        {V2 X} {V3 X} {V4 X}
        {M2 V} {M3 V} {M4 V}
        {Quat X}
    ]
    impl_assign_ops!(
        {$Cn:ident $T:ident}
    ) => {
        // vector += vector;
        // matrix += matrix;
        // quat += quat;
        impl<$T, B> AddAssign<B> for $Cn<$T> where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B) {
                let value = Add::add(&*self, rhs);
                *self = value;
            }
        }

        // vector -= vector;
        // matrix -= matrix;
        impl<$T, B> SubAssign<B> for $Cn<$T> where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B) {
                let value = Sub::sub(&*self, rhs);
                *self = value;
            }
        }

        // vector *= scalar;
        // matrix *= scalar;
        // matrix *= matrix;   (right-multiplication)
        // quat *= quat;       (right-multiplication)
        impl<$T, B> MulAssign<B> for $Cn<$T> where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B) {
                let value = Mul::mul(&*self, rhs);
                *self = value;
            }
        }

        // vector /= scalar;
        // matrix /= scalar;
        impl<$T, B> DivAssign<B> for $Cn<$T> where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B) {
                let value = Div::div(&*self, rhs);
                *self = value;
            }
        }
    }
}

// ---------------------------------------------------------------------------

// `[a, b, c]`, with the formatter options (precision and so on) applied to each element.
gen_each!{
    [
        {V2 X} {V3 X} {V4 X}
        {M2 V} {M3 V} {M4 V}
        {Quat X}
    ]
    [
        {Display} {LowerExp} {UpperExp}
    ]
    impl_fmt!(
        {$Cn:ident $T:ident}
        {$Format:ident}
    ) => {
        impl<$T: fmt::$Format> fmt::$Format for $Cn<$T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, x) in self.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::$Format::fmt(x, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_add_sub() {
        let a = V3([1.0, 2.0, 3.0]);
        let b = V3([0.5, -1.0, 4.0]);
        assert_eq!(a + b, V3([1.5, 1.0, 7.0]));
        assert_eq!(&a - &b, V3([0.5, 3.0, -1.0]));
        assert_eq!(a + V3::zero(), a);

        let mut c = a;
        c += &b;
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn vec_scalar() {
        let v = V2([1.0, -2.0]);
        assert_eq!(v * 3.0, V2([3.0, -6.0]));
        assert_eq!(3.0 * v, V2([3.0, -6.0]));
        assert_eq!(&v / 2.0, V2([0.5, -1.0]));
        assert_eq!(-v, V2([-1.0, 2.0]));
        // the operators never touch their operands
        assert_eq!(v, V2([1.0, -2.0]));
    }

    #[test]
    fn mat_mat() {
        let eye3 = M33::eye();

        let a = mat::from_array([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);

        let b = mat::from_array([
            [1.0,  1.0, 0.0],
            [1.0, -1.0, 0.0],
            [0.0,  1.0, 2.0],
        ]);

        let a_dot_b = mat::from_array([
            [3.0, 2.0, 6.0],
            [9.0, 5.0, 12.0],
            [15.0, 8.0, 18.0],
        ]);

        assert_eq!(a, &eye3 * &a);
        assert_eq!(a, a * eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_ne!(&a * &b, &b * &a);
    }

    #[test]
    fn mat_vec() {
        let m = mat::from_array([
            [1.0, 2.0],
            [3.0, 4.0],
        ]);
        assert_eq!(V2([-2.0, -2.0]), &m * V2([2.0, -2.0]));

        let m = mat::from_array([
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(V4([2.0, 4.0, 9.0, 1.0]), m * V4([1.0, 2.0, 3.0, 1.0]));
    }

    #[test]
    fn mat_scalar() {
        let m = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 2.0, mat::from_array([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(&m / 2.0, mat::from_array([[0.5, 1.0], [1.5, 2.0]]));

        let mut n = m;
        n *= 2.0;
        n /= 4.0;
        assert_eq!(n, mat::from_array([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn mat_add_sub() {
        let a = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = mat::from_array([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(a + b, mat::from_array([[5.0; 2]; 2]));
        assert_eq!(&a - &a, M22::zero());

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", V3([1.0, 2.5, -3.0])), "[1, 2.5, -3]");
        assert_eq!(format!("{:.2}", V2([1.0, 0.5])), "[1.00, 0.50]");
        assert_eq!(format!("{:?}", V2([1.0, 0.5])), "[1.0, 0.5]");
        assert_eq!(format!("{}", M22::<f64>::eye()), "[[1, 0], [0, 1]]");
    }
}
