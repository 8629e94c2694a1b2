/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size square matrix types, compatible with `V2`/`V3`/`V4`
//!
//! Matrices are containers of row-vectors, which means that the scalars of
//! a matrix form one flat row-major sequence (see `elements`).  Vectors
//! multiplied by a matrix are column vectors on the right (`&m * v`).

use std::fmt;

use itertools::iproduct;
use num_traits::{Zero, One};
use slice_of_array::prelude::*;

use crate::traits::Field;
use crate::types::*;
use crate::conv::{Envee, Unvee};
use crate::errors::TooManyElementsError;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
///
/// The size comes from type inference; `M33::from_fn` and friends
/// name it explicitly.
#[inline(always)]
pub fn from_fn<M: FromFn<F>, B, F>(f: F) -> M
where F: FnMut(usize, usize) -> B,
{ FromFn::from_fn(f) }

/// Construct a matrix from an array of rows.
///
/// The matrix type follows from the array type, so no annotation is needed.
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// The identity matrix, of an inferred size.
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// The zero matrix, of an inferred size.
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

/// Matrix inverse.
#[inline(always)]
pub fn inv<M: Inv>(m: &M) -> M
{ Inv::inv(m) }

/// A location in a matrix, either as an index into the flat row-major
/// sequence of elements, or as a `(column, row)` pair.
///
/// Most methods take `impl Into<Position>`, so a plain `usize`, a `[col, row]`
/// array or a `(col, row)` tuple may be used directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Flat(usize),
    Grid { col: usize, row: usize },
}

impl From<usize> for Position {
    #[inline(always)]
    fn from(index: usize) -> Self { Position::Flat(index) }
}

impl From<[usize; 2]> for Position {
    #[inline(always)]
    fn from([col, row]: [usize; 2]) -> Self { Position::Grid { col, row } }
}

impl From<(usize, usize)> for Position {
    #[inline(always)]
    fn from((col, row): (usize, usize)) -> Self { Position::Grid { col, row } }
}

impl Position {
    /// Resolve to an index into the flat elements of a `dim x dim` matrix.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside of the matrix.
    pub fn flat_index(self, dim: usize) -> usize {
        match self {
            Position::Flat(index) => {
                assert!(index < dim * dim, "Invalid index for {}x{} matrix: {}", dim, dim, index);
                index
            },
            Position::Grid { col, row } => {
                assert!(
                    col < dim && row < dim,
                    "Invalid position for {}x{} matrix: (col {}, row {})", dim, dim, col, row,
                );
                row * dim + col
            },
        }
    }
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_square_inherent!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X> $Mnn<X> {
            /// Construct a matrix from a function on indices `(row, col)`.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { FromFn::from_fn(f) }

            /// Elementwise conversion into a matrix of another scalar.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Mnn<B>
            where X: Copy, F: FnMut(X) -> B,
            { <$Mnn<B>>::from_fn(|r, c| f(self[r][c])) }

            /// Cast into a plain `[[X; n]; n]`.
            #[inline(always)]
            pub fn into_array(self) -> [[X; $n]; $n]
            { self.0.unvee() }

            /// Cast into a plain `&[[X; n]; n]`.
            #[inline(always)]
            pub fn as_array(&self) -> &[[X; $n]; $n]
            { self.0.unvee_ref() }

            /// Map a `(col, row)` pair to its index in `elements()`, i.e. `row * n + col`.
            #[inline(always)]
            pub fn convert_2d(col: usize, row: usize) -> usize
            { row * $n + col }

            /// The flat row-major sequence of all elements.
            #[inline(always)]
            pub fn elements(&self) -> &[X]
            { self.0[..].flat() }

            #[inline(always)]
            fn elements_mut(&mut self) -> &mut [X]
            { self.0[..].flat_mut() }
        }

        impl<X: Field> $Mnn<X> {
            /// The identity matrix.
            #[inline(always)]
            pub fn eye() -> Self
            { One::one() }

            /// The matrix of all zeros.
            #[inline(always)]
            pub fn zero() -> Self
            { Zero::zero() }

            /// Construct a matrix from up to `n * n` values in row-major order.
            ///
            /// Any elements past the end of `values` are zero.
            pub fn from_slice(values: &[X]) -> Result<Self, TooManyElementsError>
            {
                if values.len() > $n * $n {
                    debug!("rejected {} values for a {}x{} matrix", values.len(), $n, $n);
                    return Err(TooManyElementsError::new($n, values.len()));
                }
                let mut out = Self::zero();
                out.elements_mut()[..values.len()].copy_from_slice(values);
                Ok(out)
            }

            /// Read the element at a position.
            ///
            /// # Panics
            ///
            /// Panics if the position lies outside of the matrix.
            #[inline]
            pub fn value(&self, position: impl Into<Position>) -> X
            { self.elements()[position.into().flat_index($n)] }

            /// Overwrite the element at a position.
            ///
            /// # Panics
            ///
            /// Panics if the position lies outside of the matrix.
            #[inline]
            pub fn set_value(&mut self, value: X, position: impl Into<Position>) -> &mut Self
            {
                let index = position.into().flat_index($n);
                self.elements_mut()[index] = value;
                self
            }

            /// Overwrite the matrix with the identity.
            #[inline]
            pub fn load_identity(&mut self) -> &mut Self
            {
                *self = Self::eye();
                self
            }

            /// Overwrite the matrix with zeros.
            #[inline]
            pub fn load_zero(&mut self) -> &mut Self
            {
                *self = Self::zero();
                self
            }

            /// Transpose the matrix in place.
            ///
            /// Use `t()` to get a transposed copy instead.
            #[inline]
            pub fn transpose(&mut self) -> &mut Self
            {
                let elements = self.elements_mut();
                for (r, c) in iproduct!(0..$n, 0..$n).filter(|&(r, c)| r < c) {
                    elements.swap(r * $n + c, c * $n + r);
                }
                self
            }

            /// Matrix transpose.
            #[inline]
            pub fn t(&self) -> Self
            { Self::from_fn(|r, c| self[c][r]) }

            /// Multiply every element by a scalar, in place.
            #[inline]
            pub fn mul_scalar(&mut self, scalar: X) -> &mut Self
            {
                for x in self.elements_mut() {
                    *x = *x * scalar;
                }
                self
            }

            /// Divide every element by a scalar, in place.
            ///
            /// Dividing by zero is not checked, and produces infinities or NaNs.
            #[inline]
            pub fn div_scalar(&mut self, scalar: X) -> &mut Self
            {
                for x in self.elements_mut() {
                    *x = *x / scalar;
                }
                self
            }

            /// Matrix determinant.
            #[inline(always)]
            pub fn det(&self) -> X
            { Det::det(self) }

            /// Right-aligned, width-matched rendering of the matrix, for debugging.
            ///
            /// ```
            /// # use eucl::M22;
            /// let m = M22::from_slice(&[1.0, 20.0, -3.0]).unwrap();
            /// assert_eq!(m.grid().to_string(), "|  1 20 |\n| -3  0 |\n");
            /// ```
            #[inline]
            pub fn grid(&self) -> Grid<'_, X>
            { Grid { elements: self.elements(), dim: $n } }
        }
    }
}

impl<X: Field> M22<X> {
    /// Matrix inverse.
    ///
    /// Singular matrices are not detected, and produce infinities or NaNs.
    #[inline(always)]
    pub fn inv(&self) -> Self
    { Inv::inv(self) }
}

impl<X: Field> M33<X> {
    /// Matrix inverse.
    ///
    /// Singular matrices are not detected, and produce infinities or NaNs.
    #[inline(always)]
    pub fn inv(&self) -> Self
    { Inv::inv(self) }
}

/// Display adapter returned by `grid()`.
///
/// Each row is printed as `| a b c |` on its own line, with every element
/// right-aligned to the width of the widest one.  A precision given in the
/// format string (`{:.3}`) is applied to every element.
#[derive(Debug, Copy, Clone)]
pub struct Grid<'a, X> {
    elements: &'a [X],
    dim: usize,
}

impl<'a, X: fmt::Display> fmt::Display for Grid<'a, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings: Vec<String> = match f.precision() {
            Some(prec) => self.elements.iter().map(|x| format!("{:.*}", prec, x)).collect(),
            None => self.elements.iter().map(|x| x.to_string()).collect(),
        };
        let width = strings.iter().map(|s| s.chars().count()).max().unwrap_or(0);

        for row in strings.chunks(self.dim) {
            write!(f, "| ")?;
            for s in row {
                write!(f, "{:>width$} ", s, width = width)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

/// Marker for the square matrix types.
///
/// > **_Fuggedaboudit._**
///
/// Keeps `mat::eye` and `mat::zero` from inferring some other `One`/`Zero` type.
pub trait IsMatrix: Sized { }

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_is_matrix!( {$Mnn:ident $Mn:ident $Vn:ident $n:tt} ) => {
        impl<X> IsMatrix for $Mnn<X> { }
    }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_num_zero!( {$Mnn:ident $Mn:ident $Vn:ident $n:tt} ) => {
        impl<X: Field> Zero for $Mnn<X> {
            #[inline]
            fn zero() -> Self
            { from_array([[X::zero(); $n]; $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.elements().iter().all(|x| x.is_zero()) }
        }

        impl<X: Field> One for $Mnn<X> {
            #[inline]
            fn one() -> Self
            { from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_from_fn!( {$Mnn:ident $Mn:ident $Vn:ident $n:tt} ) => {
        impl<X, F> FromFn<F> for $Mnn<X>
          where F: FnMut(usize, usize) -> X,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                $Mn(<$Vn<_>>::from_fn(|r| {
                    <$Vn<_>>::from_fn(|c| f(r, c))
                }).0)
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_array`.
///
/// > **_Fuggedaboudit._**
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_into_matrix!( {$Mnn:ident $Mn:ident $Vn:ident $n:tt} ) => {
        impl<X> IntoMatrix for [[X; $n]; $n] {
            type Matrix = $Mnn<X>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mn(self.envee()) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{M22,M33,M44}::det`.
///
/// > **_Fuggedaboudit._**
pub trait Det {
    type Output;

    fn det(&self) -> Self::Output;
}

impl<T: Field> Det for M22<T> {
    type Output = T;

    fn det(&self) -> T {
        let [[a, b], [c, d]] = *self.as_array();
        a * d - b * c
    }
}

impl<T: Field> Det for M33<T> {
    type Output = T;

    fn det(&self) -> T {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = *self.as_array();

        T::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
     }
}

// cofactor expansion along the first row
impl<T: Field> Det for M44<T> {
    type Output = T;

    fn det(&self) -> T {
        (0..4).fold(T::zero(), |acc, skip| {
            let minor = M33::from_fn(|r, c| self[r + 1][if c < skip { c } else { c + 1 }]);
            let term = self[0][skip] * minor.det();
            match skip % 2 {
                0 => acc + term,
                _ => acc - term,
            }
        })
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{M22,M33}::inv`.
///
/// > **_Fuggedaboudit._**
pub trait Inv {
    fn inv(&self) -> Self;
}

impl<T: Field> Inv for M22<T> {
    fn inv(&self) -> Self {
        let [[a, b], [c, d]] = *self.as_array();
        let det = self.det();
        from_array([
            [ d / det, -b / det],
            [-c / det,  a / det],
        ])
    }
}

impl<T: Field> Inv for M33<T> {
    fn inv(&self) -> Self {
        let cofactors: M33<T> = from_fn(|r, c|
            T::zero()
            + self[(r+1) % 3][(c+1) % 3] * self[(r+2) % 3][(c+2) % 3]
            - self[(r+1) % 3][(c+2) % 3] * self[(r+2) % 3][(c+1) % 3]
        );
        let det = cofactors[0].dot(&self[0]);
        let rdet = T::one() / det;
        M33::from_fn(|r, c| rdet * cofactors[c][r])
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_eye() {
        assert_eq!(from_array([[0.0, 0.0], [0.0, 0.0]]), M22::zero());
        assert_eq!(from_array([[1.0, 0.0], [0.0, 1.0]]), M22::eye());
        assert_eq!(from_array([[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]), M33::zero());
        assert_eq!(from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]), M33::eye());
        assert_eq!(M44::<f64>::eye().elements(), &[
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert!(M44::<f64>::zero().is_zero());
        assert!(!from_array([[0.0, 1.0], [0.0, 0.0]]).is_zero());
    }

    #[test]
    fn from_slice_zero_fills() {
        let m = M33::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.elements(), &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(M22::<f64>::from_slice(&[]).unwrap(), M22::zero());
    }

    #[test]
    fn from_slice_too_many() {
        let err = M22::from_slice(&[1.0; 5]).unwrap_err();
        assert_eq!((err.dim, err.capacity, err.supplied), (2, 4, 5));
        assert_eq!(
            err.to_string(),
            "A 2x2 matrix takes at most 4 elements, but 5 were supplied.",
        );
        assert!(M44::from_slice(&[0.0; 16]).is_ok());
        assert!(M44::from_slice(&[0.0; 17]).is_err());
    }

    #[test]
    fn elements_are_row_major() {
        let m = from_array([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(m.elements(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(M33::from_slice(m.elements()).unwrap(), m);
        assert_eq!(m.into_array()[1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn convert_2d() {
        assert_eq!(M33::<f64>::convert_2d(0, 1), 3);
        assert_eq!(M33::<f64>::convert_2d(2, 1), 5);
        assert_eq!(M44::<f64>::convert_2d(3, 3), 15);
        assert_eq!(M22::<f64>::convert_2d(1, 0), 1);
    }

    #[test]
    fn set_value() {
        let mut m = M33::zero();
        m.set_value(1.0, 4)
            .set_value(2.0, [2, 0])
            .set_value(3.0, (0, 2));
        assert_eq!(m, from_array([
            [0.0, 0.0, 2.0],
            [0.0, 1.0, 0.0],
            [3.0, 0.0, 0.0],
        ]));
        assert_eq!(m.value([2, 0]), 2.0);
        assert_eq!(m.value(6), 3.0);
    }

    #[test]
    #[should_panic(expected = "Invalid position")]
    fn set_value_out_of_range() {
        M22::zero().set_value(1.0, [2, 0]);
    }

    #[test]
    #[should_panic(expected = "Invalid index")]
    fn value_out_of_range() {
        let _ = M33::<f64>::zero().value(9);
    }

    #[test]
    fn load_identity_and_zero() {
        let mut m = from_array([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(*m.load_identity(), M22::eye());
        assert_eq!(*m.load_zero(), M22::zero());
    }

    #[test]
    fn transpose() {
        let mut m2 = from_array([[1.0, 2.0], [3.0, 4.0]]);
        m2.transpose();
        assert_eq!(m2, from_array([[1.0, 3.0], [2.0, 4.0]]));

        let m3 = from_array([
            [0.0, 1.0, 2.0],
            [3.0, 4.0, 5.0],
            [6.0, 7.0, 8.0],
        ]);
        let mut transposed = m3;
        transposed.transpose();
        assert_eq!(transposed, from_array([
            [0.0, 3.0, 6.0],
            [1.0, 4.0, 7.0],
            [2.0, 5.0, 8.0],
        ]));
        assert_eq!(transposed, m3.t());

        let m4 = M44::from_fn(|r, c| (4 * r + c) as f64);
        let mut transposed = m4;
        transposed.transpose().transpose();
        assert_eq!(transposed, m4);
        transposed.transpose();
        assert_eq!(transposed, M44::from_fn(|r, c| (4 * c + r) as f64));
    }

    #[test]
    fn scalar_in_place() {
        let mut m = from_array([[1.0, 2.0], [3.0, 4.0]]);
        m.mul_scalar(3.0).div_scalar(2.0);
        assert_eq!(m, from_array([[1.5, 3.0], [4.5, 6.0]]));
    }

    #[test]
    fn test_det() {
        assert_eq!(from_array([[7.0, 2.0], [-11.0, 4.0]]).det(), 50.0);
        assert_eq!(from_array([
            [1.0, 2.0, 4.0],
            [5.0, 2.0, 1.0],
            [3.0, 6.0, 3.0],
        ]).det(), 72.0);
        assert_eq!(M44::<f64>::eye().det(), 1.0);
        assert_eq!(from_array([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ]).det(), 12.0);
    }

    #[test]
    fn test_inverse_2() {
        let actual = inv(&from_array([[7., 2.], [-11., 4.]]));
        let expected = from_array([
            [ 2./25., -1./25.],
            [11./50.,  7./50.],
        ]);

        assert_close!(abs=1e-12, expected.into_array(), actual.into_array());
    }

    #[test]
    fn test_inverse_3() {
        let m = from_array([
            [1., 2., 4.],
            [5., 2., 1.],
            [3., 6., 3.],
        ]);

        let expected = from_array([
            [ 0./1.,  1./4., -1./12.],
            [-1./6., -1./8., 19./72.],
            [ 1./3.,  0./1., -1./9. ],
        ]);

        assert_close!(abs=1e-12, expected.into_array(), m.inv().into_array());
        assert_close!(abs=1e-12, M33::eye().into_array(), (&m * &m.inv()).into_array());
    }

    #[test]
    fn grid() {
        let m = from_array([
            [1.0, -2.5, 0.0],
            [10.0, 3.0, 4.0],
            [0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.grid().to_string(), "\
|    1 -2.5    0 |
|   10    3    4 |
|    0    0    1 |
");
        assert_eq!(format!("{:.1}", M22::<f64>::eye().grid()), "\
| 1.0 0.0 |
| 0.0 1.0 |
");
    }
}
