/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vectors, square matrices, and quaternions.
//!
//! ```
//! use eucl::{V2, V3, M33};
//!
//! assert_eq!(V2([3.0, 4.0]).magnitude(), 5.0);
//!
//! let mut m = M33::eye();
//! m.translate(5.0, 7.0);
//! assert_eq!(&m * V3([0.0, 0.0, 1.0]), V3([5.0, 7.0, 1.0]));
//! ```
//!
//! Vectors are newtypes around arrays (`V3(pub [X; 3])`), and matrices
//! are arrays of row vectors (`M33 = M3<V3>`), so both can be indexed
//! like the arrays they hold.

#![deny(unused_must_use)]

#[cfg_attr(test, macro_use)]
extern crate eucl_assert_close;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

mod traits;
mod types;
mod conv;
mod errors;
mod methods_v;
mod methods_m;
mod ops;
mod transform;
mod quat;
mod close;

pub use crate::traits::Field;
pub use crate::types::*;
pub use crate::conv::{Envee, Unvee};
pub use crate::errors::TooManyElementsError;
pub use crate::close::{CheckClose, CheckCloseError, Tolerances};

/// Vector free functions and implementation-detail traits.
pub mod vee {
    pub use crate::methods_v::{from_fn, zero, dot, Rotation};
    pub use crate::methods_v::{IsV, ScalarT, FromFn, Dot, RandomUnit};
}

/// Matrix free functions and implementation-detail traits.
pub mod mat {
    pub use crate::methods_m::{from_fn, from_array, eye, zero, inv, Position, Grid};
    pub use crate::methods_m::{IsMatrix, FromFn, IntoMatrix, Det, Inv};
}

pub use crate::vee::{dot, Rotation};
pub use crate::mat::{Position, Grid};
