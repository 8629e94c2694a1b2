/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Backtrace;

/// A matrix was built from a list with more than `dim * dim` values.
#[derive(Debug, Fail)]
#[fail(display = "A {}x{} matrix takes at most {} elements, but {} were supplied.", dim, dim, capacity, supplied)]
pub struct TooManyElementsError {
    pub dim: usize,
    pub capacity: usize,
    pub supplied: usize,
    backtrace: Backtrace,
}

impl TooManyElementsError {
    pub(crate) fn new(dim: usize, supplied: usize) -> Self
    { TooManyElementsError {
        dim,
        capacity: dim * dim,
        supplied,
        backtrace: Backtrace::new(),
    }}
}
