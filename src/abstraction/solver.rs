// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the `Solver` trait.

use crate::{Catalog, Error, Solution};

/// This is the exact solver abstraction. It is implemented by the structures
/// that find a subset of the catalog items maximizing the total value while
/// fitting in the sack.
pub trait Solver {
    /// Returns the best solution to the knapsack instance defined by the
    /// given catalog and capacity.
    ///
    /// Among several subsets of equal value, the reported one is the subset
    /// found when excluding an item is preferred over including it unless
    /// the inclusion strictly improves the value. All exact solvers follow
    /// this rule, hence they all report the very same solution.
    ///
    /// # Errors
    /// The call fails with `Error::InvalidInput` when the capacity or the
    /// size of some item is negative (see `Catalog::check` for the complete
    /// list of checks). It never yields a partial result.
    fn solve(&self, catalog: &Catalog, capacity: isize) -> Result<Solution, Error>;
}
