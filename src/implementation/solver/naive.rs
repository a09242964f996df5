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

//! The unmemoized reference solver. It is only compiled for the tests of this
//! crate, or when the `oracle` feature is enabled.

use crate::{Catalog, Error, Item, Solution, Solver};

/// This solver applies the recurrence of the dynamic programming solvers
/// without any cache: every subproblem is recomputed each time it is needed,
/// which takes an exponential time. Its sole purpose is to serve as an oracle
/// against which the other solvers can be validated. This is why it refuses
/// catalogs of more than `NaiveSolver::MAX_ITEMS` items.
///
/// Each step of the recursion returns a fresh solution which is owned by its
/// caller; extending it cannot corrupt any other partial result.
#[derive(Debug, Default, Copy, Clone)]
pub struct NaiveSolver;

impl NaiveSolver {
    /// The largest catalog this solver accepts
    pub const MAX_ITEMS: usize = 20;

    fn best(items: &[Item], capacity: usize) -> Solution {
        match items.split_last() {
            None => Solution::empty(),
            Some((item, rest)) => {
                let without = Self::best(rest, capacity);
                let size    = item.size as usize;
                if size > capacity {
                    return without;
                }
                let with = Self::best(rest, capacity - size).including(item);
                if with.value > without.value { with } else { without }
            }
        }
    }
}

impl Solver for NaiveSolver {
    fn solve(&self, catalog: &Catalog, capacity: isize) -> Result<Solution, Error> {
        let bounds = catalog.check(capacity)?;
        if catalog.len() > Self::MAX_ITEMS {
            return Err(Error::TooManyItems { count: catalog.len(), limit: Self::MAX_ITEMS });
        }
        Ok(Self::best(catalog.items(), bounds.capacity))
    }
}
