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

//! This module defines the `SubproblemTable` trait: the storage of the DP
//! subproblems best(i, j) where `i` is the number of catalog items being
//! considered (the first `i` ones) and `j` is the remaining capacity.

use std::ops::Index;

use crate::{Catalog, Decision, Solution};

/// What is remembered about one subproblem: its best value and the decision
/// that was made about its last item to reach that value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Cell {
    pub value   : isize,
    pub decision: Decision,
}
impl Cell {
    /// The best value of a subproblem with no item at all
    pub const BASE: Cell = Cell { value: 0, decision: Decision::LeaveItOut };

    /// Picks the best out of `without` (the value of the subproblem when the
    /// item is left out) and `with` (its value when the item is taken, if it
    /// fits). Leaving the item out is the baseline: it is only overridden by
    /// a strict improvement.
    #[inline]
    pub fn best_of(without: isize, with: Option<isize>) -> Cell {
        match with {
            Some(with) if with > without => Cell { value: with, decision: Decision::TakeIt },
            _ => Cell { value: without, decision: Decision::LeaveItOut },
        }
    }
}

/// A write-once mapping from subproblems to cells. Once a cell has been set,
/// it is never recomputed nor modified.
///
/// Indexing the table (`table[(i, j)]`) panics when the cell has not been
/// computed.
pub trait SubproblemTable: Index<(usize, usize), Output = Cell> {
    /// Returns the cell of subproblem (item, capacity) if it has been computed
    fn get(&self, item: usize, capacity: usize) -> Option<&Cell>;
    /// Stores the cell of subproblem (item, capacity). This must be called at
    /// most once per subproblem.
    fn set(&mut self, item: usize, capacity: usize, cell: Cell);
    /// The number of cells that have been computed
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuilds the solution of subproblem (catalog.len(), capacity) by
    /// walking the decisions back to the base case. Every cell met along the
    /// way must have been computed.
    fn solution(&self, catalog: &Catalog, capacity: usize) -> Solution {
        let n = catalog.len();
        if n == 0 {
            return Solution::empty();
        }

        let mut chosen = vec![];
        let mut size   = 0;
        let mut j      = capacity;
        for i in (1..=n).rev() {
            if self[(i, j)].decision == Decision::TakeIt {
                let item = &catalog[i - 1];
                chosen.push(item.id);
                size += item.size;
                j    -= item.size as usize;
            }
        }
        chosen.reverse();

        Solution { value: self[(n, capacity)].value, size, chosen }
    }
}
