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

//! The greedy ratio heuristic.

use tracing::{debug, trace};

use crate::{Approximation, Catalog, Error, Item};

/// This approximation ranks the items by decreasing value/size ratio (items
/// with the same ratio keep their catalog order) and then scans the ranking
/// once. An item is accepted when its size is strictly less than the capacity
/// that remains; otherwise it is skipped for good, even if some later, smaller
/// item would fit. The remaining capacity thus never increases along the scan.
///
/// The result is always feasible, but it is generally not optimal.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let catalog = Catalog::new(vec![
///     Item::new(1, 10,  60),
///     Item::new(2, 20, 100),
///     Item::new(3, 30, 120),
/// ]);
/// let greedy = GreedyRatio.approximate(&catalog, 50).unwrap();
/// let exact  = TabulationSolver::new().solve(&catalog, 50).unwrap();
///
/// assert_eq!(160, Solution::from_items(&greedy).value);
/// assert_eq!(220, exact.value);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct GreedyRatio;

impl Approximation for GreedyRatio {
    fn approximate(&self, catalog: &Catalog, capacity: isize) -> Result<Vec<Item>, Error> {
        catalog.check(capacity)?;

        // the ranking is private: the caller's catalog keeps its order
        let mut ranking = catalog.iter().collect::<Vec<_>>();
        ranking.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

        let mut remaining = capacity;
        let mut selection = vec![];
        for item in ranking {
            if item.size < remaining {
                remaining -= item.size;
                selection.push(*item);
                trace!(item = %item.id, remaining, "greedy accepts item");
            } else {
                trace!(item = %item.id, remaining, "greedy skips item");
            }
        }

        debug!(capacity, selected = selection.len(), remaining, "greedy pass complete");
        Ok(selection)
    }
}
