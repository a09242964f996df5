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

//! The top-down (memoized) dynamic programming solver.

use tracing::{debug, info, warn};

use crate::{Catalog, Cell, Cutoff, Error, NoCutoff, Solution, Solver, SparseTable, SubproblemTable};

/// How many subproblems are visited between two checks of the cutoff.
const CUTOFF_PERIOD: usize = 4096;

/// This solver evaluates best(itemCount, capacity) on demand: a subproblem is
/// only ever computed when some other subproblem depends on it, and it is
/// cached the first time it is computed. It follows the very same recurrence
/// and tie-breaking rule as the `TabulationSolver`, hence both yield identical
/// solutions. The difference is that this one only pays for the reachable
/// subproblems, which pays off when the capacity is large compared to the
/// sizes of the items.
///
/// The evaluation is driven by an explicit stack of pending subproblems rather
/// than by native recursion, so that large catalogs cannot exhaust the call
/// stack.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let catalog = Catalog::new(vec![
///     Item::new(1, 1, 1),
///     Item::new(2, 3, 4),
///     Item::new(3, 4, 5),
///     Item::new(4, 5, 7),
/// ]);
/// let memo = MemoizedSolver::new().solve(&catalog, 7).unwrap();
/// let tab  = TabulationSolver::new().solve(&catalog, 7).unwrap();
/// assert_eq!(tab, memo);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoizedSolver<C = NoCutoff> {
    cutoff: C,
}

impl MemoizedSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl <C: Cutoff> MemoizedSolver<C> {
    /// Creates a solver which gives up as soon as the given cutoff criterion
    /// is met.
    pub fn with_cutoff(cutoff: C) -> Self {
        MemoizedSolver { cutoff }
    }

    /// The best value of subproblem (item, capacity) if it is known already.
    /// The base case (no item) is always known.
    #[inline]
    fn known(table: &SparseTable, item: usize, capacity: usize) -> Option<isize> {
        if item == 0 {
            Some(Cell::BASE.value)
        } else {
            table.get(item, capacity).map(|cell| cell.value)
        }
    }

    fn evaluate(&self, catalog: &Catalog, capacity: usize, table: &mut SparseTable) -> Result<(), Error> {
        let mut pending = vec![(catalog.len(), capacity)];
        let mut visits  = 0_usize;

        while let Some(&(i, j)) = pending.last() {
            visits += 1;
            if visits % CUTOFF_PERIOD == 0 && self.cutoff.must_stop() {
                warn!(computed = table.len(), "cutoff occurred during memoized evaluation");
                return Err(Error::CutoffOccurred);
            }

            if i == 0 || table.get(i, j).is_some() {
                pending.pop();
                continue;
            }

            let item    = &catalog[i - 1];
            let size    = item.size as usize;
            let without = Self::known(table, i - 1, j);
            let with    = if size > j { None } else { Some(Self::known(table, i - 1, j - size)) };

            match (without, with) {
                (Some(without), None) => {
                    table.set(i, j, Cell::best_of(without, None));
                    pending.pop();
                },
                (Some(without), Some(Some(with))) => {
                    table.set(i, j, Cell::best_of(without, Some(with + item.value)));
                    pending.pop();
                },
                (without, with) => {
                    // dependencies first; (i, j) is reconsidered once they are known
                    if without.is_none() {
                        pending.push((i - 1, j));
                    }
                    if let Some(None) = with {
                        pending.push((i - 1, j - size));
                    }
                }
            }
        }
        debug!(visits, computed = table.len(), "memoized evaluation complete");
        Ok(())
    }
}

impl <C: Cutoff> Solver for MemoizedSolver<C> {
    fn solve(&self, catalog: &Catalog, capacity: isize) -> Result<Solution, Error> {
        let bounds = catalog.check(capacity)?;
        let reach  = bounds.capacity.min(bounds.total_size);
        info!(strategy = "memoization", items = catalog.len(), capacity, "solve started");
        if reach < bounds.capacity {
            debug!(capacity, reach, "capacity clamped to the total size of the catalog");
        }

        let mut table = SparseTable::new();
        self.evaluate(catalog, reach, &mut table)?;

        let solution = table.solution(catalog, reach);
        info!(strategy = "memoization", value = solution.value, size = solution.size, cells = table.len(), "solve completed");
        Ok(solution)
    }
}
