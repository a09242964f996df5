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

//! The bottom-up dynamic programming solver.

use tracing::{debug, info, warn};

use crate::{Catalog, Cell, Cutoff, DenseTable, Error, NoCutoff, Solution, Solver, SubproblemTable};

/// This solver fills the complete table of subproblems best(i, j) by
/// increasing number of items `i` and increasing capacity `j`. Row 0 is the
/// base case (no item: nothing in the sack) and the answer is rebuilt from the
/// cell (itemCount, capacity).
///
/// The recurrence is
/// * best(i, j) = best(i-1, j) when item `i` is larger than `j`,
/// * best(i, j) = max(best(i-1, j), best(i-1, j - size) + value) otherwise,
///   where taking the item only wins on a strict improvement.
///
/// The table only spans the capacities up to the total size of the catalog.
/// Past that point, everything fits and the best solution no longer depends
/// on the capacity. Time and space are hence in O(itemCount x min(capacity,
/// totalSize)).
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
/// let solution = TabulationSolver::new().solve(&catalog, 7).unwrap();
/// assert_eq!(9, solution.value);
/// assert_eq!(7, solution.size);
/// assert_eq!(vec![ItemId(2), ItemId(3)], solution.chosen);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TabulationSolver<C = NoCutoff> {
    cutoff: C,
}

impl TabulationSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl <C: Cutoff> TabulationSolver<C> {
    /// Creates a solver which gives up as soon as the given cutoff criterion
    /// is met. The criterion is checked once per item.
    pub fn with_cutoff(cutoff: C) -> Self {
        TabulationSolver { cutoff }
    }

    fn fill(&self, catalog: &Catalog, table: &mut DenseTable) -> Result<(), Error> {
        let columns = table.columns();
        for j in 0..columns {
            table.set(0, j, Cell::BASE);
        }

        for (i, item) in catalog.iter().enumerate() {
            if self.cutoff.must_stop() {
                warn!(item = i, "cutoff occurred during tabulation");
                return Err(Error::CutoffOccurred);
            }

            let row  = i + 1;
            let size = item.size as usize;
            for j in 0..columns {
                let without = table[(row - 1, j)].value;
                let with    = if size > j {
                    None
                } else {
                    Some(table[(row - 1, j - size)].value + item.value)
                };
                table.set(row, j, Cell::best_of(without, with));
            }
        }
        Ok(())
    }
}

impl <C: Cutoff> Solver for TabulationSolver<C> {
    fn solve(&self, catalog: &Catalog, capacity: isize) -> Result<Solution, Error> {
        let bounds   = catalog.check(capacity)?;
        let reach    = bounds.capacity.min(bounds.total_size);
        let rows     = catalog.len() + 1;
        let columns  = reach + 1;
        info!(strategy = "tabulation", items = catalog.len(), capacity, "solve started");
        if reach < bounds.capacity {
            debug!(capacity, reach, "capacity clamped to the total size of the catalog");
        }
        debug!(rows, columns, "allocating subproblem table");

        let mut table = DenseTable::with_dimensions(rows, columns)?;
        self.fill(catalog, &mut table)?;

        let solution = table.solution(catalog, reach);
        info!(strategy = "tabulation", value = solution.value, size = solution.size, cells = table.len(), "solve completed");
        Ok(solution)
    }
}
