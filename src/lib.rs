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

//! # Knapsack DP
//! This crate solves the 0/1 knapsack problem: given a catalog of items, each
//! of which has a size and a value, and a sack of bounded capacity, select the
//! subset of items maximizing the total value while the total size does not
//! exceed the capacity.
//!
//! ## Exact solvers
//! The problem is formulated as a dynamic program over the subproblems
//! best(i, j): the best selection among the first `i` items of the catalog
//! when the remaining capacity is `j`. Two evaluation strategies are offered,
//! and both are guaranteed to report the very same solution:
//!
//! * `TabulationSolver` fills the table of all subproblems bottom-up,
//! * `MemoizedSolver` evaluates the subproblems top-down, on demand, and only
//!   computes those that are actually reachable.
//!
//! When several subsets achieve the optimal value, the reported one is the
//! subset obtained when leaving an item out is preferred over taking it,
//! unless taking it strictly improves the value.
//!
//! ## Approximation
//! `GreedyRatio` is a fast heuristic that ranks the items by value per unit
//! of size and picks them in that order. Its selection is feasible but in
//! general not optimal; it is mostly useful as a baseline.
//!
//! ## Quick Example
//! ```
//! use knapsack_dp::*;
//!
//! // 1. Create a catalog of items (identity, size, value)
//! let catalog = Catalog::new(vec![
//!     Item::new(1, 10,  60),
//!     Item::new(2, 20, 100),
//!     Item::new(3, 30, 120),
//! ]);
//! // 2. Solve it exactly for a sack of capacity 50
//! let solution = solve(&catalog, 50).unwrap();
//! assert_eq!(220, solution.value);
//! assert_eq!(vec![ItemId(2), ItemId(3)], solution.chosen);
//!
//! // 3. Or quickly approximate it
//! let greedy = approximate(&catalog, 50).unwrap();
//! assert_eq!(160, Solution::from_items(&greedy).value);
//! ```
//!
//! ## Going further
//! The `BatchSolver` solves one catalog for many capacities on several
//! threads, and any exact solver can be bounded in time with a `Cutoff`
//! such as `TimeBudget`.

mod common;
mod abstraction;
mod implementation;
pub mod io_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;

/// Solves the knapsack instance defined by `catalog` and `capacity` to
/// optimality, with the default (bottom-up) exact solver.
///
/// # Errors
/// `Error::InvalidInput` when the capacity or some item size is negative.
pub fn solve(catalog: &Catalog, capacity: isize) -> Result<Solution, Error> {
    TabulationSolver::new().solve(catalog, capacity)
}

/// Quickly selects items of `catalog` that fit in a sack of the given
/// `capacity`, using the greedy ratio heuristic. The selection is returned in
/// the order the items were picked.
///
/// # Errors
/// `Error::InvalidInput` when the capacity or some item size is negative.
pub fn approximate(catalog: &Catalog, capacity: isize) -> Result<Vec<Item>, Error> {
    GreedyRatio.approximate(catalog, capacity)
}
