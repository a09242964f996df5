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

//! This module is meant to test the correctness of the knapsack solvers on
//! the instances stored in `resources/knapsack`.

use std::path::PathBuf;

use knapsack_dp::{*, io_utils::read_catalog};

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("resources/knapsack/")
        .join(id)
}

fn catalog(id: &str) -> Catalog {
    read_catalog(locate(id)).unwrap()
}

fn ids(v: &[usize]) -> Vec<ItemId> {
    v.iter().copied().map(ItemId).collect()
}

/// Solves the instance with both exact strategies, checks that they agree and
/// that the solution is feasible, then returns it.
pub fn solve_id(id: &str, capacity: isize) -> Solution {
    let catalog = catalog(id);
    let tab  = TabulationSolver::new().solve(&catalog, capacity).unwrap();
    let memo = MemoizedSolver::new().solve(&catalog, capacity).unwrap();

    assert_eq!(tab, memo);
    assert!(tab.is_feasible(&catalog, capacity));
    tab
}

// =================================================================
// optimal values (and selections) of the stored instances
// =================================================================
#[test]
fn example_7() {
    let sol = solve_id("example", 7);
    assert_eq!(9, sol.value);
    assert_eq!(7, sol.size);
    assert_eq!(ids(&[2, 3]), sol.chosen);
}
#[test]
fn example_13() {
    let sol = solve_id("example", 13);
    assert_eq!(17, sol.value);
    assert_eq!(ids(&[1, 2, 3, 4]), sol.chosen);
}
#[test]
fn example_100() {
    assert_eq!(solve_id("example", 13), solve_id("example", 100));
}
#[test]
fn greedy_trap_50() {
    let sol = solve_id("greedy_trap", 50);
    assert_eq!(220, sol.value);
    assert_eq!(ids(&[2, 3]), sol.chosen);
}
#[test]
fn random_15_50() {
    let sol = solve_id("random_15", 50);
    assert_eq!(317, sol.value);
    assert_eq!(48, sol.size);
    assert_eq!(ids(&[2, 4, 6, 8, 9, 11, 12]), sol.chosen);
}
#[test]
fn random_15_150() {
    let sol = solve_id("random_15", 150);
    assert_eq!(525, sol.value);
    assert_eq!(ids(&[2, 5, 6, 8, 9, 10, 11, 12, 15]), sol.chosen);
}
#[test]
fn random_15_300() {
    assert_eq!(677, solve_id("random_15", 300).value);
}
#[test]
fn random_15_1000() {
    let sol = solve_id("random_15", 1000);
    assert_eq!(681, sol.value);
    assert_eq!(311, sol.size);
    assert_eq!(15, sol.chosen.len());
}
#[test]
fn random_60_100() {
    let sol = solve_id("random_60", 100);
    assert_eq!(1031, sol.value);
    assert_eq!(ids(&[8, 11, 31, 32, 49, 52, 53]), sol.chosen);
}
#[test]
fn random_60_500() {
    assert_eq!(2598, solve_id("random_60", 500).value);
}
#[test]
fn random_60_1500() {
    let sol = solve_id("random_60", 1500);
    assert_eq!(4594, sol.value);
    assert_eq!(1500, sol.size);
}
#[test]
fn random_60_10000() {
    let sol = solve_id("random_60", 10000);
    assert_eq!(6222, sol.value);
    assert_eq!(3308, sol.size);
}
#[test]
fn ties_18_5() {
    let sol = solve_id("ties_18", 5);
    assert_eq!(12, sol.value);
    assert_eq!(ids(&[2, 9]), sol.chosen);
}
#[test]
fn ties_18_11() {
    let sol = solve_id("ties_18", 11);
    assert_eq!(28, sol.value);
    assert_eq!(ids(&[2, 5, 9, 11, 17]), sol.chosen);
}
#[test]
fn ties_18_20() {
    let sol = solve_id("ties_18", 20);
    assert_eq!(44, sol.value);
    assert_eq!(ids(&[2, 3, 4, 5, 9, 11, 13, 14, 17]), sol.chosen);
}

// =================================================================
// boundaries
// =================================================================
#[test]
fn a_null_capacity_yields_the_empty_solution() {
    for id in ["example", "greedy_trap", "random_15", "random_60", "ties_18"] {
        assert_eq!(Solution::empty(), solve_id(id, 0));
    }
}
#[test]
fn more_capacity_never_decreases_the_value() {
    let catalog = catalog("random_15");
    let solver  = TabulationSolver::new();
    let mut last = 0;
    for capacity in 0..=350 {
        let value = solver.solve(&catalog, capacity).unwrap().value;
        assert!(value >= last);
        last = value;
    }
}
#[test]
fn solving_twice_yields_equal_solutions() {
    let catalog = catalog("random_60");
    assert_eq!(solve(&catalog, 777), solve(&catalog, 777));
    assert_eq!(
        MemoizedSolver::new().solve(&catalog, 777),
        MemoizedSolver::new().solve(&catalog, 777));
}

// =================================================================
// greedy approximation
// =================================================================
#[test]
fn greedy_trap_greedy() {
    let catalog   = catalog("greedy_trap");
    let selection = approximate(&catalog, 50).unwrap();
    let approx    = Solution::from_items(&selection);

    assert_eq!(ids(&[1, 2]), approx.chosen);
    assert_eq!(160, approx.value);
    assert!(approx.value < solve(&catalog, 50).unwrap().value);
}
#[test]
fn random_15_greedy() {
    let catalog   = catalog("random_15");
    let selection = approximate(&catalog, 150).unwrap();
    let approx    = Solution::from_items(&selection);

    assert_eq!(ids(&[11, 2, 6, 12, 8, 15, 10, 9, 3, 4]), approx.chosen);
    assert_eq!(497, approx.value);
    assert_eq!(126, approx.size);
}
#[test]
fn random_60_greedy() {
    let catalog = catalog("random_60");
    let approx  = Solution::from_items(&approximate(&catalog, 500).unwrap());
    assert_eq!(2575, approx.value);
    assert_eq!(491, approx.size);
    assert!(approx.value <= solve(&catalog, 500).unwrap().value);
}
#[test]
fn greedy_selections_always_fit_and_never_beat_the_optimum() {
    let catalog = catalog("random_60");
    for capacity in (0..=3500).step_by(50) {
        let approx = Solution::from_items(&approximate(&catalog, capacity).unwrap());
        assert!(approx.is_feasible(&catalog, capacity));
        assert!(approx.value <= solve(&catalog, capacity).unwrap().value);
    }
}

// =================================================================
// batch
// =================================================================
#[test]
fn batch_solves_every_capacity() {
    let catalog = catalog("random_60");
    let config  = BatchConfigBuilder::default()
        .strategy(Strategy::Memoization)
        .nb_threads(4)
        .build()
        .unwrap();
    let results = BatchSolver::new(&catalog, config).solve_all(&[0, 100, 500, 1500, 10000]);
    let values  = results.into_iter().map(|r| r.unwrap().value).collect::<Vec<_>>();
    assert_eq!(vec![0, 1031, 2598, 4594, 6222], values);
}
