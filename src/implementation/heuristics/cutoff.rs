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

//! This module provides the implementation of the cutoff criteria that can be
//! used to bound the time an exact solver is allowed to run.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff._ It lets the solver run until completion.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to solve an
/// instance. Once the time budget is elapsed, the solver gives up and reports
/// `Error::CutoffOccurred`.
///
/// The clock starts ticking when the cutoff is created. Clones share the same
/// deadline. No timer thread is involved: the deadline is simply compared to
/// the current instant whenever the solver asks.
///
/// ```
/// # use knapsack_dp::*;
/// use std::time::Duration;
///
/// let catalog = Catalog::new(vec![Item::new(1, 3, 4), Item::new(2, 4, 5)]);
/// let budget  = TimeBudget::new(Duration::from_secs(10));
/// let solver  = TabulationSolver::with_cutoff(budget);
/// // will run for maximum 10 seconds
/// let optimum = solver.solve(&catalog, 7).unwrap();
/// assert_eq!(9, optimum.value);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct TimeBudget {
    /// `None` when the budget is too large to be represented: it never ends
    deadline: Option<Instant>
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now().checked_add(budget) }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}
