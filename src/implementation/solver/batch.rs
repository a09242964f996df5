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

//! This module provides a solver that answers many knapsack instances sharing
//! one catalog in parallel.

use std::{fmt, str::FromStr, time::{Duration, Instant}};

use derive_builder::Builder;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::{Catalog, Cutoff, Error, MemoizedSolver, NoCutoff, Solution, Solver, TabulationSolver, TimeBudget};

/// The evaluation strategy of the exact solver
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bottom-up: fill all the subproblems (see `TabulationSolver`)
    #[default]
    Tabulation,
    /// Top-down: only compute the reachable subproblems (see `MemoizedSolver`)
    Memoization,
}
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Tabulation  => write!(f, "tabulation"),
            Strategy::Memoization => write!(f, "memoization"),
        }
    }
}
impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tabulation"  => Ok(Strategy::Tabulation),
            "memoization" => Ok(Strategy::Memoization),
            _ => Err(format!("unknown strategy '{s}'")),
        }
    }
}

/// This is how you configure a `BatchSolver`, e.g.
///
/// ```
/// # use knapsack_dp::*;
/// use std::time::Duration;
///
/// let config = BatchConfigBuilder::default()
///     .strategy(Strategy::Memoization)
///     .nb_threads(2)
///     .time_budget(Some(Duration::from_secs(30)))
///     .build()
///     .unwrap();
/// assert_eq!(2, config.nb_threads());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct BatchConfig {
    /// The exact solver used for every capacity (tabulation by default)
    #[builder(default)]
    strategy: Strategy,
    /// The number of worker threads (as many as there are cpus by default)
    #[builder(default = "num_cpus::get()")]
    nb_threads: usize,
    /// The time budget of the complete batch (unbounded by default)
    #[builder(default)]
    time_budget: Option<Duration>,
}
impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig { strategy: Strategy::default(), nb_threads: num_cpus::get(), time_budget: None }
    }
}
impl BatchConfig {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }
}

/// What became of one capacity of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome {
    pub capacity: isize,
    pub result  : Result<Solution, Error>,
    /// Time spent solving this very capacity (zero when it never started)
    pub elapsed : Duration,
}

/// The state shared by all workers of a batch
struct Shared<'a> {
    /// The capacities that remain to be solved (along with their position)
    pending: Mutex<std::iter::Enumerate<std::slice::Iter<'a, isize>>>,
    /// The outcome of each job, by position
    results: Mutex<Vec<Option<JobOutcome>>>,
}

/// This solver answers the knapsack instances defined by one catalog and
/// several capacities. The jobs are spread over a pool of threads; each job
/// owns its private subproblem table while the catalog is shared read-only.
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
/// let solver  = BatchSolver::new(&catalog, BatchConfig::default());
/// let results = solver.solve_all(&[0, 7, -1]);
///
/// assert_eq!(Ok(0), results[0].as_ref().map(|s| s.value).map_err(|_| ()));
/// assert_eq!(Ok(9), results[1].as_ref().map(|s| s.value).map_err(|_| ()));
/// assert!(results[2].is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BatchSolver<'a> {
    catalog: &'a Catalog,
    config : BatchConfig,
}

impl <'a> BatchSolver<'a> {
    pub fn new(catalog: &'a Catalog, config: BatchConfig) -> Self {
        BatchSolver { catalog, config }
    }

    /// Solves the instance for each of the given capacities. The results are
    /// returned in the order of the capacities. A failing job has no impact
    /// on the others, except for the time budget which covers the whole batch.
    pub fn solve_all(&self, capacities: &[isize]) -> Vec<Result<Solution, Error>> {
        self.solve_all_timed(capacities).into_iter()
            .map(|outcome| outcome.result)
            .collect()
    }

    /// Same as `solve_all`, but also tells how long each job took.
    pub fn solve_all_timed(&self, capacities: &[isize]) -> Vec<JobOutcome> {
        match self.config.time_budget {
            None         => self.run(capacities, &NoCutoff),
            Some(budget) => self.run(capacities, &TimeBudget::new(budget)),
        }
    }

    fn run<C: Cutoff + Sync>(&self, capacities: &[isize], cutoff: &C) -> Vec<JobOutcome> {
        let nb_threads = self.config.nb_threads.clamp(1, capacities.len().max(1));
        info!(jobs = capacities.len(), threads = nb_threads, strategy = %self.config.strategy, "batch started");

        let shared = Shared {
            pending: Mutex::new(capacities.iter().enumerate()),
            results: Mutex::new(vec![None; capacities.len()]),
        };

        std::thread::scope(|s| {
            for thread_id in 0..nb_threads {
                let shared = &shared;
                s.spawn(move || self.work(thread_id, shared, cutoff));
            }
        });

        shared.results.into_inner().into_iter()
            .zip(capacities.iter().copied())
            .map(|(outcome, capacity)| outcome.unwrap_or(JobOutcome {
                capacity,
                result : Err(Error::CutoffOccurred),
                elapsed: Duration::ZERO,
            }))
            .collect()
    }

    fn work<C: Cutoff>(&self, thread_id: usize, shared: &Shared<'_>, cutoff: &C) {
        loop {
            let next = shared.pending.lock().next();
            let Some((job, capacity)) = next else {
                break;
            };

            debug!(thread_id, job, capacity, "job started");
            let start   = Instant::now();
            let result  = self.solve_one(*capacity, cutoff);
            let outcome = JobOutcome { capacity: *capacity, result, elapsed: start.elapsed() };
            shared.results.lock()[job] = Some(outcome);
        }
    }

    fn solve_one<C: Cutoff>(&self, capacity: isize, cutoff: &C) -> Result<Solution, Error> {
        match self.config.strategy {
            Strategy::Tabulation  => TabulationSolver::with_cutoff(cutoff).solve(self.catalog, capacity),
            Strategy::Memoization => MemoizedSolver::with_cutoff(cutoff).solve(self.catalog, capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::*;

    fn catalog() -> Catalog {
        (0..40)
            .map(|i| Item::new(i, (i as isize * 7) % 23 + 1, (i as isize * 17) % 31))
            .collect()
    }

    #[test]
    fn by_default_the_batch_uses_tabulation_and_all_cpus() {
        let config = BatchConfigBuilder::default().build().unwrap();
        assert_eq!(Strategy::Tabulation, config.strategy());
        assert_eq!(num_cpus::get(), config.nb_threads());
        assert_eq!(None, config.time_budget());
    }
    #[test]
    fn strategies_can_be_parsed_and_printed() {
        assert_eq!(Ok(Strategy::Tabulation), "tabulation".parse());
        assert_eq!(Ok(Strategy::Memoization), "memoization".parse());
        assert!("greedy".parse::<Strategy>().is_err());
        assert_eq!("memoization", Strategy::Memoization.to_string());
    }
    #[test]
    fn results_come_in_the_order_of_the_capacities() {
        let catalog  = catalog();
        let caps     = (0..60).rev().collect::<Vec<isize>>();
        let config   = BatchConfigBuilder::default().nb_threads(4).build().unwrap();
        let results  = BatchSolver::new(&catalog, config).solve_all(&caps);

        assert_eq!(caps.len(), results.len());
        let solver = TabulationSolver::new();
        for (capacity, result) in caps.iter().zip(results) {
            assert_eq!(solver.solve(&catalog, *capacity), result);
        }
    }
    #[test]
    fn both_strategies_yield_the_same_results() {
        let catalog = catalog();
        let caps    = [0, 1, 17, 42, 99, 250, 1000];
        let tab  = BatchConfigBuilder::default().strategy(Strategy::Tabulation).nb_threads(3).build().unwrap();
        let memo = BatchConfigBuilder::default().strategy(Strategy::Memoization).nb_threads(3).build().unwrap();

        assert_eq!(
            BatchSolver::new(&catalog, tab).solve_all(&caps),
            BatchSolver::new(&catalog, memo).solve_all(&caps));
    }
    #[test]
    fn a_failing_job_does_not_affect_the_others() {
        let catalog = catalog();
        let results = BatchSolver::new(&catalog, BatchConfig::default()).solve_all(&[10, -5, 20]);
        assert!(results[0].is_ok());
        assert_eq!(Err(Error::InvalidInput(InvalidInput::NegativeCapacity(-5))), results[1]);
        assert!(results[2].is_ok());
    }
    #[test]
    fn timed_outcomes_are_reported_per_capacity() {
        let catalog  = catalog();
        let config   = BatchConfigBuilder::default().nb_threads(2).build().unwrap();
        let outcomes = BatchSolver::new(&catalog, config).solve_all_timed(&[10, -5, 20]);

        assert_eq!(vec![10, -5, 20], outcomes.iter().map(|o| o.capacity).collect::<Vec<_>>());
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
        let solver = TabulationSolver::new();
        for outcome in outcomes {
            assert_eq!(solver.solve(&catalog, outcome.capacity), outcome.result);
        }
    }
    #[test]
    fn an_exhausted_budget_fails_every_job() {
        let catalog = catalog();
        let config  = BatchConfigBuilder::default()
            .time_budget(Some(Duration::ZERO))
            .build()
            .unwrap();
        let results = BatchSolver::new(&catalog, config).solve_all(&[5, 50, 500]);
        assert!(results.iter().all(|r| *r == Err(Error::CutoffOccurred)));
    }
    #[test]
    fn an_empty_batch_yields_no_result() {
        let catalog = catalog();
        let results = BatchSolver::new(&catalog, BatchConfig::default()).solve_all(&[]);
        assert!(results.is_empty());
    }
    #[test]
    fn a_generous_time_budget_does_not_interfere() {
        let catalog = catalog();
        let config  = BatchConfigBuilder::default()
            .time_budget(Some(Duration::from_secs(60)))
            .build()
            .unwrap();
        let results = BatchSolver::new(&catalog, config).solve_all(&[5, 50]);
        assert!(results.iter().all(|r| r.is_ok()));
    }
}
