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

//! The `knapsack` command line: reads a catalog of items from file and solves
//! it for one or more capacities.

use std::{io::{self, Write}, process::ExitCode, time::{Duration, Instant}};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use knapsack_dp::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Method {
    /// exact, bottom-up dynamic programming
    Tabulation,
    /// exact, top-down dynamic programming
    Memoization,
    /// fast value/size ratio heuristic (not optimal)
    Greedy,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solves the 0/1 knapsack problem for the items listed in a file. Each line
/// of that file describes one item as `identity size value`.
struct Args {
    /// The path to the instance file
    fname: String,
    /// The capacity of the sack. Several capacities can be given at once.
    #[clap(required = true, allow_negative_numbers = true)]
    capacities: Vec<isize>,
    /// The algorithm used to fill the sack
    #[clap(short, long, value_enum, default_value = "tabulation")]
    method: Method,
    /// The number of concurrent threads (defaults to the number of cpus)
    #[clap(short, long)]
    threads: Option<usize>,
    /// The maximum amount of time (in seconds) you would like the solver to run
    #[clap(short, long)]
    duration: Option<u64>,
    /// Log what the solver is doing
    #[clap(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "knapsack_dp=debug" } else { "knapsack_dp=warn" };
    let filter  = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the outcome of every job, failed ones included, and returns the
/// number of failures.
fn report<W: Write>(out: &mut W, method: Method, outcomes: &[JobOutcome]) -> io::Result<usize> {
    let mut failures = 0;
    for outcome in outcomes {
        writeln!(out, "Capacity:   {}\nMethod:     {:?}\nDuration:   {:.3} seconds",
            outcome.capacity, method, outcome.elapsed.as_secs_f32())?;
        match &outcome.result {
            Ok(solution) => {
                let chosen = solution.chosen.iter().map(|id| id.id()).collect::<Vec<_>>();
                writeln!(out, "Objective:  {}\nSize:       {}\nSolution:   {:?}\n",
                    solution.value, solution.size, chosen)?;
            },
            Err(e) => {
                failures += 1;
                writeln!(out, "Error:      {:#}\n", anyhow::Error::new(e.clone()))?;
            }
        }
    }
    Ok(failures)
}

fn approximate_all(catalog: &Catalog, capacities: &[isize]) -> Vec<JobOutcome> {
    capacities.iter().copied()
        .map(|capacity| {
            let start  = Instant::now();
            let result = approximate(catalog, capacity).map(|items| Solution::from_items(&items));
            JobOutcome { capacity, result, elapsed: start.elapsed() }
        })
        .collect()
}

fn run(args: &Args) -> anyhow::Result<()> {
    let catalog = io_utils::read_catalog(&args.fname)
        .with_context(|| format!("cannot read the catalog from {}", args.fname))?;

    let strategy = match args.method {
        Method::Greedy      => None,
        Method::Tabulation  => Some(Strategy::Tabulation),
        Method::Memoization => Some(Strategy::Memoization),
    };

    let outcomes = match strategy {
        None => approximate_all(&catalog, &args.capacities),
        Some(strategy) => {
            let mut config = BatchConfigBuilder::default();
            config.strategy(strategy);
            if let Some(threads) = args.threads {
                config.nb_threads(threads);
            }
            if let Some(duration) = args.duration {
                config.time_budget(Some(Duration::from_secs(duration)));
            }
            let config = config.build()?;
            BatchSolver::new(&catalog, config).solve_all_timed(&args.capacities)
        }
    };

    let failures = report(&mut io::stdout().lock(), args.method, &outcomes)?;
    if failures > 0 {
        bail!("{failures} out of {} capacities could not be solved", outcomes.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
