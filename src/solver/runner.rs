//! Pipeline execution.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::PMedianConfig;
use crate::instance::Instance;
use crate::rgreedy::RgreedyRunner;
use crate::swap::{SearchState, SwapRunner};

/// Result of a full construct-then-refine run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PMedianResult {
    /// Final median set.
    pub solution: Vec<usize>,
    /// Cost of `solution`.
    pub cost: f64,
    /// Median set produced by the constructor.
    pub constructive_solution: Vec<usize>,
    /// Cost of `constructive_solution`.
    pub constructive_cost: f64,
    /// Accepted swaps during local search.
    pub swaps: usize,
    /// How the local search ended.
    pub state: SearchState,
    /// Wall-clock time spent constructing.
    pub construct_time: Duration,
    /// Wall-clock time spent in local search.
    pub search_time: Duration,
}

impl PMedianResult {
    /// Cost reduction achieved by the local search.
    pub fn improvement(&self) -> f64 {
        self.constructive_cost - self.cost
    }

    /// Wall-clock time of both phases.
    pub fn total_time(&self) -> Duration {
        self.construct_time + self.search_time
    }
}

/// Runs construction followed by swap descent.
pub struct PMedianSolver;

impl PMedianSolver {
    /// Runs the pipeline with a generator seeded from `config.rgreedy`.
    pub fn run(instance: &Instance, config: &PMedianConfig) -> Result<PMedianResult> {
        let mut rng = match config.rgreedy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the pipeline drawing from the caller's generator; the seed in
    /// `config` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &PMedianConfig,
        rng: &mut R,
    ) -> Result<PMedianResult> {
        config
            .validate()
            .map_err(|e| anyhow!("invalid PMedianConfig: {e}"))?;

        let start = Instant::now();
        let constructed = RgreedyRunner::construct(instance, config.rgreedy.k_rcl, rng)?;
        let construct_time = start.elapsed();

        let start = Instant::now();
        let refined = SwapRunner::run(instance, constructed.solution.clone(), &config.swap)?;
        let search_time = start.elapsed();

        log::info!(
            "p-median: constructive cost {:.6} -> final cost {:.6} ({} swaps)",
            constructed.cost,
            refined.cost,
            refined.swaps
        );

        Ok(PMedianResult {
            solution: refined.solution,
            cost: refined.cost,
            constructive_solution: constructed.solution,
            constructive_cost: constructed.cost,
            swaps: refined.swaps,
            state: refined.state,
            construct_time,
            search_time,
        })
    }
}
