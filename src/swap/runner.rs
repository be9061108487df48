//! Swap local search execution loop.
//!
//! # Algorithm
//!
//! 1. Build [`Assignment`] for the start solution
//! 2. Scan medians in solution order; for each, scan non-medians in index
//!    order and price the swap with [`Assignment::estimate_delta`]
//! 3. Accept the first swap with `delta < -epsilon`, rebuild the
//!    bookkeeping, resynchronize the tracked cost if it drifted, and
//!    restart the scan from the first median
//! 4. Stop when a full scan accepts nothing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};

use super::config::SwapConfig;
use super::types::{Assignment, SearchState};
use crate::instance::Instance;

/// Result of a swap local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    /// Final median set. Positions follow the start solution, each swap
    /// replacing a median in place.
    pub solution: Vec<usize>,

    /// Cost of `solution`.
    pub cost: f64,

    /// Cost of the start solution.
    pub initial_cost: f64,

    /// Number of accepted swaps.
    pub swaps: usize,

    /// Number of scans started (each accepted swap restarts the scan).
    pub scans: usize,

    /// Times the tracked cost was reset to the rebuilt cost.
    pub drift_corrections: usize,

    /// `Converged` at a local optimum, `Interrupted` otherwise.
    pub state: SearchState,

    /// Initial cost followed by the cost after each accepted swap.
    pub cost_history: Vec<f64>,
}

/// Executes first-improvement swap descent.
pub struct SwapRunner;

impl SwapRunner {
    /// Refines `initial` until no improving swap remains.
    ///
    /// `initial` may be any set of distinct in-range points, not only
    /// constructor output. An empty set converges immediately with cost
    /// `+inf`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_pmedian::instance::Instance;
    /// use u_pmedian::swap::{SearchState, SwapConfig, SwapRunner};
    ///
    /// let inst = Instance::new(2, vec![
    ///     vec![0.0, 1.0, 4.0, 5.0],
    ///     vec![1.0, 0.0, 3.0, 4.0],
    ///     vec![4.0, 3.0, 0.0, 1.0],
    ///     vec![5.0, 4.0, 1.0, 0.0],
    /// ]).unwrap();
    ///
    /// let result = SwapRunner::run(&inst, vec![0, 1], &SwapConfig::default()).unwrap();
    /// assert_eq!(result.initial_cost, 7.0);
    /// assert_eq!(result.cost, 2.0);
    /// assert_eq!(result.state, SearchState::Converged);
    /// ```
    pub fn run(instance: &Instance, initial: Vec<usize>, config: &SwapConfig) -> Result<SwapResult> {
        Self::run_with_cancel(instance, initial, config, None)
    }

    /// Runs the descent with an optional cancellation token, checked
    /// before every scan.
    pub fn run_with_cancel(
        instance: &Instance,
        initial: Vec<usize>,
        config: &SwapConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SwapResult> {
        config
            .validate()
            .map_err(|e| anyhow!("invalid SwapConfig: {e}"))?;
        check_solution(instance, &initial)?;

        let n = instance.n();
        let mut solution = initial;
        let mut in_solution = vec![false; n];
        for &m in &solution {
            in_solution[m] = true;
        }

        let mut assignment = Assignment::recompute_exact(instance, &solution);
        let initial_cost = assignment.cost();
        let mut current_cost = initial_cost;
        let mut cost_history = vec![initial_cost];
        log::debug!("swap search start: {} medians, cost = {current_cost:.6}", solution.len());

        let mut swaps = 0usize;
        let mut scans = 0usize;
        let mut drift_corrections = 0usize;
        let mut state = SearchState::Scanning;

        while state == SearchState::Scanning {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    state = SearchState::Interrupted;
                    break;
                }
            }
            if config.max_swaps > 0 && swaps >= config.max_swaps {
                state = SearchState::Interrupted;
                break;
            }

            scans += 1;
            let Some((pos, m_in, delta)) =
                find_first_improvement(instance, &solution, &in_solution, &assignment, config)
            else {
                state = SearchState::Converged;
                break;
            };

            let m_out = solution[pos];
            solution[pos] = m_in;
            in_solution[m_out] = false;
            in_solution[m_in] = true;
            current_cost += delta;
            swaps += 1;

            assignment = Assignment::recompute_exact(instance, &solution);
            if (current_cost - assignment.cost()).abs() > config.drift_tolerance {
                log::warn!(
                    "cost drift detected: tracked {current_cost:.9}, rebuilt {:.9}; resetting",
                    assignment.cost()
                );
                current_cost = assignment.cost();
                drift_corrections += 1;
            }
            cost_history.push(current_cost);

            log::debug!("swap {swaps}: {m_out} (out) <-> {m_in} (in), cost = {current_cost:.6}");
        }

        match state {
            SearchState::Converged => log::info!(
                "local optimum reached after {swaps} swaps: cost {initial_cost:.6} -> {current_cost:.6}"
            ),
            _ => log::info!("swap search interrupted after {swaps} swaps, cost = {current_cost:.6}"),
        }

        Ok(SwapResult {
            solution,
            cost: current_cost,
            initial_cost,
            swaps,
            scans,
            drift_corrections,
            state,
            cost_history,
        })
    }
}

/// First `(position of m_out, m_in, delta)` in scan order improving by more
/// than the configured epsilon.
fn find_first_improvement(
    instance: &Instance,
    solution: &[usize],
    in_solution: &[bool],
    assignment: &Assignment,
    config: &SwapConfig,
) -> Option<(usize, usize, f64)> {
    for (pos, &m_out) in solution.iter().enumerate() {
        for m_in in (0..instance.n()).filter(|&m| !in_solution[m]) {
            let delta = assignment.estimate_delta(instance, m_out, m_in);
            if delta < -config.improvement_epsilon {
                return Some((pos, m_in, delta));
            }
        }
    }
    None
}

fn check_solution(instance: &Instance, solution: &[usize]) -> Result<()> {
    let n = instance.n();
    let mut seen = vec![false; n];
    for &m in solution {
        if m >= n {
            bail!("median {m} is out of range for n = {n}");
        }
        if seen[m] {
            bail!("median {m} appears more than once");
        }
        seen[m] = true;
    }
    Ok(())
}
