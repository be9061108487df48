//! Randomized greedy execution.
//!
//! # Algorithm
//!
//! 1. `min_dist[j] = +inf` for every point, candidate pool = all points
//! 2. Repeat `p` times, or until the pool is empty:
//!    a. Score each candidate `c`: `sum_j min(min_dist[j], d(j, c))`
//!    b. Stable-sort candidates by score (ties keep index order)
//!    c. Draw uniformly among the first `min(k_rcl, |pool|)`
//!    d. Commit it, drop it from the pool, fold its column into `min_dist`
//!
//! Scoring against `min_dist` makes each candidate `O(n)` instead of
//! re-evaluating the whole partial solution.

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RgreedyConfig;
use crate::instance::Instance;

/// Result of a randomized greedy construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgreedyResult {
    /// Chosen medians in the order they were added. Holds `min(p, n)`
    /// distinct points.
    pub solution: Vec<usize>,

    /// Total cost of `solution`, tracked incrementally. `+inf` when empty.
    pub cost: f64,

    /// Cost after each median was added.
    pub cost_history: Vec<f64>,
}

/// Executes the randomized greedy constructor.
pub struct RgreedyRunner;

impl RgreedyRunner {
    /// Runs the constructor with a generator seeded from `config`.
    pub fn run(instance: &Instance, config: &RgreedyConfig) -> Result<RgreedyResult> {
        config
            .validate()
            .map_err(|e| anyhow!("invalid RgreedyConfig: {e}"))?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::construct(instance, config.k_rcl, &mut rng)
    }

    /// Builds a median set drawing from the caller's generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_pmedian::instance::Instance;
    /// use u_pmedian::rgreedy::RgreedyRunner;
    ///
    /// let inst = Instance::new(1, vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![1.0, 0.0, 1.0],
    ///     vec![2.0, 1.0, 0.0],
    /// ]).unwrap();
    ///
    /// // k_rcl = 1 is pure greedy: the center point wins.
    /// let result = RgreedyRunner::construct(&inst, 1, &mut StdRng::seed_from_u64(0)).unwrap();
    /// assert_eq!(result.solution, vec![1]);
    /// assert_eq!(result.cost, 2.0);
    /// ```
    pub fn construct<R: Rng>(instance: &Instance, k_rcl: usize, rng: &mut R) -> Result<RgreedyResult> {
        if k_rcl == 0 {
            return Err(anyhow!("k_rcl must be at least 1"));
        }

        let n = instance.n();
        let p = instance.p();
        log::debug!("rgreedy start: n = {n}, p = {p}, k_rcl = {k_rcl}");

        let mut solution = Vec::with_capacity(p.min(n));
        let mut candidates: Vec<usize> = (0..n).collect();
        let mut min_dists = vec![f64::INFINITY; n];
        let mut cost = f64::INFINITY;
        let mut cost_history = Vec::with_capacity(p.min(n));

        for _ in 0..p {
            if candidates.is_empty() {
                log::debug!("rgreedy: candidate pool exhausted after {} medians", solution.len());
                break;
            }

            let mut scored: Vec<(f64, usize)> = candidates
                .iter()
                .map(|&c| (prospective_cost(instance, &min_dists, c), c))
                .collect();
            scored.sort_by(|a, b| a.0.total_cmp(&b.0));

            let rcl_size = k_rcl.min(scored.len());
            let (chosen_cost, chosen) = scored[rng.random_range(0..rcl_size)];

            solution.push(chosen);
            if let Some(pos) = candidates.iter().position(|&c| c == chosen) {
                candidates.remove(pos);
            }
            for (j, d) in min_dists.iter_mut().enumerate() {
                *d = d.min(instance.distance(j, chosen));
            }
            cost = chosen_cost;
            cost_history.push(cost);

            log::debug!("rgreedy: chose median {chosen}, cost = {cost:.6}");
        }

        log::info!(
            "rgreedy done: {} medians, cost = {cost:.6}",
            solution.len()
        );

        Ok(RgreedyResult {
            solution,
            cost,
            cost_history,
        })
    }
}

/// Cost of the partial solution if `candidate` were added next.
fn prospective_cost(instance: &Instance, min_dists: &[f64], candidate: usize) -> f64 {
    min_dists
        .iter()
        .enumerate()
        .map(|(j, &best)| best.min(instance.distance(j, candidate)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::evaluate_cost;
    use crate::instance::generator::random_symmetric;

    fn line4(p: usize) -> Instance {
        Instance::new(
            p,
            vec![
                vec![0.0, 1.0, 4.0, 5.0],
                vec![1.0, 0.0, 3.0, 4.0],
                vec![4.0, 3.0, 0.0, 1.0],
                vec![5.0, 4.0, 1.0, 0.0],
            ],
        )
        .unwrap()
    }

    fn assert_distinct(solution: &[usize]) {
        let mut sorted = solution.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), solution.len(), "duplicate medians in {solution:?}");
    }

    #[test]
    fn test_pure_greedy_line() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = RgreedyRunner::construct(&line4(2), 1, &mut rng).unwrap();
        // Round 1: columns 1 and 2 both score 8; the stable sort keeps 1 first.
        assert_eq!(result.solution[0], 1);
        // Round 2 from min_dist = [1, 0, 3, 4]: adding 2 or 3 both give 2; 2 wins.
        assert_eq!(result.solution, vec![1, 2]);
        assert!((result.cost - 2.0).abs() < 1e-12);
        assert_eq!(result.cost_history, vec![8.0, 2.0]);
    }

    #[test]
    fn test_pure_greedy_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let inst = random_symmetric(30, 6, 100, &mut rng).unwrap();
        let a = RgreedyRunner::construct(&inst, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = RgreedyRunner::construct(&inst, 1, &mut StdRng::seed_from_u64(999)).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.cost, b.cost);
    }

    #[test]
    fn test_cost_matches_evaluator() {
        let mut rng = StdRng::seed_from_u64(11);
        let inst = random_symmetric(40, 7, 100, &mut rng).unwrap();
        for seed in 0..10 {
            let result = RgreedyRunner::construct(&inst, 3, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(result.solution.len(), 7);
            assert_distinct(&result.solution);
            let exact = evaluate_cost(&inst, &result.solution);
            assert!(
                (result.cost - exact).abs() < 1e-6,
                "tracked {} vs exact {exact}",
                result.cost
            );
        }
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let mut rng = StdRng::seed_from_u64(5);
        let inst = random_symmetric(30, 10, 100, &mut rng).unwrap();
        let result = RgreedyRunner::construct(&inst, 4, &mut rng).unwrap();
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0], "cost history increased: {} > {}", w[1], w[0]);
        }
    }

    #[test]
    fn test_p_zero_is_empty_and_infinite() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = RgreedyRunner::construct(&line4(0), 3, &mut rng).unwrap();
        assert!(result.solution.is_empty());
        assert_eq!(result.cost, f64::INFINITY);
    }

    #[test]
    fn test_p_equals_n_selects_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = RgreedyRunner::construct(&line4(4), 3, &mut rng).unwrap();
        assert_eq!(result.solution.len(), 4);
        assert_distinct(&result.solution);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_p_greater_than_n_is_capped() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = RgreedyRunner::construct(&line4(9), 2, &mut rng).unwrap();
        assert_eq!(result.solution.len(), 4);
        assert_distinct(&result.solution);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_single_point() {
        let inst = Instance::new(1, vec![vec![0.0]]).unwrap();
        let result = RgreedyRunner::construct(&inst, 3, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(result.solution, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(0, vec![]).unwrap();
        let result = RgreedyRunner::construct(&inst, 3, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(result.solution.is_empty());
        assert_eq!(result.cost, f64::INFINITY);
    }

    #[test]
    fn test_zero_rcl_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(RgreedyRunner::construct(&line4(2), 0, &mut rng).is_err());
        let config = RgreedyConfig::default().with_k_rcl(0);
        assert!(RgreedyRunner::run(&line4(2), &config).is_err());
    }

    #[test]
    fn test_rcl_picks_stay_within_best_candidates() {
        // First round: scores are col sums [10, 8, 8, 10]; with k_rcl = 2
        // only points 1 and 2 may be picked.
        let inst = line4(1);
        for seed in 0..20 {
            let result = RgreedyRunner::construct(&inst, 2, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(
                result.solution == vec![1] || result.solution == vec![2],
                "seed {seed} picked {:?}",
                result.solution
            );
            assert_eq!(result.cost, 8.0);
        }
    }

    #[test]
    fn test_large_rcl_reaches_every_candidate() {
        let inst = line4(1);
        let mut seen = [false; 4];
        for seed in 0..200 {
            let result = RgreedyRunner::construct(&inst, 10, &mut StdRng::seed_from_u64(seed)).unwrap();
            seen[result.solution[0]] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform RCL never picked some point: {seen:?}");
    }

    #[test]
    fn test_run_with_seed_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(8);
        let inst = random_symmetric(25, 5, 100, &mut rng).unwrap();
        let config = RgreedyConfig::default().with_seed(77);
        let a = RgreedyRunner::run(&inst, &config).unwrap();
        let b = RgreedyRunner::run(&inst, &config).unwrap();
        assert_eq!(a.solution, b.solution);
    }
}
