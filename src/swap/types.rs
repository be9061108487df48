//! Nearest / second-nearest median bookkeeping.

use crate::instance::Instance;

/// Phase of the swap descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Looking for an improving swap.
    Scanning,
    /// A full pass found no improving swap: the solution is a local optimum.
    Converged,
    /// Stopped early by the swap budget or a cancellation request.
    Interrupted,
}

/// Per-point nearest and second-nearest median of a median set, and the
/// resulting total cost.
///
/// Built by [`Assignment::recompute_exact`] in `O(n * p)`; prices a
/// candidate swap with [`Assignment::estimate_delta`] in `O(n)`.
///
/// # Examples
///
/// ```
/// use u_pmedian::cost::evaluate_cost;
/// use u_pmedian::instance::Instance;
/// use u_pmedian::swap::Assignment;
///
/// let inst = Instance::new(2, vec![
///     vec![0.0, 1.0, 4.0, 5.0],
///     vec![1.0, 0.0, 3.0, 4.0],
///     vec![4.0, 3.0, 0.0, 1.0],
///     vec![5.0, 4.0, 1.0, 0.0],
/// ]).unwrap();
///
/// let a = Assignment::recompute_exact(&inst, &[0, 1]);
/// assert_eq!(a.cost(), 7.0);
/// let delta = a.estimate_delta(&inst, 0, 3);
/// assert_eq!(a.cost() + delta, evaluate_cost(&inst, &[3, 1]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    closest: Vec<Option<usize>>,
    sec_closest: Vec<Option<usize>>,
    cost: f64,
}

impl Assignment {
    /// Rebuilds the bookkeeping for `solution` from scratch.
    ///
    /// Ties keep the median that appears first in `solution` as nearest.
    pub fn recompute_exact(instance: &Instance, solution: &[usize]) -> Self {
        let n = instance.n();
        let mut closest = vec![None; n];
        let mut sec_closest = vec![None; n];
        let mut cost = 0.0;

        for j in 0..n {
            let row = instance.row(j);
            let (mut d1, mut d2) = (f64::INFINITY, f64::INFINITY);
            let (mut m1, mut m2) = (None, None);
            for &m in solution {
                let d = row[m];
                if d < d1 {
                    d2 = d1;
                    m2 = m1;
                    d1 = d;
                    m1 = Some(m);
                } else if d < d2 {
                    d2 = d;
                    m2 = Some(m);
                }
            }
            closest[j] = m1;
            sec_closest[j] = m2;
            cost += d1;
        }

        if solution.is_empty() {
            cost = f64::INFINITY;
        }

        Self {
            closest,
            sec_closest,
            cost,
        }
    }

    /// Cost change of replacing median `m_out` by non-median `m_in`,
    /// without touching the bookkeeping.
    ///
    /// Points served by `m_out` fall back to their second-nearest median
    /// (or `+inf` if there is none) unless `m_in` is closer; every other
    /// point keeps its nearest median unless `m_in` is closer.
    pub fn estimate_delta(&self, instance: &Instance, m_out: usize, m_in: usize) -> f64 {
        let mut delta = 0.0;
        for (j, (&near, &second)) in self.closest.iter().zip(&self.sec_closest).enumerate() {
            let row = instance.row(j);
            let dist_current = near.map_or(f64::INFINITY, |m| row[m]);
            let dist_in = row[m_in];
            let new_dist = if near == Some(m_out) {
                second.map_or(f64::INFINITY, |m| row[m]).min(dist_in)
            } else {
                dist_current.min(dist_in)
            };
            delta += new_dist - dist_current;
        }
        delta
    }

    /// Total cost of the median set this bookkeeping was built from.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Nearest median of point `j`, `None` for an empty median set.
    pub fn closest(&self, j: usize) -> Option<usize> {
        self.closest[j]
    }

    /// Second-nearest median of point `j`, `None` with fewer than two medians.
    pub fn second_closest(&self, j: usize) -> Option<usize> {
        self.sec_closest[j]
    }
}
