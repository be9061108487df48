//! Ground-truth objective evaluation.
//!
//! [`evaluate_cost`] is the reference the incremental bookkeeping in
//! [`crate::rgreedy`] and [`crate::swap`] must agree with.

use crate::instance::Instance;

/// Total assignment cost of `solution`: the sum over all points of the
/// distance to the nearest median in `solution`.
///
/// Returns `f64::INFINITY` for an empty solution, since no median can
/// serve any point. Runs in `O(n * |solution|)`.
///
/// # Examples
///
/// ```
/// use u_pmedian::cost::evaluate_cost;
/// use u_pmedian::instance::Instance;
///
/// let inst = Instance::new(1, vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(evaluate_cost(&inst, &[1]), 4.0);
/// assert_eq!(evaluate_cost(&inst, &[]), f64::INFINITY);
/// ```
pub fn evaluate_cost(instance: &Instance, solution: &[usize]) -> f64 {
    if solution.is_empty() {
        return f64::INFINITY;
    }
    (0..instance.n())
        .map(|j| {
            let row = instance.row(j);
            solution
                .iter()
                .map(|&m| row[m])
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
