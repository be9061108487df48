//! Immutable instance data.

use anyhow::{anyhow, bail, Result};

/// A p-median instance: `n` points, target median count `p`, and a
/// row-major `n x n` distance matrix.
///
/// `distance(j, m)` is the cost of serving point `j` from median `m`.
///
/// # Examples
///
/// ```
/// use u_pmedian::instance::Instance;
///
/// let instance = Instance::new(1, vec![vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
/// assert_eq!(instance.n(), 2);
/// assert_eq!(instance.p(), 1);
/// assert_eq!(instance.distance(0, 1), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    n: usize,
    p: usize,
    distances: Vec<f64>,
}

impl Instance {
    /// Builds an instance from a square matrix given row by row.
    ///
    /// Fails when a row length differs from the number of rows, when a
    /// distance is negative or not finite, or when `p > 0` on an empty
    /// instance. `p > n` is accepted: construction then stops once every
    /// point has become a median.
    pub fn new(p: usize, rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut distances = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                bail!("row {i} has {} entries, expected {n}", row.len());
            }
            distances.extend(row);
        }
        Self::from_flat(n, p, distances)
    }

    /// Builds an instance from a row-major flat matrix of length `n * n`.
    pub fn from_flat(n: usize, p: usize, distances: Vec<f64>) -> Result<Self> {
        if n == 0 && p > 0 {
            bail!("cannot select {p} medians from an empty instance");
        }
        let expected = n
            .checked_mul(n)
            .ok_or_else(|| anyhow!("point count {n} is too large"))?;
        if distances.len() != expected {
            bail!(
                "distance matrix has {} entries, expected {expected} for n = {n}",
                distances.len()
            );
        }
        if let Some((k, d)) = distances
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite() || **d < 0.0)
        {
            bail!(
                "distance ({}, {}) = {d} is not a finite non-negative number",
                k / n,
                k % n
            );
        }
        Ok(Self { n, p, distances })
    }

    /// Number of points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of medians to select.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Distance from point `from` to median `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.n + to]
    }

    /// Distances from point `from` to every point, indexed by median.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.distances[from * self.n..(from + 1) * self.n]
    }
}
