//! Random instance generation.

use anyhow::{bail, Result};
use rand::Rng;

use super::Instance;

/// Generates a symmetric instance with integer distances drawn uniformly
/// from `1..=max_dist` and a zero diagonal.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_pmedian::instance::generator::random_symmetric;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let inst = random_symmetric(10, 3, 100, &mut rng).unwrap();
/// assert_eq!(inst.distance(2, 7), inst.distance(7, 2));
/// assert_eq!(inst.distance(4, 4), 0.0);
/// ```
pub fn random_symmetric<R: Rng>(n: usize, p: usize, max_dist: u32, rng: &mut R) -> Result<Instance> {
    if max_dist == 0 {
        bail!("max_dist must be at least 1");
    }
    let mut distances = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.random_range(1..=max_dist));
            distances[i * n + j] = d;
            distances[j * n + i] = d;
        }
    }
    Instance::from_flat(n, p, distances)
}
