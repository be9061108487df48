//! Pipeline configuration.

use crate::rgreedy::RgreedyConfig;
use crate::swap::SwapConfig;

/// Configuration for the full construct-then-refine pipeline.
///
/// # Examples
///
/// ```
/// use u_pmedian::solver::PMedianConfig;
///
/// let config = PMedianConfig::default().with_k_rcl(1).with_max_swaps(50);
/// assert_eq!(config.rgreedy.k_rcl, 1);
/// assert_eq!(config.swap.max_swaps, 50);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PMedianConfig {
    /// Constructive phase parameters.
    pub rgreedy: RgreedyConfig,
    /// Local search parameters.
    pub swap: SwapConfig,
}

impl PMedianConfig {
    /// Replaces the constructive phase configuration.
    pub fn with_rgreedy(mut self, rgreedy: RgreedyConfig) -> Self {
        self.rgreedy = rgreedy;
        self
    }

    /// Replaces the local search configuration.
    pub fn with_swap(mut self, swap: SwapConfig) -> Self {
        self.swap = swap;
        self
    }

    /// Sets the restricted candidate list size.
    pub fn with_k_rcl(mut self, k: usize) -> Self {
        self.rgreedy.k_rcl = k;
        self
    }

    /// Sets the constructor's random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rgreedy.seed = Some(seed);
        self
    }

    /// Caps the number of accepted swaps. 0 = no limit.
    pub fn with_max_swaps(mut self, n: usize) -> Self {
        self.swap.max_swaps = n;
        self
    }

    /// Validates both phases.
    pub fn validate(&self) -> Result<(), String> {
        self.rgreedy.validate()?;
        self.swap.validate()
    }
}
