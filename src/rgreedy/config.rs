//! Randomized greedy configuration.

/// Configuration for the randomized greedy constructor.
///
/// # Examples
///
/// ```
/// use u_pmedian::rgreedy::RgreedyConfig;
///
/// let config = RgreedyConfig::default().with_k_rcl(5).with_seed(42);
/// assert_eq!(config.k_rcl, 5);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgreedyConfig {
    /// Restricted candidate list size. Larger values trade greedy
    /// quality for diversity.
    pub k_rcl: usize,

    /// Random seed. `None` draws a fresh seed from OS entropy, so
    /// consecutive runs follow distinct sequences.
    pub seed: Option<u64>,
}

impl Default for RgreedyConfig {
    fn default() -> Self {
        Self {
            k_rcl: 3,
            seed: None,
        }
    }
}

impl RgreedyConfig {
    /// Sets the restricted candidate list size.
    pub fn with_k_rcl(mut self, k: usize) -> Self {
        self.k_rcl = k;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.k_rcl == 0 {
            return Err("k_rcl must be at least 1".into());
        }
        Ok(())
    }
}
