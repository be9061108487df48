//! Swap local search configuration.

/// Configuration for the swap local search.
///
/// # Examples
///
/// ```
/// use u_pmedian::swap::SwapConfig;
///
/// let config = SwapConfig::default()
///     .with_improvement_epsilon(1e-7)
///     .with_max_swaps(1000);
/// assert_eq!(config.max_swaps, 1000);
/// assert!((config.drift_tolerance - 1e-5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapConfig {
    /// A swap is accepted only when its delta is below `-improvement_epsilon`.
    pub improvement_epsilon: f64,

    /// Maximum gap tolerated between the incrementally tracked cost and
    /// the rebuilt bookkeeping cost before the tracked cost is reset.
    pub drift_tolerance: f64,

    /// Maximum number of accepted swaps. 0 = no limit.
    pub max_swaps: usize,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            improvement_epsilon: 1e-9,
            drift_tolerance: 1e-5,
            max_swaps: 0,
        }
    }
}

impl SwapConfig {
    /// Sets the minimum improvement a swap must achieve to be accepted.
    pub fn with_improvement_epsilon(mut self, eps: f64) -> Self {
        self.improvement_epsilon = eps;
        self
    }

    /// Sets the tolerated gap between tracked and rebuilt cost.
    pub fn with_drift_tolerance(mut self, tol: f64) -> Self {
        self.drift_tolerance = tol;
        self
    }

    /// Sets the maximum number of accepted swaps (0 = no limit).
    pub fn with_max_swaps(mut self, n: usize) -> Self {
        self.max_swaps = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.improvement_epsilon >= 0.0 && self.improvement_epsilon.is_finite()) {
            return Err(format!(
                "improvement_epsilon must be finite and non-negative, got {}",
                self.improvement_epsilon
            ));
        }
        if !(self.drift_tolerance >= 0.0 && self.drift_tolerance.is_finite()) {
            return Err(format!(
                "drift_tolerance must be finite and non-negative, got {}",
                self.drift_tolerance
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwapConfig::default();
        assert!((config.improvement_epsilon - 1e-9).abs() < 1e-20);
        assert!((config.drift_tolerance - 1e-5).abs() < 1e-15);
        assert_eq!(config.max_swaps, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SwapConfig::default()
            .with_improvement_epsilon(1e-6)
            .with_drift_tolerance(0.0)
            .with_max_swaps(25);
        assert!((config.improvement_epsilon - 1e-6).abs() < 1e-18);
        assert_eq!(config.drift_tolerance, 0.0);
        assert_eq!(config.max_swaps, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_epsilon() {
        let config = SwapConfig::default().with_improvement_epsilon(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_drift() {
        let config = SwapConfig::default().with_drift_tolerance(f64::NAN);
        assert!(config.validate().is_err());
    }
}
