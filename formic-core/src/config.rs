use crate::types::FormicError;

/// Configuration settings for an ant colony reconstruction run.
///
/// All parameters are validated by [`ColonyConfig::validate`] before a run
/// starts; the defaults work well for spectra of a few hundred fragments.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use formic_core::config::ColonyConfig;
///
/// let config = ColonyConfig::default();
/// assert_eq!(config.ants_count, 20);
/// ```
///
/// ## Reproducible run with a fixed seed
///
/// ```rust
/// use formic_core::config::ColonyConfig;
///
/// let config = ColonyConfig {
///     seed: Some(1234),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ColonyConfig {
    /// Number of ants spawned per iteration.
    ///
    /// Each ant builds one candidate sequence per iteration. More ants
    /// explore more routes per pheromone update at linear cost.
    ///
    /// **Default**: `20`
    pub ants_count: usize,

    /// Exponent on the pheromone term of the selection weight.
    ///
    /// Higher values make ants follow previously reinforced edges more
    /// strongly (exploitation of learned preference).
    ///
    /// **Default**: `2.0`
    pub alpha: f64,

    /// Exponent on the inverse-shift term of the selection weight.
    ///
    /// Higher values make ants prefer tighter fragment overlaps
    /// regardless of pheromone (local overlap quality).
    ///
    /// **Default**: `3.0`
    pub beta: f64,

    /// Fraction of pheromone evaporated each iteration, in `[0, 1)`.
    ///
    /// Every matrix entry is multiplied by `1 - evaporation` before the
    /// best-route reinforcement is deposited.
    ///
    /// **Default**: `0.1`
    pub evaporation: f64,

    /// Iteration budget for the run.
    ///
    /// The colony stops after this many iterations unless a perfect
    /// reconstruction (edit distance 0) is found earlier.
    ///
    /// **Default**: `50`
    pub iterations: usize,

    /// Seed for the random source driving ant selection.
    ///
    /// With a fixed seed, two runs on the same instance and configuration
    /// produce identical best-solution trajectories. `None` seeds from
    /// system entropy.
    ///
    /// **Default**: `None`
    pub seed: Option<u64>,

    /// Suppress per-iteration progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ants_count: 20,
            alpha: 2.0,
            beta: 3.0,
            evaporation: 0.1,
            iterations: 50,
            seed: None,
            quiet: false,
        }
    }
}

impl ColonyConfig {
    /// Checks that every parameter is inside its legal range.
    ///
    /// # Errors
    ///
    /// Returns [`FormicError::InvalidConfiguration`] if `ants_count` or
    /// `iterations` is zero, `evaporation` lies outside `[0, 1)`, or
    /// `alpha`/`beta` are not finite.
    pub fn validate(&self) -> Result<(), FormicError> {
        if self.ants_count == 0 {
            return Err(FormicError::InvalidConfiguration(
                "ants_count must be positive".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(FormicError::InvalidConfiguration(
                "iterations must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(FormicError::InvalidConfiguration(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            )));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(FormicError::InvalidConfiguration(format!(
                "alpha and beta must be finite, got alpha={} beta={}",
                self.alpha, self.beta
            )));
        }
        Ok(())
    }
}
