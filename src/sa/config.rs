//! SA configuration and the budget-scaled cooling schedule.

/// Configuration for the Simulated Annealing algorithm.
///
/// The cooling schedule is geometric in the fraction of the evaluation
/// budget already spent. With coefficient `c = 1 - cooling_rate` and
/// exponent `E = ln(min_temperature / max_temperature) / ln(c)`, the
/// temperature after spending fraction `p` of the budget is
/// `max_temperature * c^(p * E)`: it starts at `max_temperature` and
/// lands on `min_temperature` exactly when the budget runs out,
/// whatever the budget is.
///
/// # Examples
///
/// ```
/// use u_heur::sa::SaConfig;
///
/// let config = SaConfig::new(10_000)
///     .with_max_temperature(100.0)
///     .with_min_temperature(1.0)
///     .with_cooling_rate(0.5)
///     .with_restart_period(500);
/// assert!((config.cooling_coefficient() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Evaluation budget for one run.
    pub max_evaluations: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub max_temperature: f64,

    /// Cooling rate in (0, 1). The geometric coefficient of the
    /// schedule is `1 - cooling_rate`.
    pub cooling_rate: f64,

    /// Final temperature, reached as the budget runs out.
    pub min_temperature: f64,

    /// Reset the trajectory to the best-known point every this many
    /// steps (None = never restart).
    pub restart_period: Option<usize>,

    /// Random seed (None for a fresh random seed per run).
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Creates a new configuration with the given evaluation budget.
    pub fn new(max_evaluations: usize) -> Self {
        Self {
            max_evaluations,
            max_temperature: 1e4,
            cooling_rate: 3e-3,
            min_temperature: 1.0,
            restart_period: None,
            seed: None,
        }
    }

    pub fn with_max_temperature(mut self, t: f64) -> Self {
        self.max_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_restart_period(mut self, period: usize) -> Self {
        self.restart_period = Some(period);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Geometric coefficient of the schedule, `1 - cooling_rate`.
    pub fn cooling_coefficient(&self) -> f64 {
        1.0 - self.cooling_rate
    }

    /// Exponent mapping the full budget onto the final temperature:
    /// `ln(min_temperature / max_temperature) / ln(cooling_coefficient)`.
    pub fn max_exponent(&self) -> f64 {
        (self.min_temperature / self.max_temperature).ln() / self.cooling_coefficient().ln()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_evaluations == 0 {
            return Err("max_evaluations must be at least 1".into());
        }
        if self.max_temperature <= 0.0 {
            return Err("max_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.max_temperature {
            return Err("min_temperature must be less than max_temperature".into());
        }
        if self.restart_period == Some(0) {
            return Err("restart_period must be positive when set".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let config = SaConfig::new(1000);
        assert_eq!(config.max_evaluations, 1000);
        assert!((config.max_temperature - 1e4).abs() < 1e-10);
        assert!((config.cooling_rate - 3e-3).abs() < 1e-15);
        assert!((config.min_temperature - 1.0).abs() < 1e-12);
        assert_eq!(config.restart_period, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::new(1000).validate().is_ok());
    }

    #[test]
    fn test_derived_schedule_constants() {
        let config = SaConfig::new(100)
            .with_max_temperature(100.0)
            .with_min_temperature(1.0)
            .with_cooling_rate(0.5);
        assert!((config.cooling_coefficient() - 0.5).abs() < 1e-12);
        // ln(1/100) / ln(0.5)
        assert!((config.max_exponent() - 6.643856).abs() < 1e-5);
    }

    #[test]
    fn test_validate_zero_budget() {
        assert!(SaConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_max_temperature() {
        let config = SaConfig::new(1000).with_max_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(SaConfig::new(1000).with_cooling_rate(0.0).validate().is_err());
        assert!(SaConfig::new(1000).with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::new(1000).with_cooling_rate(1.5).validate().is_err());
    }

    #[test]
    fn test_validate_bad_min_temperature() {
        let config = SaConfig::new(1000).with_min_temperature(0.0);
        assert!(config.validate().is_err());

        let config = SaConfig::new(1000)
            .with_max_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_restart_period() {
        let config = SaConfig::new(1000).with_restart_period(0);
        assert!(config.validate().is_err());
    }
}
