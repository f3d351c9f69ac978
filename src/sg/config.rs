//! Shoot & Go configuration.

/// Rule for picking the next point during local descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DescentRule {
    /// Evaluate the whole neighborhood, then move to its best member
    /// if that member strictly improves on the current point.
    #[default]
    Steepest,

    /// Scan the neighborhood in uniformly random order and move to the
    /// first strict improver found.
    FirstImprovement,
}

/// Configuration for Shoot & Go (random-restart local search).
///
/// # Examples
///
/// ```
/// use u_heur::sg::{DescentRule, SgConfig};
///
/// let config = SgConfig::new(1000)
///     .with_max_local_steps(50)
///     .with_descent(DescentRule::FirstImprovement)
///     .with_seed(42);
/// assert_eq!(config.max_evaluations, 1000);
/// assert_eq!(config.max_local_steps, 50);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgConfig {
    /// Evaluation budget for one run.
    pub max_evaluations: usize,

    /// Upper bound on descent steps per restart.
    ///
    /// `0` disables descent entirely (pure Random Shooting);
    /// `usize::MAX`, the default, descends until a local optimum.
    pub max_local_steps: usize,

    /// Local descent rule.
    pub descent: DescentRule,

    /// Random seed (None for a fresh random seed per run).
    pub seed: Option<u64>,
}

impl SgConfig {
    /// Creates a new configuration with the given evaluation budget.
    pub fn new(max_evaluations: usize) -> Self {
        Self {
            max_evaluations,
            max_local_steps: usize::MAX,
            descent: DescentRule::default(),
            seed: None,
        }
    }

    /// Creates a pure Random Shooting configuration: restarts only,
    /// no local descent.
    pub fn random_shooting(max_evaluations: usize) -> Self {
        Self::new(max_evaluations).with_max_local_steps(0)
    }

    /// Sets the per-restart descent step bound.
    pub fn with_max_local_steps(mut self, n: usize) -> Self {
        self.max_local_steps = n;
        self
    }

    /// Sets the local descent rule.
    pub fn with_descent(mut self, descent: DescentRule) -> Self {
        self.descent = descent;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_evaluations == 0 {
            return Err("max_evaluations must be at least 1".into());
        }
        Ok(())
    }
}
