//! Shoot & Go execution loop.

use super::config::{DescentRule, SgConfig};
use crate::eval::{Evaluator, RunReport, Termination};
use crate::objective::ObjectiveFunction;
use crate::strategy::SearchStrategy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Executes Shoot & Go (random-restart local search).
pub struct SgRunner;

impl SgRunner {
    /// Runs one Shoot & Go search.
    pub fn run<F: ObjectiveFunction>(of: &F, config: &SgConfig) -> RunReport<F::Point> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(of, config, &mut rng)
    }

    /// Runs one Shoot & Go search with a caller-owned RNG.
    ///
    /// Useful for batches of runs drawing from a single random stream.
    pub fn run_with_rng<F: ObjectiveFunction, R: Rng>(
        of: &F,
        config: &SgConfig,
        rng: &mut R,
    ) -> RunReport<F::Point> {
        config.validate().expect("invalid SgConfig");

        let mut tracker = Evaluator::new(of, config.max_evaluations);
        let termination = Self::restart_loop(of, config, &mut tracker, rng);
        tracker.into_report(termination)
    }

    /// Shoots random points and descends from each until an evaluation
    /// signals termination.
    fn restart_loop<F: ObjectiveFunction, R: Rng>(
        of: &F,
        config: &SgConfig,
        tracker: &mut Evaluator<'_, F>,
        rng: &mut R,
    ) -> Termination {
        loop {
            let shot = of.generate_point(rng);
            let value = match tracker.evaluate(&shot) {
                Ok(value) => value,
                Err(termination) => return termination,
            };
            if config.max_local_steps > 0 {
                if let Err(termination) = Self::descend(of, config, tracker, shot, value, rng) {
                    return termination;
                }
            }
        }
    }

    /// Local descent from an already-evaluated starting point.
    ///
    /// Walks distance-1 neighborhoods for at most `max_local_steps`
    /// rounds, moving only on strict improvement over the local best,
    /// which starts at the shot point and its value. A round without
    /// improvement means a local optimum; the shot point is never
    /// re-evaluated.
    fn descend<F: ObjectiveFunction, R: Rng>(
        of: &F,
        config: &SgConfig,
        tracker: &mut Evaluator<'_, F>,
        start: F::Point,
        start_value: f64,
        rng: &mut R,
    ) -> Result<(), Termination> {
        let mut best = start;
        let mut best_value = start_value;

        for _ in 0..config.max_local_steps {
            let mut neighborhood = of.neighborhood(&best, 1);
            if config.descent == DescentRule::FirstImprovement {
                neighborhood.shuffle(rng);
            }

            let mut improved = false;
            for neighbor in neighborhood {
                let value = tracker.evaluate(&neighbor)?;
                if value < best_value {
                    best = neighbor;
                    best_value = value;
                    improved = true;
                    if config.descent == DescentRule::FirstImprovement {
                        break;
                    }
                }
            }
            if !improved {
                break;
            }
        }
        Ok(())
    }
}

impl<F: ObjectiveFunction> SearchStrategy<F> for SgConfig {
    fn search(&self, of: &F) -> RunReport<F::Point> {
        SgRunner::run(of, self)
    }
}
