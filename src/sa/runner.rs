//! SA execution loop.

use super::config::SaConfig;
use crate::eval::{Evaluator, RunReport, Termination};
use crate::objective::ObjectiveFunction;
use crate::strategy::SearchStrategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs one SA search.
    pub fn run<F: ObjectiveFunction>(of: &F, config: &SaConfig) -> RunReport<F::Point> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(of, config, &mut rng)
    }

    /// Runs one SA search with a caller-owned RNG.
    ///
    /// Useful for batches of runs drawing from a single random stream.
    pub fn run_with_rng<F: ObjectiveFunction, R: Rng>(
        of: &F,
        config: &SaConfig,
        rng: &mut R,
    ) -> RunReport<F::Point> {
        config.validate().expect("invalid SaConfig");

        let mut tracker = Evaluator::new(of, config.max_evaluations);
        let termination = Self::anneal(of, config, &mut tracker, rng);
        tracker.into_report(termination)
    }

    /// Annealing trajectory: one neighbor evaluation per step, with the
    /// temperature driven by the fraction of the budget already spent.
    fn anneal<F: ObjectiveFunction, R: Rng>(
        of: &F,
        config: &SaConfig,
        tracker: &mut Evaluator<'_, F>,
        rng: &mut R,
    ) -> Termination {
        let mut current = of.generate_point(rng);
        let mut current_value = match tracker.evaluate(&current) {
            Ok(value) => value,
            Err(termination) => return termination,
        };
        let mut steps = 1usize;

        loop {
            if let Some(period) = config.restart_period {
                if steps.is_multiple_of(period) {
                    current = tracker
                        .best_point()
                        .expect("at least one evaluation before any restart")
                        .clone();
                    current_value = tracker.best_value();
                }
            }

            let temperature =
                temperature_at(config, tracker.evaluations(), tracker.max_evaluations());

            let mut neighborhood = of.neighborhood(&current, 1);
            assert!(
                !neighborhood.is_empty(),
                "neighborhood must not be empty for an annealing move"
            );
            let candidate = neighborhood.swap_remove(rng.random_range(0..neighborhood.len()));
            let candidate_value = match tracker.evaluate(&candidate) {
                Ok(value) => value,
                Err(termination) => return termination,
            };

            // Metropolis criterion: improvements and ties always pass.
            let accept = candidate_value < current_value
                || ((current_value - candidate_value) / temperature).exp()
                    > rng.random_range(0.0..1.0);
            if accept {
                current = candidate;
                current_value = candidate_value;
            }
            steps += 1;
        }
    }
}

impl<F: ObjectiveFunction> SearchStrategy<F> for SaConfig {
    fn search(&self, of: &F) -> RunReport<F::Point> {
        SaRunner::run(of, self)
    }
}

/// Temperature after `spent` of `budget` evaluations.
///
/// Geometric in the budget fraction: `max_temperature` at zero,
/// `min_temperature` once the budget is fully spent. The annealing loop
/// reads both counts from the shared evaluation tracker.
fn temperature_at(config: &SaConfig, spent: usize, budget: usize) -> f64 {
    let fraction = spent as f64 / budget as f64;
    config.max_temperature * config.cooling_coefficient().powf(fraction * config.max_exponent())
}
