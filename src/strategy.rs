//! Strategy capability interface.

use crate::eval::RunReport;
use crate::objective::ObjectiveFunction;

/// A search strategy that can optimize any [`ObjectiveFunction`].
///
/// Implemented by the configuration types, so a fully specified
/// configuration is a reusable strategy value. Code that compares
/// strategies on the same objective function stays generic:
///
/// ```ignore
/// fn success_rate<F, S>(of: &F, strategy: &S, runs: usize) -> f64
/// where
///     F: ObjectiveFunction,
///     S: SearchStrategy<F>,
/// {
///     let hits = (0..runs).filter(|_| strategy.search(of).target_reached()).count();
///     hits as f64 / runs as f64
/// }
/// ```
pub trait SearchStrategy<F: ObjectiveFunction> {
    /// Runs one search over the objective function and reports the outcome.
    fn search(&self, of: &F) -> RunReport<F::Point>;
}
