//! Evaluation budget accounting and termination signalling.

use crate::objective::ObjectiveFunction;
use std::fmt;

/// Why a search run stopped.
///
/// Carried as the `Err` arm of [`Evaluator::evaluate`] so that
/// strategies unwind naturally with `?` the moment the run is over.
/// It is a signal, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A point with value at or below the target was evaluated.
    TargetReached,

    /// The evaluation budget is fully spent.
    BudgetExhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::TargetReached => write!(f, "target reached"),
            Termination::BudgetExhausted => write!(f, "budget exhausted"),
        }
    }
}

/// Final report of one search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport<P> {
    /// Best objective value seen across the run.
    pub best_value: f64,

    /// The point that produced `best_value`.
    ///
    /// `None` only for a tracker that never evaluated anything; the
    /// built-in runners always evaluate at least once.
    pub best_point: Option<P>,

    /// Evaluations actually spent.
    pub evaluations: usize,

    /// Evaluations spent by the time the target was reached, if it was.
    ///
    /// `Some` exactly when the run ended with
    /// [`Termination::TargetReached`]; comparing runs by this field
    /// treats failed runs as unbounded cost.
    pub evaluations_to_target: Option<usize>,

    /// Why the run stopped.
    pub termination: Termination,
}

impl<P> RunReport<P> {
    /// Whether the run found a point at or below the target.
    pub fn target_reached(&self) -> bool {
        self.termination == Termination::TargetReached
    }
}

/// Budget-tracking evaluation engine shared by all strategies.
///
/// Strategies never call the objective function directly: every call
/// goes through [`evaluate`](Evaluator::evaluate), which counts it,
/// updates the best point seen, and signals termination once the target
/// or the budget is hit. One tracker serves exactly one run and is
/// consumed into the final [`RunReport`].
pub struct Evaluator<'a, F: ObjectiveFunction> {
    of: &'a F,
    max_evaluations: usize,
    evaluations: usize,
    best_value: f64,
    best_point: Option<F::Point>,
}

impl<'a, F: ObjectiveFunction> Evaluator<'a, F> {
    /// Creates a tracker enforcing the given evaluation budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_evaluations` is zero.
    pub fn new(of: &'a F, max_evaluations: usize) -> Self {
        assert!(max_evaluations > 0, "max_evaluations must be positive");
        Self {
            of,
            max_evaluations,
            evaluations: 0,
            best_value: f64::INFINITY,
            best_point: None,
        }
    }

    /// Evaluates one point, counting it against the budget.
    ///
    /// The best-so-far is updated on strict improvement only, so ties
    /// keep the earliest point. The checks run in a fixed order: target
    /// first, then budget. Reaching the target on the last allowed
    /// evaluation therefore reports [`Termination::TargetReached`].
    pub fn evaluate(&mut self, point: &F::Point) -> Result<f64, Termination> {
        let value = self.of.evaluate(point);
        self.evaluations += 1;

        if value < self.best_value {
            self.best_value = value;
            self.best_point = Some(point.clone());
        }

        if value <= self.of.fstar() {
            return Err(Termination::TargetReached);
        }
        if self.evaluations >= self.max_evaluations {
            return Err(Termination::BudgetExhausted);
        }
        Ok(value)
    }

    /// Evaluations spent so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Evaluations still allowed.
    pub fn remaining(&self) -> usize {
        self.max_evaluations - self.evaluations
    }

    /// The budget this tracker enforces.
    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// Best objective value seen so far.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// The point that produced the best value, once anything was evaluated.
    pub fn best_point(&self) -> Option<&F::Point> {
        self.best_point.as_ref()
    }

    /// Consumes the tracker into the final run report.
    pub fn into_report(self, termination: Termination) -> RunReport<F::Point> {
        let evaluations_to_target = if self.best_value <= self.of.fstar() {
            Some(self.evaluations)
        } else {
            None
        };
        RunReport {
            best_value: self.best_value,
            best_point: self.best_point,
            evaluations: self.evaluations,
            evaluations_to_target,
            termination,
        }
    }
}
