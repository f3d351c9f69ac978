//! Budget-driven black-box optimization heuristics.
//!
//! Searches the domain of an arbitrary objective function for a point
//! whose value reaches a known target, under a hard budget of function
//! evaluations. The domain stays opaque: continuous, discrete, or
//! combinatorial problems all plug in through the same
//! [`objective::ObjectiveFunction`] contract.
//!
//! Two search strategies are provided:
//!
//! - **Shoot & Go (SG)**: Random-restart local search. Shoots a random
//!   point, descends through its neighborhood while strict improvement
//!   lasts, repeats.
//! - **Simulated Annealing (SA)**: Single-trajectory search with a
//!   geometric cooling schedule rescaled to the evaluation budget and
//!   an optional periodic restart to the best-known point.
//!
//! # Architecture
//!
//! Strategies never call the objective function directly. Every call
//! goes through an [`eval::Evaluator`], which counts it against the
//! budget, tracks the best point seen, and signals termination the
//! moment the target is reached or the budget runs out. The signal
//! travels as the `Err` arm of each evaluation, so strategy loops
//! unwind with `?` and every run ends with an exact accounting in its
//! [`eval::RunReport`]. Comparing strategies on equal budgets is then a
//! matter of implementing [`strategy::SearchStrategy`] once per
//! configuration type.

pub mod eval;
pub mod objective;
pub mod sa;
pub mod sg;
pub mod strategy;
