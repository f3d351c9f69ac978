//! Core contract between objective functions and search strategies.

use rand::Rng;

/// Defines a black-box objective function with a known target value.
///
/// The user implements random point generation, evaluation, and
/// neighborhood enumeration. The framework handles budget accounting,
/// best-so-far tracking, and termination.
///
/// # Minimization
///
/// Searches minimize the objective. A run succeeds once it evaluates a
/// point whose value is at or below [`fstar`](ObjectiveFunction::fstar).
/// For maximization, negate the value and the target.
///
/// # Examples
///
/// ```ignore
/// /// f(x) = |x - 50| over the integers 0..800, known optimum 0.
/// struct Ridge;
///
/// impl ObjectiveFunction for Ridge {
///     type Point = i64;
///
///     fn generate_point<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(0..800)
///     }
///
///     fn evaluate(&self, x: &i64) -> f64 {
///         (x - 50).abs() as f64
///     }
///
///     fn fstar(&self) -> f64 {
///         0.0
///     }
///
///     fn neighborhood(&self, x: &i64, distance: usize) -> Vec<i64> {
///         let d = distance as i64;
///         (x - d..=x + d)
///             .filter(|&n| n != *x && (0..800).contains(&n))
///             .collect()
///     }
/// }
/// ```
pub trait ObjectiveFunction {
    /// The domain point representation type.
    type Point: Clone;

    /// Draws a uniformly random point from the domain.
    fn generate_point<R: Rng>(&self, rng: &mut R) -> Self::Point;

    /// Computes the objective value of a point. Lower is better.
    ///
    /// Must be pure: the same point always yields the same value.
    fn evaluate(&self, point: &Self::Point) -> f64;

    /// The known optimal (or target) objective value.
    fn fstar(&self) -> f64;

    /// Enumerates the neighbors of a point up to the given distance.
    ///
    /// The order is deterministic for a given point; callers that need a
    /// random scan order shuffle the result themselves. The neighborhood
    /// must be non-empty wherever a local move is possible; it may be
    /// empty or smaller than usual at a domain boundary.
    fn neighborhood(&self, point: &Self::Point, distance: usize) -> Vec<Self::Point>;
}
