//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{BisectionOutcome, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Each iteration halves `[lo, hi]` at `mid` and keeps whichever half shows a
/// sign change, testing the left half first:
///
/// - `f(lo) * f(mid) <= 0` keeps `[lo, mid]`
/// - otherwise `f(hi) * f(mid) <= 0` keeps `[mid, hi]`
/// - otherwise the search stops with [`BisectionOutcome::NoSignChange`]
///
/// Endpoint values are evaluated at the current endpoints on every
/// iteration. A zero product counts as a sign change, so an exact root at an
/// endpoint pulls the bracket toward that endpoint.
///
/// The loop runs for exactly `config.max_iterations` halvings unless it stops
/// early. Once a sign change has been kept the bracket never loses it, so an
/// early stop can only happen on the first iteration.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the interval
/// * `b` - Upper bound of the interval, strictly greater than `a`
/// * `config` - Solver configuration
///
/// # Returns
///
/// The last midpoint as the root, or `NoSignChange`. Returns an error if the
/// interval is not finite and strictly ordered, or the config is invalid.
///
/// # Example
///
/// ```rust
/// use cubix_math::solvers::{bisection, BisectionOutcome, SolverConfig};
///
/// // No sign change anywhere on [0, 1]
/// let f = |x: f64| x * x + 1.0;
///
/// let outcome = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert_eq!(outcome, BisectionOutcome::NoSignChange { iterations: 1 });
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<BisectionOutcome>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(MathError::invalid_bracket(a, b));
    }

    let mut lo = a;
    let mut hi = b;
    let mut mid = lo;

    for iteration in 1..=config.max_iterations {
        mid = (lo + hi) / 2.0;
        let f_mid = f(mid);

        if f(lo) * f_mid <= 0.0 {
            hi = mid;
        } else if f(hi) * f_mid <= 0.0 {
            lo = mid;
        } else {
            log::trace!("no sign change on [{lo}, {hi}] at iteration {iteration}");
            return Ok(BisectionOutcome::NoSignChange {
                iterations: iteration,
            });
        }
    }

    Ok(BisectionOutcome::Root(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual: f(mid),
    }))
}
