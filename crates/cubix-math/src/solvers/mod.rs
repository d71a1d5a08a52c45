//! Root-finding algorithms.
//!
//! - [`bisection`]: fixed-iteration bracketing search over a single interval
//!
//! The solver runs a fixed number of halvings rather than stopping at a
//! tolerance. With the default 501 iterations the bracket collapses to
//! adjacent floating-point values long before the loop ends.
//!
//! # Example
//!
//! ```rust
//! use cubix_math::solvers::{bisection, BisectionOutcome, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//!
//! match bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap() {
//!     BisectionOutcome::Root(result) => {
//!         assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-12);
//!     }
//!     BisectionOutcome::NoSignChange { .. } => unreachable!(),
//! }
//! ```

mod bisection;

pub use bisection::bisection;

use crate::error::{MathError, MathResult};

/// Default number of bisection iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 501;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of halvings performed on a bracket that keeps a sign change.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validates the configuration.
    ///
    /// At least one iteration is required, since the reported root is the
    /// last midpoint computed.
    pub fn validate(&self) -> MathResult<()> {
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Result of a converged root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Outcome of bisecting a single interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BisectionOutcome {
    /// The bracket was narrowed for the full iteration budget.
    Root(SolverResult),
    /// Neither half of the interval showed a sign change.
    NoSignChange {
        /// Iteration (1-based) at which the search gave up.
        iterations: u32,
    },
}

impl BisectionOutcome {
    /// Returns the root, if one was found.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            BisectionOutcome::Root(result) => Some(result.root),
            BisectionOutcome::NoSignChange { .. } => None,
        }
    }

    /// Returns the number of iterations consumed.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            BisectionOutcome::Root(result) => result.iterations,
            BisectionOutcome::NoSignChange { iterations } => *iterations,
        }
    }

    /// Returns true if a root was found.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, BisectionOutcome::Root(_))
    }
}
