//! Cubic polynomial evaluation.

use std::fmt;

/// A cubic polynomial `a·x³ + b·x² + c·x + d` with fixed real coefficients.
///
/// Coefficients are immutable once constructed and passed explicitly to the
/// solvers that evaluate the polynomial.
///
/// # Example
///
/// ```rust
/// use cubix_math::polynomial::Cubic;
///
/// // (x - 1)(x - 2)(x - 3)
/// let cubic = Cubic::new(1.0, -6.0, 11.0, -6.0);
/// assert_eq!(cubic.evaluate(2.0), 0.0);
/// assert_eq!(cubic.evaluate(0.0), -6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    /// Creates a cubic from its coefficients, highest degree first.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a cubic from `[a, b, c, d]`.
    #[must_use]
    pub fn from_coefficients(coefficients: [f64; 4]) -> Self {
        let [a, b, c, d] = coefficients;
        Self::new(a, b, c, d)
    }

    /// Returns the coefficients as `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// The expression is evaluated term by term, left to right, rather than
    /// in Horner form. Root locations near sign changes depend on the exact
    /// rounding of this expression.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x * x + self.b * x * x + self.c * x + self.d
    }

    /// Returns the polynomial as a closure suitable for the solvers.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x^3 + {}x^2 + {}x + {}",
            self.a, self.b, self.c, self.d
        )
    }
}

impl From<[f64; 4]> for Cubic {
    fn from(coefficients: [f64; 4]) -> Self {
        Self::from_coefficients(coefficients)
    }
}
