//! Unit-interval scan for the real roots of a cubic.
//!
//! [`scan_roots`] bisects every interval `[i, i + 1]` for `i` in
//! `SCAN_START..=SCAN_END` and collects the distinct roots it finds, in
//! discovery order, into a [`RootSet`] holding at most [`ROOT_CAPACITY`]
//! entries.
//!
//! Roots are compared with exact floating-point equality. An integer root on
//! an interval boundary can be approached from both neighbouring intervals
//! and converge to two values one ulp apart, in which case it is recorded
//! twice and may crowd out a later genuine root.

use crate::error::MathResult;
use crate::polynomial::Cubic;
use crate::solvers::{bisection, BisectionOutcome, SolverConfig};

/// First interval start of the scan.
pub const SCAN_START: i32 = -100;

/// Last interval start of the scan (inclusive).
pub const SCAN_END: i32 = 100;

/// Maximum number of roots recorded.
pub const ROOT_CAPACITY: usize = 3;

/// Result of offering a root to a [`RootSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The root was recorded.
    Added,
    /// An equal root was already recorded.
    Duplicate,
    /// The set was full; the root was dropped.
    Discarded,
}

/// Distinct roots in discovery order, capped at [`ROOT_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootSet {
    roots: Vec<f64>,
    discarded: usize,
}

impl RootSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: Vec::with_capacity(ROOT_CAPACITY),
            discarded: 0,
        }
    }

    /// Offers a root to the set.
    ///
    /// Duplicates are detected before capacity, so re-finding a recorded root
    /// in a full set is not counted as a discard.
    pub fn insert(&mut self, root: f64) -> Insertion {
        #[allow(clippy::float_cmp)]
        if self.roots.iter().any(|&r| r == root) {
            return Insertion::Duplicate;
        }

        if self.is_full() {
            self.discarded += 1;
            return Insertion::Discarded;
        }

        self.roots.push(root);
        Insertion::Added
    }

    /// Returns the recorded roots in discovery order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.roots
    }

    /// Returns the number of recorded roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if no roots were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns true if the set holds [`ROOT_CAPACITY`] roots.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.roots.len() >= ROOT_CAPACITY
    }

    /// Returns how many distinct roots were dropped because the set was full.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Returns the output slots, padding unused ones with `0.0`.
    #[must_use]
    pub fn padded(&self) -> [f64; ROOT_CAPACITY] {
        let mut slots = [0.0; ROOT_CAPACITY];
        for (slot, root) in slots.iter_mut().zip(&self.roots) {
            *slot = *root;
        }
        slots
    }
}

/// Scans `[SCAN_START, SCAN_END + 1]` for roots with the default solver config.
///
/// # Example
///
/// ```rust
/// use cubix_math::polynomial::Cubic;
/// use cubix_math::scan::scan_roots;
///
/// // (x + 3)(x - 1)(x - 2)
/// let roots = scan_roots(&Cubic::new(1.0, 0.0, -7.0, 6.0)).unwrap();
/// assert_eq!(roots.as_slice(), &[-3.0, 1.0, 2.0]);
/// ```
pub fn scan_roots(cubic: &Cubic) -> MathResult<RootSet> {
    scan_roots_with(cubic, &SolverConfig::default())
}

/// Scans `[SCAN_START, SCAN_END + 1]` for roots, one unit interval at a time.
pub fn scan_roots_with(cubic: &Cubic, config: &SolverConfig) -> MathResult<RootSet> {
    let mut roots = RootSet::new();
    let f = cubic.as_fn();

    for start in SCAN_START..=SCAN_END {
        let lo = f64::from(start);
        let hi = f64::from(start + 1);

        let root = match bisection(&f, lo, hi, config)? {
            BisectionOutcome::Root(result) => result.root,
            BisectionOutcome::NoSignChange { .. } => continue,
        };

        match roots.insert(root) {
            Insertion::Added => log::debug!("root {root} recorded from [{lo}, {hi}]"),
            Insertion::Duplicate => log::debug!("root {root} from [{lo}, {hi}] already recorded"),
            Insertion::Discarded => {
                log::warn!("root {root} from [{lo}, {hi}] discarded: {ROOT_CAPACITY} roots already recorded");
            }
        }
    }

    log::debug!(
        "scan of {cubic} found {} root(s), discarded {}",
        roots.len(),
        roots.discarded()
    );

    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_insert_deduplicates_exactly() {
        let mut set = RootSet::new();

        assert_eq!(set.insert(1.0), Insertion::Added);
        assert_eq!(set.insert(1.0), Insertion::Duplicate);
        assert_eq!(set.insert(0.9999999999999998), Insertion::Added);
        assert_eq!(set.as_slice(), &[1.0, 0.9999999999999998]);
    }

    #[test]
    fn test_zero_is_a_recordable_root() {
        let mut set = RootSet::new();

        assert_eq!(set.insert(0.0), Insertion::Added);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut set = RootSet::new();
        for root in [1.0, 2.0, 3.0] {
            assert_eq!(set.insert(root), Insertion::Added);
        }

        assert!(set.is_full());
        assert_eq!(set.insert(4.0), Insertion::Discarded);
        assert_eq!(set.insert(2.0), Insertion::Duplicate);
        assert_eq!(set.insert(5.0), Insertion::Discarded);

        assert_eq!(set.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(set.discarded(), 2);
    }

    #[test]
    fn test_padded_fills_unused_slots() {
        let mut set = RootSet::new();
        assert!(set.is_empty());
        assert_eq!(set.padded(), [0.0, 0.0, 0.0]);

        set.insert(-2.5);
        assert_eq!(set.padded(), [-2.5, 0.0, 0.0]);
    }

    #[test]
    fn test_three_integer_roots() {
        // (x + 3)(x - 1)(x - 2)
        let roots = scan_roots(&Cubic::new(1.0, 0.0, -7.0, 6.0)).unwrap();

        assert_eq!(roots.as_slice(), &[-3.0, 1.0, 2.0]);
        assert_eq!(roots.discarded(), 0);
    }

    #[test]
    fn test_three_isolated_roots() {
        // (x - 0.5)(x - 1.5)(x - 2.5)
        let roots = scan_roots(&Cubic::new(1.0, -4.5, 5.75, -1.875)).unwrap();

        let [r1, r2, r3] = roots.padded();
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(r1, 0.5, epsilon = 1e-12);
        assert_relative_eq!(r2, 1.5, epsilon = 1e-12);
        assert_relative_eq!(r3, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_x_cubed_minus_x() {
        let roots = scan_roots(&Cubic::new(1.0, 0.0, -1.0, 0.0)).unwrap();

        let [r1, r2, r3] = roots.padded();
        assert_eq!(roots.len(), 3);
        assert_eq!(r1, -1.0);
        assert!(r2 > 0.0 && r2 < 1e-150);
        assert_eq!(r3, 1.0);
    }

    #[test]
    fn test_no_root_in_range() {
        // Real root near -126
        let roots = scan_roots(&Cubic::new(1.0, 0.0, 0.0, 2.0e6)).unwrap();

        assert!(roots.is_empty());
        assert_eq!(roots.padded(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_no_real_root() {
        let roots = scan_roots(&Cubic::new(0.0, 1.0, 0.0, 1.0)).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn test_single_real_root() {
        // x^3 + x + 100000 has one real root near -46.41
        let roots = scan_roots(&Cubic::new(1.0, 0.0, 1.0, 100_000.0)).unwrap();

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots.as_slice()[0], -46.408_706_887_218_33, epsilon = 1e-9);
    }

    #[test]
    fn test_boundary_root_recorded_twice() {
        // (x - 1)(x - 2)(x - 3): [0, 1] converges one ulp below 1, [1, 2]
        // starts on an exact zero and converges to 1. Root 3 is crowded out.
        let roots = scan_roots(&Cubic::new(1.0, -6.0, 11.0, -6.0)).unwrap();

        assert_eq!(roots.as_slice(), &[0.9999999999999998, 1.0, 2.0]);
        assert_eq!(roots.discarded(), 1);
    }

    #[test]
    fn test_zero_polynomial_fills_capacity() {
        let roots = scan_roots(&Cubic::new(0.0, 0.0, 0.0, 0.0)).unwrap();

        assert_eq!(roots.as_slice(), &[-100.0, -99.0, -98.0]);
        assert_eq!(roots.discarded(), 198);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let cubic = Cubic::new(2.0, -4.0, -22.0, 24.0);

        let first = scan_roots(&cubic).unwrap();
        let second = scan_roots(&cubic).unwrap();

        assert_eq!(first, second);
    }
}
