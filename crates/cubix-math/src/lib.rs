//! # Cubix Math
//!
//! Real root scanning for cubic polynomials.
//!
//! This crate provides:
//!
//! - **Polynomial**: The [`Cubic`](polynomial::Cubic) type and its evaluator
//! - **Solvers**: Fixed-iteration bisection over a single interval
//! - **Scan**: Unit-interval scan of [-100, 101] collecting up to three
//!   distinct roots
//!
//! ## Example
//!
//! ```rust
//! use cubix_math::prelude::*;
//!
//! let cubic = Cubic::new(1.0, 0.0, -7.0, 6.0);
//! let roots = scan_roots(&cubic).unwrap();
//!
//! assert_eq!(roots.padded(), [-3.0, 1.0, 2.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod polynomial;
pub mod scan;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::polynomial::Cubic;
    pub use crate::scan::{scan_roots, scan_roots_with, Insertion, RootSet, ROOT_CAPACITY};
    pub use crate::solvers::{bisection, BisectionOutcome, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
