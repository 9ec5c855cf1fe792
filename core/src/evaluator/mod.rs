//! Tree-walking evaluator for parsed arithmetic.
//!
//! ## Design Principles
//!
//! - **Never panic**: adversarial input is reported as an [`EvalError`]
//! - **Stack-safe**: depth tracking bounds the recursion
//! - **Finite**: every intermediate value is checked, so `1/0` and overflow
//!   never leak out as infinities
//!
//! ## Example
//!
//! ```
//! use keypad_core::{evaluator, parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "1+2*3").unwrap();
//! assert_eq!(evaluator::eval(&parsed).unwrap(), 7.0);
//! ```

mod error;
mod eval;
mod operators;


pub use error::{EvalError, EvalErrorKind, ResourceExceeded, RuntimeError};
pub use eval::Evaluator;

use crate::parser::ParsedExpr;

/// Default evaluation depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Limits applied while evaluating.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a parsed expression with default limits.
pub fn eval(parsed: &ParsedExpr<'_>) -> Result<f64, EvalError> {
    eval_with_limits(parsed, DEFAULT_MAX_DEPTH)
}

/// Evaluate a parsed expression with a custom depth limit.
pub fn eval_with_limits(parsed: &ParsedExpr<'_>, max_depth: usize) -> Result<f64, EvalError> {
    Evaluator::new(EvaluatorOptions { max_depth }, parsed).eval()
}
