//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the arithmetic itself fails (division by zero, a
//!   result that is not a finite number).
//!
//! - **Resource exceeded errors**: evaluation went deeper than the configured
//!   limit.

use thiserror::Error;

use crate::parser::Span;

/// Evaluation error with the source and span it was raised for.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub src: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalErrorKind {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

/// Errors raised by the arithmetic itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Division by zero. `divisor` points at the operand that evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero { divisor: Option<Span> },

    /// Overflow to infinity, or NaN.
    #[error("Result is not a finite number")]
    NonFinite,
}

/// Resource limit exceeded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceExceeded {
    /// Evaluation recursion depth exceeded.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}
