//! Public error types for the keypad API.
//!
//! Internal errors (parse, evaluation, formatting) are converted to these
//! types at the [`Engine`](super::Engine) boundary.

use thiserror::Error;

use crate::evaluator::{EvalError, EvalErrorKind, RuntimeError};
use crate::format::FormatError;
use crate::parser::{ParseError, Span};

/// Public error type for all engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The expression could not be parsed.
    #[error("Compilation failed with {} error(s)", .diagnostics.len())]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    /// Evaluation failed (e.g., division by zero, overflow).
    #[error("Runtime error: {}", .diagnostic.message)]
    Runtime { diagnostic: Diagnostic, src: String },

    /// Resource limits exceeded (e.g., nesting too deep).
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),

    /// A computed value cannot be displayed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics. Every diagnostic the engine raises is an
/// error: evaluation cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Related information for a diagnostic (e.g., "input ends here").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let diagnostic = err.to_diagnostic();
        Error::Compilation {
            diagnostics: vec![diagnostic],
            src: err.src,
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err.kind {
            EvalErrorKind::ResourceExceeded(res_err) => Error::ResourceExceeded(res_err.to_string()),
            EvalErrorKind::Runtime(runtime_err) => {
                let (code, help, related): (&str, Vec<String>, Vec<RelatedInfo>) = match &runtime_err {
                    RuntimeError::DivisionByZero { divisor } => (
                        "R001",
                        vec!["Change the divisor to a non-zero value".to_string()],
                        divisor
                            .iter()
                            .map(|span| RelatedInfo {
                                span: span.clone(),
                                message: "this evaluates to zero".to_string(),
                            })
                            .collect(),
                    ),
                    RuntimeError::NonFinite => ("R002", vec![], vec![]),
                };
                Error::Runtime {
                    diagnostic: Diagnostic {
                        severity: Severity::Error,
                        message: runtime_err.to_string(),
                        span: err.span,
                        related,
                        help,
                        code: Some(code.to_string()),
                    },
                    src: err.src,
                }
            }
        }
    }
}
