//! Configuration options for the engine and the calculator.

use crate::{
    evaluator, format::DEFAULT_PRECISION, history::DEFAULT_HISTORY_LIMIT,
    parser::DEFAULT_MAX_DEPTH,
};

/// Configuration options for the evaluation engine.
///
/// # Example
///
/// ```
/// use keypad_core::api::EngineOptions;
///
/// let options = EngineOptions {
///     max_depth: 64,
///     ..EngineOptions::default()
/// };
/// assert_eq!(options.precision, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum parenthesis nesting accepted by the parser.
    ///
    /// Default: 256
    pub max_depth: usize,

    /// Maximum evaluation stack depth. Parentheses and signs count towards
    /// it; the operands of a flat chain like `1+2+3` do not.
    ///
    /// Default: 1000
    pub max_eval_depth: usize,

    /// Fractional digits kept when formatting a non-integer result.
    ///
    /// Default: 8
    pub precision: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_eval_depth: evaluator::DEFAULT_MAX_DEPTH,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Configuration options for a [`Calculator`](crate::calculator::Calculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Options for the underlying engine.
    pub engine: EngineOptions,

    /// Number of history entries kept.
    ///
    /// Default: 8
    pub history_limit: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
