//! The evaluation engine.

use bumpalo::Bump;

use super::{EngineOptions, Error};
use crate::{evaluator, format::format_number, parser, sanitize::sanitize};

/// A successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The sanitized text that was evaluated.
    pub expression: String,
    /// The computed value. Always finite.
    pub value: f64,
    /// `value` formatted for the display.
    pub display: String,
}

/// Sanitizes, parses, evaluates and formats arithmetic input.
///
/// # Example
///
/// ```
/// use keypad_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
///
/// let evaluation = engine.evaluate("(1 + 2) * 3").unwrap().unwrap();
/// assert_eq!(evaluation.display, "9");
///
/// // Blank input is a no-op rather than an error.
/// assert!(engine.evaluate("   ").unwrap().is_none());
///
/// assert!(engine.evaluate("5/0").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Evaluate raw input.
    ///
    /// Characters outside the arithmetic set are dropped first. Returns
    /// `Ok(None)` when nothing is left to evaluate.
    pub fn evaluate(&self, raw: &str) -> Result<Option<Evaluation>, Error> {
        let sanitized = sanitize(raw);
        if sanitized.trim().is_empty() {
            tracing::debug!(raw, "nothing to evaluate");
            return Ok(None);
        }

        let arena = Bump::new();
        let parsed = parser::parse_with_max_depth(&arena, &sanitized, self.options.max_depth)?;
        let value = evaluator::eval_with_limits(&parsed, self.options.max_eval_depth)?;
        let formatted = self.format(value)?;
        tracing::debug!(expression = %sanitized, display = %formatted, "evaluated");

        Ok(Some(Evaluation {
            expression: sanitized,
            value,
            display: formatted,
        }))
    }

    /// Format a value computed outside [`evaluate`](Self::evaluate).
    pub fn format(&self, value: f64) -> Result<String, Error> {
        Ok(format_number(value, self.options.precision)?)
    }
}
