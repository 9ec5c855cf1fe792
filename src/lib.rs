//! Keypad - a keypad calculator with a short result history
//!
//! # Overview
//!
//! Input goes through four stages:
//!
//! 1. **Sanitize**: anything other than digits, `.`, `+ - * /` and
//!    parentheses is dropped.
//! 2. **Parse**: the remaining text is parsed with the usual precedence
//!    (`*` and `/` before `+` and `-`, unary signs binding tightest).
//! 3. **Evaluate**: the tree is reduced to a finite `f64`. Division by zero
//!    is an error, never infinity.
//! 4. **Format**: integers print as-is, everything else is rounded to eight
//!    fractional digits with trailing zeros removed.
//!
//! # Quick Start
//!
//! ```
//! use keypad::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let evaluation = engine.evaluate("1/3").unwrap().unwrap();
//! assert_eq!(evaluation.display, "0.33333333");
//! ```
//!
//! # Calculator
//!
//! [`Calculator`] keeps the display, a status line and the eight most recent
//! results:
//!
//! ```
//! use keypad::{Action, Calculator};
//!
//! let mut calc = Calculator::default();
//! for c in "3".chars() {
//!     calc.apply(Action::Input(c));
//! }
//! calc.apply(Action::Square);
//! assert_eq!(calc.display(), "9");
//! assert_eq!(calc.history().get(0).unwrap().expression(), "3²");
//! ```

mod error_renderer;

// Re-export public API from keypad_core
pub use keypad_core::api::{
    CalculatorOptions, Diagnostic, Engine, EngineOptions, Error, Evaluation, RelatedInfo, Severity,
};

pub use keypad_core::calculator::{
    self, Action, Calculator, ERROR_DISPLAY, Key, Status, UnknownAction, View, action_for_key,
};
pub use keypad_core::history::{History, HistoryEntry};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
