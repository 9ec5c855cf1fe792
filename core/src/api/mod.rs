//! Public API for the keypad calculator.
//!
//! # Example
//!
//! ```
//! use keypad_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let evaluation = engine.evaluate("2*(3+4)").unwrap().unwrap();
//! assert_eq!(evaluation.value, 14.0);
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{Engine, Evaluation};
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::{CalculatorOptions, EngineOptions};
