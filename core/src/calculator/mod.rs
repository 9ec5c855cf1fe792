//! Calculator state and the operations behind each keypad button.
//!
//! A [`Calculator`] owns everything the user sees: the display, the status
//! line and the history. Front ends feed it [`Action`]s (or [`Key`]s) and
//! draw its [`View`].
//!
//! ```
//! use keypad_core::calculator::{Action, Calculator};
//!
//! let mut calc = Calculator::default();
//! for c in "6*7".chars() {
//!     calc.apply(Action::Input(c));
//! }
//! calc.apply(Action::Evaluate);
//! assert_eq!(calc.display(), "42");
//! assert_eq!(calc.history().len(), 1);
//! ```

mod action;
pub mod status;
mod view;


pub use action::{Action, Key, UnknownAction, action_for_key};
pub use status::Status;
pub use view::View;

use crate::{
    api::{CalculatorOptions, Engine, Error},
    history::History,
    sanitize::is_allowed,
};

/// Display text used after a failed operation.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Debug)]
pub struct Calculator {
    engine: Engine,
    display: String,
    status: Status,
    history: History,
    highlight: bool,
    last_error: Option<Error>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorOptions::default())
    }
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Self {
            engine: Engine::new(options.engine),
            display: String::new(),
            status: Status::info(status::READY),
            history: History::new(options.history_limit),
            highlight: false,
            last_error: None,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot of the state for rendering.
    pub fn view(&self) -> View<'_> {
        View {
            display: &self.display,
            status: &self.status,
            history: self.history.iter().collect(),
            highlight: self.highlight,
        }
    }

    /// Returns whether the display changed since the last call, and resets
    /// the flag.
    pub fn take_highlight(&mut self) -> bool {
        core::mem::take(&mut self.highlight)
    }

    /// The engine error behind the most recent failure, if any. Consumed by
    /// this call.
    pub fn take_last_error(&mut self) -> Option<Error> {
        self.last_error.take()
    }

    /// Run the action bound to `key`. Returns `false` for unbound keys.
    pub fn press(&mut self, key: Key) -> bool {
        match action_for_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, display = %self.display, "apply");
        match action {
            Action::Input(c) => self.input(c),
            Action::Clear => self.clear(),
            Action::DeleteLast => self.delete_last(),
            Action::Evaluate => self.evaluate(),
            Action::Square => self.square(),
            Action::SquareRoot => self.square_root(),
            Action::ToggleSign => self.toggle_sign(),
            Action::ClearHistory => self.clear_history(),
            Action::SelectHistory(index) => self.select_history(index),
        }
    }

    /// Append a digit or operator. Other characters are ignored.
    pub fn input(&mut self, c: char) {
        if !is_allowed(c) {
            return;
        }
        if self.display == ERROR_DISPLAY {
            self.display.clear();
        }
        self.display.push(c);
        self.highlight = true;
        self.status = Status::default();
    }

    pub fn clear(&mut self) {
        self.display.clear();
        self.status = Status::info(status::CLEARED);
    }

    pub fn delete_last(&mut self) {
        if self.display == ERROR_DISPLAY {
            self.display.clear();
        } else {
            self.display.pop();
        }
    }

    /// Evaluate the display and record the result in the history.
    pub fn evaluate(&mut self) {
        match self.engine.evaluate(&self.display) {
            Ok(None) => {}
            Ok(Some(evaluation)) => {
                let expression = core::mem::take(&mut self.display);
                self.history.record(expression, evaluation.display.clone());
                self.show(evaluation.display);
                self.status = Status::info(status::RESULT_ADDED);
            }
            Err(err) => self.fail(Some(err), status::CHECK_EXPRESSION),
        }
    }

    /// Square the value of the display, recorded as `<display>²`.
    pub fn square(&mut self) {
        let squared = match self.current_value() {
            Ok(None) => return,
            Ok(Some(value)) => self.engine.format(value * value),
            Err(err) => Err(err),
        };
        match squared {
            Ok(result) => {
                self.history
                    .record(format!("{}²", self.display), result.clone());
                self.show(result);
            }
            Err(err) => self.fail(Some(err), status::SQUARE_FAILED),
        }
    }

    /// Square root of the value of the display, recorded as `√(<display>)`.
    pub fn square_root(&mut self) {
        let rooted = match self.current_value() {
            Ok(None) => return,
            Ok(Some(value)) if value < 0.0 => {
                return self.fail(None, status::NEGATIVE_ROOT);
            }
            Ok(Some(value)) => self.engine.format(value.sqrt()),
            Err(err) => Err(err),
        };
        match rooted {
            Ok(result) => {
                self.history
                    .record(format!("√({})", self.display), result.clone());
                self.show(result);
            }
            Err(err) => self.fail(Some(err), status::SQUARE_ROOT_FAILED),
        }
    }

    /// Negate the value of the display. Not recorded in the history.
    pub fn toggle_sign(&mut self) {
        let toggled = match self.current_value() {
            Ok(None) => return,
            Ok(Some(value)) => self.engine.format(-value),
            Err(err) => Err(err),
        };
        match toggled {
            Ok(result) => self.show(result),
            Err(err) => self.fail(Some(err), status::TOGGLE_SIGN_FAILED),
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.status = Status::info(status::HISTORY_CLEARED);
    }

    /// Load the result of the history entry at `index` (0 = most recent)
    /// into the display. Out-of-range indices are ignored.
    pub fn select_history(&mut self, index: usize) {
        let Some(entry) = self.history.get(index) else {
            return;
        };
        self.display = entry.result().to_string();
        self.status = Status::info(status::LOADED_FROM_HISTORY);
        self.highlight = true;
    }

    fn current_value(&self) -> Result<Option<f64>, Error> {
        Ok(self
            .engine
            .evaluate(&self.display)?
            .map(|evaluation| evaluation.value))
    }

    fn show(&mut self, result: String) {
        self.display = result;
        self.highlight = true;
        self.last_error = None;
    }

    fn fail(&mut self, err: Option<Error>, message: &str) {
        tracing::debug!(display = %self.display, error = ?err, status = message, "operation failed");
        self.display = ERROR_DISPLAY.to_string();
        self.status = Status::error(message);
        self.last_error = err;
    }
}
