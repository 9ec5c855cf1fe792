//! The status line under the display.

pub const READY: &str = "Ready";
pub const CLEARED: &str = "Cleared";
pub const HISTORY_CLEARED: &str = "History cleared";
pub const RESULT_ADDED: &str = "Result added to history";
pub const LOADED_FROM_HISTORY: &str = "Loaded value from history";
pub const CHECK_EXPRESSION: &str = "Please check the expression";
pub const SQUARE_FAILED: &str = "Unable to square this value";
pub const SQUARE_ROOT_FAILED: &str = "Cannot take square root";
pub const NEGATIVE_ROOT: &str = "Cannot take square root of a negative number";
pub const TOGGLE_SIGN_FAILED: &str = "Unable to toggle sign";

/// Message shown under the display. Errors are rendered differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    message: String,
    is_error: bool,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}
