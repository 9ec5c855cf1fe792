//! User actions and the keyboard shortcuts that trigger them.

use core::str::FromStr;

use thiserror::Error;

use crate::sanitize::is_allowed;

/// Something the user asked the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit or operator to the display.
    Input(char),
    Clear,
    DeleteLast,
    Evaluate,
    Square,
    SquareRoot,
    ToggleSign,
    ClearHistory,
    /// Load the result of the history entry at this position (0 = most recent).
    SelectHistory(usize),
}

/// A key press, as delivered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
}

/// Map a key press to its action, if it has one.
///
/// Arithmetic characters are typed into the display. `Enter` and `=`
/// evaluate, `Backspace` deletes, `Delete` and `Escape` clear, and `s`, `r`
/// and `t` square, take the square root and toggle the sign.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(c) if is_allowed(c) => Some(Action::Input(c)),
        Key::Char('=') | Key::Enter => Some(Action::Evaluate),
        Key::Backspace => Some(Action::DeleteLast),
        Key::Delete | Key::Escape => Some(Action::Clear),
        Key::Char('s') => Some(Action::Square),
        Key::Char('r') => Some(Action::SquareRoot),
        Key::Char('t') => Some(Action::ToggleSign),
        Key::Char(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

/// Parse the name of a keypad button.
impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "clear" => Ok(Action::Clear),
            "delete" => Ok(Action::DeleteLast),
            "equals" => Ok(Action::Evaluate),
            "square" => Ok(Action::Square),
            "sqrt" => Ok(Action::SquareRoot),
            "toggle-sign" => Ok(Action::ToggleSign),
            "clear-history" => Ok(Action::ClearHistory),
            _ => Err(UnknownAction(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_keys_are_input() {
        for c in "0123456789+-*/().".chars() {
            assert_eq!(action_for_key(Key::Char(c)), Some(Action::Input(c)));
        }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(action_for_key(Key::Enter), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Char('=')), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Backspace), Some(Action::DeleteLast));
        assert_eq!(action_for_key(Key::Delete), Some(Action::Clear));
        assert_eq!(action_for_key(Key::Escape), Some(Action::Clear));
        assert_eq!(action_for_key(Key::Char('s')), Some(Action::Square));
        assert_eq!(action_for_key(Key::Char('r')), Some(Action::SquareRoot));
        assert_eq!(action_for_key(Key::Char('t')), Some(Action::ToggleSign));
    }

    #[test]
    fn test_unmapped_keys() {
        for c in ['x', 'S', ' ', '^', '%'] {
            assert_eq!(action_for_key(Key::Char(c)), None, "key {c:?}");
        }
    }

    #[test]
    fn test_button_names() {
        assert_eq!("equals".parse::<Action>(), Ok(Action::Evaluate));
        assert_eq!("toggle-sign".parse::<Action>(), Ok(Action::ToggleSign));
        assert_eq!("clear-history".parse::<Action>(), Ok(Action::ClearHistory));
        assert_eq!(
            "percent".parse::<Action>(),
            Err(UnknownAction("percent".to_string()))
        );
    }
}
