//! `:` commands understood by the REPL.

use core::str::FromStr;

use keypad::{Action, UnknownAction};
use thiserror::Error;

pub const HELP: &str = "\
Type an expression and press Enter to evaluate it. Keys:
  0-9 . + - * / ( )   typed into the display
  =                   evaluate
  s                   square
  r                   square root
  t                   toggle sign
Commands:
  :history            list recent results
  :use N              load result N from the history
  :clear              clear the display
  :delete             delete the last character
  :clear-history      forget all results
  :equals :square :sqrt :toggle-sign
  :help               show this text
  :quit               leave";

/// Names offered for completion.
pub const NAMES: &[&str] = &[
    ":history",
    ":use",
    ":clear",
    ":delete",
    ":clear-history",
    ":equals",
    ":square",
    ":sqrt",
    ":toggle-sign",
    ":help",
    ":quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    History,
    Help,
    Quit,
    Run(Action),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Unknown(#[from] UnknownAction),
    #[error(":use needs a history position, e.g. `:use 1`")]
    MissingPosition,
    #[error("invalid history position '{0}'")]
    InvalidPosition(String),
}

/// Parse a command line, `:` included.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let line = line.strip_prefix(':').unwrap_or(line);
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();

        match name {
            "history" | "h" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "use" => {
                let position = words.next().ok_or(CommandError::MissingPosition)?;
                // Positions are shown starting from 1.
                match position.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Command::Run(Action::SelectHistory(n - 1))),
                    _ => Err(CommandError::InvalidPosition(position.to_string())),
                }
            }
            name => Ok(Command::Run(name.parse::<Action>()?)),
        }
    }
}
