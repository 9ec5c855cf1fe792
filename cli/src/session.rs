//! Line-oriented driver shared by the REPL and piped input.

use std::io::{self, Write};

use keypad::{Action, Calculator, Key, action_for_key};

use crate::commands::{Command, HELP};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Press every character of `line` as a key, then `Enter`, unless the last
/// bound key already ran an action of its own (`3s` squares and stops there).
pub fn press_line(calc: &mut Calculator, line: &str) {
    let mut ends_with_action = false;
    for c in line.chars() {
        if let Some(action) = action_for_key(Key::Char(c)) {
            ends_with_action = !matches!(action, Action::Input(_));
            calc.apply(action);
        }
    }
    if !ends_with_action {
        calc.press(Key::Enter);
    }
}

pub struct Session {
    calc: Calculator,
    renderer: Renderer,
    diagnostics: bool,
}

impl Session {
    pub fn new(calc: Calculator, renderer: Renderer, diagnostics: bool) -> Self {
        Self {
            calc,
            renderer,
            diagnostics,
        }
    }

    /// Handle one line of input and write what the user should see to `out`.
    pub fn handle_line<W: Write + ?Sized>(&mut self, line: &str, out: &mut W) -> io::Result<Outcome> {
        if line.trim_start().starts_with(':') {
            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(Outcome::Quit),
                Ok(Command::Help) => {
                    writeln!(out, "{HELP}")?;
                    return Ok(Outcome::Continue);
                }
                Ok(Command::History) => {
                    writeln!(out, "{}", self.renderer.history(&self.calc.view().history))?;
                    return Ok(Outcome::Continue);
                }
                Ok(Command::Run(action)) => self.calc.apply(action),
                Err(err) => {
                    tracing::debug!(line, %err, "bad command");
                    writeln!(out, "{}", self.renderer.problem(&err.to_string()))?;
                    return Ok(Outcome::Continue);
                }
            }
        } else {
            press_line(&mut self.calc, line);
        }

        self.show(out)?;
        Ok(Outcome::Continue)
    }

    fn show<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.renderer.view(&self.calc.view()))?;
        self.calc.take_highlight();

        if let Some(err) = self.calc.take_last_error()
            && self.diagnostics
        {
            write!(out, "{}", self.renderer.diagnostic(&err))?;
        }
        Ok(())
    }
}
