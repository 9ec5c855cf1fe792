//! Terminal rendering of the calculator state.

use keypad::{Error, HistoryEntry, Status, View, render_error_to_string, render_error_to_string_no_color};
use nu_ansi_term::{Color, Style};

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// The display line, followed by the status line when there is one.
    pub fn view(&self, view: &View<'_>) -> String {
        let mut style = Style::new();
        if view.shows_error() {
            style = style.fg(Color::Red);
        }
        if view.highlight {
            style = style.bold();
        }

        let mut out = self.paint(style, &format!("= {}", view.display));
        if let Some(status) = self.status(view.status) {
            out.push('\n');
            out.push_str(&status);
        }
        out
    }

    pub fn status(&self, status: &Status) -> Option<String> {
        if status.message().is_empty() {
            return None;
        }
        let color = if status.is_error() {
            Color::Red
        } else {
            Color::DarkGray
        };
        Some(self.paint(Style::new().fg(color), status.message()))
    }

    /// Numbered list of entries, most recent first.
    pub fn history(&self, entries: &[&HistoryEntry]) -> String {
        if entries.is_empty() {
            return self.paint(Style::new().fg(Color::DarkGray), "No history yet");
        }

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{:>3}. {} = {}",
                    i + 1,
                    entry.expression(),
                    self.paint(Style::new().bold(), entry.result())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn problem(&self, message: &str) -> String {
        self.paint(Style::new().fg(Color::Yellow), message)
    }

    pub fn diagnostic(&self, error: &Error) -> String {
        if self.color {
            render_error_to_string(error)
        } else {
            render_error_to_string_no_color(error)
        }
    }
}
