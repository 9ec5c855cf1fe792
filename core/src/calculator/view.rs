use super::{ERROR_DISPLAY, Status};
use crate::history::HistoryEntry;

/// Everything a front end needs to draw the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub display: &'a str,
    pub status: &'a Status,
    /// Most recent first.
    pub history: Vec<&'a HistoryEntry>,
    /// The display changed and should be drawn emphasized once.
    pub highlight: bool,
}

impl View<'_> {
    /// Whether the display shows the error sentinel.
    pub fn shows_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}
