//! Recent results, most recent first.

use std::collections::VecDeque;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 8;

/// One evaluated expression and the result that was displayed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    expression: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Bounded list of entries. New entries go to the front; once the list is
/// full the oldest entry falls off the back. Entries are never edited.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.saturating_add(1)),
            limit,
        }
    }

    /// Record an entry at the front, evicting the oldest ones past the limit.
    ///
    /// Entries with a blank expression are not recorded. Returns whether the
    /// entry was kept.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) -> bool {
        let entry = HistoryEntry::new(expression, result);
        if entry.expression.trim().is_empty() {
            return false;
        }
        tracing::debug!(expression = %entry.expression, result = %entry.result, "history entry");
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
        self.limit > 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index`, where `0` is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Snapshot of the entries, most recent first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_most_recent_first() {
        let mut history = History::default();
        history.record("1+1", "2");
        history.record("2+2", "4");

        assert_eq!(
            history.list(),
            vec![HistoryEntry::new("2+2", "4"), HistoryEntry::new("1+1", "2")]
        );
        assert_eq!(history.get(0).map(HistoryEntry::result), Some("4"));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_ninth_entry_evicts_the_first() {
        let mut history = History::default();
        for i in 1..=9 {
            history.record(format!("{i}*1"), i.to_string());
        }

        assert_eq!(history.len(), 8);
        let results: Vec<&str> = history.iter().map(HistoryEntry::result).collect();
        assert_eq!(results, vec!["9", "8", "7", "6", "5", "4", "3", "2"]);
    }

    #[test]
    fn test_custom_limit() {
        let mut history = History::new(2);
        history.record("1", "1");
        history.record("2", "2");
        history.record("3", "3");
        assert_eq!(history.len(), 2);
        assert_eq!(history.limit(), 2);
        assert_eq!(history.get(1).map(HistoryEntry::expression), Some("2"));
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        assert!(!history.record("1+1", "2"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_blank_expression_is_ignored() {
        let mut history = History::default();
        assert!(!history.record("", "0"));
        assert!(!history.record("   ", "0"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        for i in 0..5 {
            history.record(i.to_string(), i.to_string());
        }
        history.clear();
        assert!(history.is_empty());

        // Clearing an empty history is fine too.
        history.clear();
        assert_eq!(history.len(), 0);
    }
}
