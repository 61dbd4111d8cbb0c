//! Committed selections.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One committed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The committed text, as written to the input.
    pub text: String,
    pub candidate_id: String,
    pub committed_at: DateTime<Utc>,
}

/// Append-only log of committed selections, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }

    pub fn push(&mut self, text: impl Into<String>, candidate_id: impl Into<String>) {
        self.entries.push(HistoryEntry {
            text: text.into(),
            candidate_id: candidate_id.into(),
            committed_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Committed texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_contains() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push("Rock", "1_opt");
        history.push("Jazz", "7");

        assert_eq!(history.len(), 2);
        assert!(history.contains_text("Rock"));
        assert!(!history.contains_text("rock"));
        assert_eq!(history.texts().collect::<Vec<_>>(), vec!["Rock", "Jazz"]);
        assert_eq!(history.entries()[1].candidate_id, "7");
    }

    #[test]
    fn test_timestamps_are_ordered() {
        let mut history = History::new();
        history.push("a", "1_opt");
        history.push("b", "2_opt");
        let entries = history.entries();
        assert!(entries[0].committed_at <= entries[1].committed_at);
    }
}
