//! Query-match emphasis for display text.
//!
//! Matching is a case-insensitive literal comparison; the matched slice
//! keeps the casing of the display text.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Where a match may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only a match at the very start of the text is emphasized.
    Prefix,
    /// Every non-overlapping match is emphasized.
    Anywhere,
}

/// A run of display text, emphasized or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    pub emphasized: bool,
}

/// Display text split into plain and emphasized fragments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HighlightedText {
    fragments: Vec<Fragment>,
}

impl HighlightedText {
    /// Text with no emphasis.
    pub fn plain(text: &str) -> Self {
        let mut highlighted = Self::default();
        highlighted.push(text, false);
        highlighted
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn has_emphasis(&self) -> bool {
        self.fragments.iter().any(|f| f.emphasized)
    }

    /// Render with each emphasized run wrapped in `<span>…</span>`.
    pub fn to_markup(&self) -> String {
        self.fragments
            .iter()
            .map(|f| {
                if f.emphasized {
                    format!("<span>{}</span>", f.text)
                } else {
                    f.text.clone()
                }
            })
            .collect()
    }

    fn push(&mut self, text: &str, emphasized: bool) {
        if !text.is_empty() {
            self.fragments.push(Fragment {
                text: text.to_string(),
                emphasized,
            });
        }
    }
}

/// Split `text` around case-insensitive occurrences of `query`.
pub fn highlight(text: &str, query: &str, mode: MatchMode) -> HighlightedText {
    let Some(pattern) = query_pattern(query, mode) else {
        return HighlightedText::plain(text);
    };

    let mut highlighted = HighlightedText::default();
    let mut plain_start = 0;
    for found in pattern.find_iter(text) {
        highlighted.push(&text[plain_start..found.start()], false);
        highlighted.push(found.as_str(), true);
        plain_start = found.end();
    }
    highlighted.push(&text[plain_start..], false);
    highlighted
}

/// The query as a literal, case-insensitive pattern. Prefix mode anchors it
/// to the start of the text.
fn query_pattern(query: &str, mode: MatchMode) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    let anchor = match mode {
        MatchMode::Prefix => "^",
        MatchMode::Anywhere => "",
    };
    RegexBuilder::new(&format!("{anchor}{}", regex::escape(query)))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::debug!(query, error = %e, "query cannot be highlighted"))
        .ok()
}
