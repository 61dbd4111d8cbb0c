//! Candidate models.
//!
//! A candidate is one suggestion eligible for display and selection. Backends
//! and configuration files describe candidates in a loose wire form
//! ([`RawCandidate`]); the core normalizes that form into [`Candidate`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// A resolved suggestion, ready to be displayed and committed.
///
/// Within a single result list every candidate has a distinct `id`, and
/// `label` is never empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Candidate {
    /// Stable identifier: `"<source id>_opt"`, or `"<n>_opt"` when the source
    /// has none.
    pub id: String,

    /// Plain text written into the input when the candidate is committed.
    pub display_text: String,

    /// Raw label as supplied by the source; may contain HTML markup.
    pub label: String,

    /// Whether the candidate can be highlighted and committed.
    ///
    /// Only synthetic entries such as the "no results" placeholder are
    /// not selectable.
    pub selectable: bool,

    /// Any additional fields carried by the source record.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Candidate {
    /// Create a selectable candidate whose label and display text are the same.
    pub fn plain(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            display_text: text.clone(),
            label: text,
            selectable: true,
            extra: BTreeMap::new(),
        }
    }

    /// Create the non-selectable placeholder shown when nothing matched.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            selectable: false,
            ..Self::plain("noresults_opt", text)
        }
    }
}

/// A candidate as it appears on the wire or in configuration files.
///
/// Two shapes are accepted:
///
/// ```json
/// ["Rock", "Rockabilly"]
/// [{"id": "1", "html": "<b>Rock</b>", "decade": "1950s"}]
/// ```
///
/// Uses `#[serde(untagged)]` so that bare strings and records can be mixed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawCandidate {
    /// A bare string; used both as label and display text.
    Plain(String),

    /// A record carrying at least an `html` label.
    Record(CandidateRecord),
}

/// Record form of a raw candidate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    /// Label markup (required).
    pub html: String,

    /// Optional stable identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Optional plain text; derived from `html` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// All other fields, preserved as opaque extras.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl From<&str> for RawCandidate {
    fn from(value: &str) -> Self {
        RawCandidate::Plain(value.to_string())
    }
}
