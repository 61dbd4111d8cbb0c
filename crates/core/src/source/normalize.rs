//! Normalization of raw candidate lists.
//!
//! Sources and configuration files hand over loose [`RawCandidate`]s (or a
//! parsed JSON value); everything the controller sees goes through here.

use crate::sanitize::strip_tags;
use serde_json::Value;
use sk_protocol::candidate::{Candidate, CandidateRecord, RawCandidate};
use std::collections::BTreeMap;

/// Normalize raw candidates into display-ready ones.
///
/// Entries with an empty label are dropped. Every id gets an `_opt` suffix:
/// a source id `x` becomes `"x_opt"`, and entries without one are numbered
/// `"1_opt"`, `"2_opt"`, ... in order, so the counter only advances for
/// them.
pub fn normalize(raw: Vec<RawCandidate>) -> Vec<Candidate> {
    let mut unnamed = 0;
    let mut candidates = Vec::with_capacity(raw.len());
    for item in raw {
        match candidate_from_raw(item, &mut unnamed) {
            Some(candidate) => candidates.push(candidate),
            None => {
                tracing::debug!(position = candidates.len(), "dropped candidate with empty label");
            }
        }
    }
    candidates
}

/// Normalize a parsed response body.
///
/// Only an array is a result list. Anything else (including the
/// `{"noresults": true}` marker) means no results.
pub fn candidates_from_value(value: &Value) -> Vec<Candidate> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    let raw = items
        .iter()
        .filter_map(|item| {
            let parsed = raw_from_value(item);
            if parsed.is_none() {
                tracing::debug!(item = %item, "skipped unrecognized candidate");
            }
            parsed
        })
        .collect();

    normalize(raw)
}

fn candidate_from_raw(raw: RawCandidate, unnamed: &mut usize) -> Option<Candidate> {
    match raw {
        RawCandidate::Plain(text) => {
            if text.trim().is_empty() {
                return None;
            }
            Some(Candidate::plain(option_id(None, unnamed), text))
        }
        RawCandidate::Record(record) => {
            if record.html.trim().is_empty() {
                return None;
            }
            let display_text = record
                .text
                .unwrap_or_else(|| strip_tags(&record.html));
            Some(Candidate {
                id: option_id(record.id, unnamed),
                display_text,
                label: record.html,
                selectable: true,
                extra: stringify_extras(record.extra),
            })
        }
    }
}

fn option_id(supplied: Option<String>, unnamed: &mut usize) -> String {
    match supplied.filter(|id| !id.is_empty()) {
        Some(id) => format!("{id}_opt"),
        None => {
            *unnamed += 1;
            format!("{unnamed}_opt")
        }
    }
}

fn raw_from_value(value: &Value) -> Option<RawCandidate> {
    match value {
        Value::String(text) => Some(RawCandidate::Plain(text.clone())),
        Value::Object(map) => {
            let html = map.get("html")?.as_str()?.to_string();
            let id = map.get("id").and_then(scalar_to_string);
            let text = map.get("text").and_then(Value::as_str).map(str::to_string);
            let extra = map
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "html" | "id" | "text"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Some(RawCandidate::Record(CandidateRecord {
                html,
                id,
                text,
                extra,
            }))
        }
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn stringify_extras(extra: BTreeMap<String, Value>) -> BTreeMap<String, String> {
    extra
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect()
}
