//! Host ↔ controller communication protocol.
//!
//! The protocol follows an input/signal pattern:
//! - `InputEvent`: what the host input surface reports to the controller
//! - `Signal`: notifications the controller emits back to subscribers
//!
//! Signals are delivered over channels, so a host can observe the
//! controller without registering callbacks on it.

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Navigation and commit keys the controller understands.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub enum SuggestKey {
    Escape,
    Tab,
    Enter,
    Up,
    Down,
}

/// Events sent from the host input surface to the controller.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// { "type": "textChanged", "payload": { "value": "ro" } }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum InputEvent {
    /// The input value changed (key-up).
    TextChanged { value: String },

    /// A navigation key was pressed (key-down).
    Key { key: SuggestKey },

    /// The pointer moved over a displayed entry.
    Hover { index: usize },

    /// Tear the controller down.
    Shutdown,
}

/// Signals emitted by the controller.
///
/// ```json
/// { "type": "selected", "payload": { "candidate": { "id": "1_opt", ... } } }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Signal {
    /// A remote resolution was issued for `query`.
    Requesting { query: String },

    /// A result list was built and handed to the display surface.
    ///
    /// `count` is the number of selectable entries, so it is 0 when only
    /// the "no results" placeholder is shown.
    ResultsReady { query: String, count: usize },

    /// A candidate was committed.
    Selected { candidate: Candidate },

    /// The display surface became visible.
    Shown,

    /// The display surface was hidden.
    Hidden,
}
