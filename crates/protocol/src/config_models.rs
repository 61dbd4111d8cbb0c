//! Suggestion settings for `.suggest-kit/config.toml`.
//!
//! This module defines the immutable settings that control how the
//! suggestion controller gates input, resolves candidates and commits
//! selections.

use crate::candidate::RawCandidate;
use crate::request::RequestMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Where configured static options are merged into a result list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum StaticPlacement {
    /// Static options come first.
    #[default]
    Before,
    /// Static options follow the resolved candidates.
    After,
}

/// Shape of the body returned by the remote boundary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// A JSON list of strings or records.
    #[default]
    Json,
    /// An HTML fragment made of `<li>` items.
    Html,
}

/// Settings for one suggestion controller.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # Example
///
/// ```toml
/// # .suggest-kit/config.toml
/// endpoint-url = "https://example.com/genres"
/// min-input-length = 2
/// max-displayed = 8
/// static-options = ["Other..."]
/// static-options-placement = "after"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct SuggestConfig {
    /// Allow the same display text to be committed more than once.
    pub allow_duplicate_selections: bool,

    /// Clear the input instead of writing the committed text into it.
    pub auto_clear_on_select: bool,

    /// Trim leading and trailing whitespace from input and committed text.
    pub auto_trim_input: bool,

    /// Ignore all input and key handling.
    pub disabled: bool,

    /// Never reach the remote boundary; only seeded/cached lists resolve.
    pub local_only: bool,

    /// Query text → candidate list used to prime the cache.
    pub seed_candidates: Option<BTreeMap<String, Vec<RawCandidate>>>,

    /// Maximum number of entries displayed at once.
    pub max_displayed: usize,

    /// Method used for remote requests.
    pub request_method: RequestMethod,

    /// Number of characters needed before a query is resolved.
    pub min_input_length: usize,

    /// Text of the placeholder shown when nothing matched.
    pub no_results_text: String,

    /// Name of the field carrying the query text in remote requests.
    pub request_field_name: String,

    /// Highlight the first selectable entry when results are shown.
    pub auto_select_first: bool,

    /// Where `static_options` are merged.
    pub static_options_placement: StaticPlacement,

    /// Entries merged into every non-placeholder result list.
    pub static_options: Option<Vec<RawCandidate>>,

    /// Wrap query matches in display text with emphasis markers.
    pub highlight_matches: bool,

    /// Emphasize matches anywhere, not only at the start.
    pub highlight_any_position: bool,

    /// Tab commits the highlighted entry in addition to dismissing.
    pub tab_selects: bool,

    /// Remote endpoint; required unless `local_only` is set.
    pub endpoint_url: String,

    /// Cache remote results keyed by query text.
    pub use_cache: bool,

    /// Upper bound on cached queries; unbounded when absent.
    pub cache_capacity: Option<usize>,

    /// Quiet period before a text change is resolved; 0 resolves immediately.
    pub debounce_ms: u64,

    /// How remote bodies are interpreted.
    pub response_format: ResponseFormat,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_selections: true,
            auto_clear_on_select: false,
            auto_trim_input: true,
            disabled: false,
            local_only: false,
            seed_candidates: None,
            max_displayed: 10,
            request_method: RequestMethod::Post,
            min_input_length: 1,
            no_results_text: "Nothing matches...".to_string(),
            request_field_name: "request".to_string(),
            auto_select_first: true,
            static_options_placement: StaticPlacement::Before,
            static_options: None,
            highlight_matches: true,
            highlight_any_position: false,
            tab_selects: false,
            endpoint_url: String::new(),
            use_cache: true,
            cache_capacity: None,
            debounce_ms: 0,
            response_format: ResponseFormat::Json,
        }
    }
}

impl SuggestConfig {
    /// Settings for a local-only controller with the given seed data.
    pub fn local(seed: BTreeMap<String, Vec<RawCandidate>>) -> Self {
        Self {
            local_only: true,
            seed_candidates: Some(seed),
            ..Self::default()
        }
    }

    /// Settings for a controller that queries `endpoint_url`.
    pub fn remote(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }
}
