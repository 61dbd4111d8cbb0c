//! The suggestion controller.
//!
//! The controller watches one input, decides when a query is worth
//! resolving, builds the displayed list and drives selection and the display
//! surface. Everything it decides is reported to subscribers as [`Signal`]s.
//!
//! All methods run on the caller's task. Remote resolutions are handed back
//! as [`PendingResolution`]s; whoever awaits one passes the resulting batch
//! to [`SuggestController::on_results_ready`]. Each text change that reaches
//! the resolver gets a new generation number, and a batch whose generation
//! is no longer current is never displayed.

use crate::cache::CandidateCache;
use crate::config::error::ConfigurationError;
use crate::config::models::{validate, AppConfig};
use crate::display::{DisplayEntry, DisplaySurface, TextTarget};
use crate::error::SuggestError;
use crate::highlight::{highlight, HighlightedText, MatchMode};
use crate::history::History;
use crate::selection::SelectionState;
use crate::source::base::CandidateSource;
use crate::source::factory::SourceFactory;
use crate::source::normalize::normalize;
use crate::source::resolver::{Origin, PendingResolution, Resolution, ResolvedBatch, Resolver};
use sk_protocol::candidate::Candidate;
use sk_protocol::config_models::{StaticPlacement, SuggestConfig};
use sk_protocol::ipc::{Signal, SuggestKey};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Whether a key was handled by the controller.
///
/// Hosts should suppress their own default handling for consumed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    NotConsumed,
}

/// Why a commit did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The text was already committed and duplicates are not allowed.
    Duplicate,
    /// The candidate is a placeholder.
    NotSelectable,
    /// The controller is disabled or disposed.
    Inactive,
}

/// Result of [`SuggestController::on_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(Candidate),
    Rejected(RejectReason),
}

pub struct SuggestController {
    config: SuggestConfig,
    resolver: Resolver,
    selection: SelectionState,
    history: History,
    /// Normalized `static-options`.
    statics: Vec<Candidate>,
    /// Last query handed to the resolver; `None` after a commit.
    query: Option<String>,
    generation: u64,
    entries: Vec<DisplayEntry>,
    shown: bool,
    disabled: bool,
    disposed: bool,
    input: Box<dyn TextTarget>,
    append_target: Option<Box<dyn TextTarget>>,
    surface: Box<dyn DisplaySurface>,
    subscribers: Vec<mpsc::UnboundedSender<Signal>>,
}

impl SuggestController {
    /// Build a controller.
    ///
    /// `source` is required unless `config.local_only` is set, in which case
    /// it is ignored. Seed candidates are normalized and loaded into the
    /// cache here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when the settings cannot drive a
    /// controller.
    pub fn new(
        config: SuggestConfig,
        source: Option<Arc<dyn CandidateSource>>,
        input: impl TextTarget + 'static,
        surface: impl DisplaySurface + 'static,
    ) -> Result<Self, ConfigurationError> {
        validate(&config)?;

        let source = if config.local_only {
            None
        } else {
            Some(source.ok_or_else(|| {
                ConfigurationError::MissingTransport(config.endpoint_url.clone())
            })?)
        };

        let mut cache = CandidateCache::new(config.use_cache, config.cache_capacity);
        if let Some(seed) = &config.seed_candidates {
            cache.seed(
                seed.iter()
                    .map(|(query, raw)| (query.clone(), normalize(raw.clone()))),
            );
        }

        let statics = normalize(config.static_options.clone().unwrap_or_default());

        tracing::debug!(
            local_only = config.local_only,
            seeded = cache.len(),
            statics = statics.len(),
            "suggest controller created"
        );

        Ok(Self {
            disabled: config.disabled,
            resolver: Resolver::new(cache, source),
            selection: SelectionState::new(),
            history: History::new(),
            statics,
            query: None,
            generation: 0,
            entries: Vec::new(),
            shown: false,
            disposed: false,
            input: Box::new(input),
            append_target: None,
            surface: Box::new(surface),
            subscribers: Vec::new(),
            config,
        })
    }

    /// Build a controller from a loaded `.suggest-kit/` configuration,
    /// creating the candidate source its `[transport]` table describes.
    pub fn from_app_config(
        config: AppConfig,
        input: impl TextTarget + 'static,
        surface: impl DisplaySurface + 'static,
    ) -> Result<Self, SuggestError> {
        let source = SourceFactory::from_app_config(&config)?;
        Ok(Self::new(config.suggest, source, input, surface)?)
    }

    /// Committed texts are also appended, comma separated, to `target`, and
    /// the input is cleared after each commit.
    pub fn with_append_target(mut self, target: impl TextTarget + 'static) -> Self {
        self.append_target = Some(Box::new(target));
        self
    }

    /// Receive every signal emitted from now on.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Signal> {
        let (tx, rx) = mpsc::unbounded_channel();
        if !self.disposed {
            self.subscribers.push(tx);
        }
        rx
    }

    /// React to a new input value.
    ///
    /// Returns a pending resolution when the query has to go remote; the
    /// caller must await it and pass the batch to `on_results_ready`.
    /// Cache hits are displayed before this returns.
    pub fn on_text_changed(&mut self, raw: &str) -> Option<PendingResolution> {
        if self.disabled || self.disposed {
            return None;
        }

        let text = if self.config.auto_trim_input {
            raw.trim()
        } else {
            raw
        };

        if self.query.as_deref() == Some(text) {
            return None;
        }
        if text.chars().count() < self.config.min_input_length {
            tracing::trace!(query = text, "below minimum input length");
            return None;
        }

        self.query = Some(text.to_string());
        self.generation += 1;

        match self.resolver.resolve(text, self.generation) {
            Resolution::Ready(candidates) => {
                let batch = ResolvedBatch {
                    generation: self.generation,
                    query: text.to_string(),
                    candidates,
                    origin: Origin::Cache,
                };
                self.on_results_ready(batch);
                None
            }
            Resolution::Pending(pending) => {
                self.emit(Signal::Requesting {
                    query: text.to_string(),
                });
                Some(pending)
            }
            Resolution::Unavailable => None,
        }
    }

    /// Apply a finished resolution. Returns `false` when the batch was not
    /// displayed (stale generation, disabled or disposed controller).
    ///
    /// Non-empty remote batches are cached even when stale.
    pub fn on_results_ready(&mut self, batch: ResolvedBatch) -> bool {
        if self.disposed {
            return false;
        }

        if batch.origin == Origin::Remote && !batch.candidates.is_empty() {
            self.resolver
                .cache_mut()
                .insert(&batch.query, batch.candidates.clone());
        }

        if batch.generation != self.generation {
            tracing::debug!(
                query = %batch.query,
                generation = batch.generation,
                current = self.generation,
                "discarding stale results"
            );
            return false;
        }
        if self.disabled {
            return false;
        }

        let candidates = self.build_list(batch.candidates);
        let count = candidates.iter().filter(|c| c.selectable).count();

        self.entries = candidates
            .iter()
            .map(|c| DisplayEntry::new(c, self.markup(c, &batch.query)))
            .collect();
        self.selection
            .set_candidates(candidates, self.config.auto_select_first);

        self.surface.render(&self.entries);
        self.surface
            .set_highlight(self.selection.highlighted_index());
        self.show();

        tracing::debug!(query = %batch.query, count, "results ready");
        self.emit(Signal::ResultsReady {
            query: batch.query,
            count,
        });
        true
    }

    /// Handle a navigation or commit key.
    pub fn on_key(&mut self, key: SuggestKey) -> EventStatus {
        if self.disabled || self.disposed {
            return EventStatus::NotConsumed;
        }

        match key {
            SuggestKey::Escape => {
                if self.shown {
                    self.hide();
                    EventStatus::Consumed
                } else {
                    EventStatus::NotConsumed
                }
            }
            SuggestKey::Tab => {
                let highlighted = self.selection.highlighted().cloned();
                self.hide();
                if self.config.tab_selects {
                    if let Some(candidate) = highlighted {
                        self.on_commit(candidate);
                    }
                }
                // Tab still moves focus in the host.
                EventStatus::NotConsumed
            }
            SuggestKey::Enter => match self.selection.highlighted().cloned() {
                Some(candidate) => {
                    self.on_commit(candidate);
                    EventStatus::Consumed
                }
                None => EventStatus::NotConsumed,
            },
            SuggestKey::Up | SuggestKey::Down => {
                if self.entries.is_empty() {
                    return EventStatus::NotConsumed;
                }
                if !self.shown {
                    self.show();
                } else {
                    if key == SuggestKey::Up {
                        self.selection.move_previous();
                    } else {
                        self.selection.move_next();
                    }
                    self.surface
                        .set_highlight(self.selection.highlighted_index());
                }
                EventStatus::Consumed
            }
        }
    }

    /// Commit `candidate` as the chosen value.
    pub fn on_commit(&mut self, candidate: Candidate) -> CommitOutcome {
        if self.disabled || self.disposed {
            return CommitOutcome::Rejected(RejectReason::Inactive);
        }
        if !candidate.selectable {
            return CommitOutcome::Rejected(RejectReason::NotSelectable);
        }

        let text = if self.config.auto_trim_input {
            candidate.display_text.trim().to_string()
        } else {
            candidate.display_text.clone()
        };

        if !self.config.allow_duplicate_selections && self.history.contains_text(&text) {
            tracing::debug!(text = %text, "rejected duplicate selection");
            return CommitOutcome::Rejected(RejectReason::Duplicate);
        }

        // Retyping the same text resolves again, and anything still in
        // flight is stale.
        self.query = None;
        self.generation += 1;

        self.history.push(text.clone(), candidate.id.clone());
        if self.config.auto_clear_on_select {
            self.input.set_value("");
        } else {
            self.input.set_value(&text);
        }
        self.hide();

        if let Some(target) = self.append_target.as_mut() {
            let current = target.value();
            let joined = if current.trim().is_empty() {
                text.clone()
            } else {
                format!("{current}, {text}")
            };
            target.set_value(&joined);
            self.input.set_value("");
        }

        self.selection.clear_highlight();

        tracing::info!(id = %candidate.id, text = %text, "candidate selected");
        self.emit(Signal::Selected {
            candidate: candidate.clone(),
        });
        CommitOutcome::Committed(candidate)
    }

    /// Highlight the entry under the pointer.
    pub fn highlight(&mut self, index: usize) {
        if self.disabled || self.disposed || !self.shown {
            return;
        }
        self.selection.highlight(index);
        self.surface
            .set_highlight(self.selection.highlighted_index());
    }

    /// Toggle input handling. Disabling hides the display.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.hide();
        }
        self.disabled = disabled;
    }

    /// Tear the controller down.
    ///
    /// The display is hidden and released, the input and cache are cleared
    /// and subscribers are detached. Every later call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.hide();
        self.input.set_value("");
        self.selection.reset();
        self.entries.clear();
        self.resolver.cache_mut().clear();
        self.query = None;
        self.generation += 1;
        self.subscribers.clear();
        self.surface.release();
        self.disposed = true;

        tracing::debug!("suggest controller disposed");
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current candidate list, placeholder included.
    pub fn candidates(&self) -> &[Candidate] {
        self.selection.candidates()
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn highlighted(&self) -> Option<&Candidate> {
        self.selection.highlighted()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The last query handed to the resolver.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cached queries.
    pub fn cache_len(&self) -> usize {
        self.resolver.cache().len()
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// Merge statics, truncate, and fall back to the placeholder.
    fn build_list(&self, resolved: Vec<Candidate>) -> Vec<Candidate> {
        if resolved.is_empty() {
            return vec![Candidate::placeholder(self.config.no_results_text.clone())];
        }

        let mut list = Vec::with_capacity(resolved.len() + self.statics.len());
        match self.config.static_options_placement {
            StaticPlacement::Before => {
                list.extend(self.statics.iter().cloned());
                list.extend(resolved);
            }
            StaticPlacement::After => {
                list.extend(resolved);
                list.extend(self.statics.iter().cloned());
            }
        }
        list.truncate(self.config.max_displayed);
        ensure_unique_ids(&mut list);
        list
    }

    fn markup(&self, candidate: &Candidate, query: &str) -> HighlightedText {
        if !self.config.highlight_matches || !candidate.selectable {
            return HighlightedText::plain(&candidate.display_text);
        }
        let mode = if self.config.highlight_any_position {
            MatchMode::Anywhere
        } else {
            MatchMode::Prefix
        };
        highlight(&candidate.display_text, query, mode)
    }

    fn show(&mut self) {
        if self.shown || self.entries.is_empty() {
            return;
        }
        if self.config.auto_select_first && self.selection.highlighted_index().is_none() {
            self.selection.move_next();
        }
        self.surface
            .set_highlight(self.selection.highlighted_index());
        self.surface.show();
        self.shown = true;
        self.emit(Signal::Shown);
    }

    fn hide(&mut self) {
        if !self.shown {
            return;
        }
        self.surface.hide();
        self.selection.clear_highlight();
        self.surface.set_highlight(None);
        self.shown = false;
        self.emit(Signal::Hidden);
    }

    fn emit(&mut self, signal: Signal) {
        tracing::trace!(?signal, "emit");
        self.subscribers.retain(|tx| tx.send(signal.clone()).is_ok());
    }
}

/// Statics and resolved candidates are numbered independently, so their
/// synthesized ids can collide. Later duplicates get a numeric suffix.
fn ensure_unique_ids(list: &mut [Candidate]) {
    let mut seen = HashSet::with_capacity(list.len());
    for candidate in list.iter_mut() {
        if seen.contains(&candidate.id) {
            let mut suffix = 2;
            let mut id = format!("{}_{suffix}", candidate.id);
            while seen.contains(&id) {
                suffix += 1;
                id = format!("{}_{suffix}", candidate.id);
            }
            candidate.id = id;
        }
        seen.insert(candidate.id.clone());
    }
}
