//! Cache-first candidate resolution.
//!
//! The resolver answers a query from the cache when it can. Otherwise it
//! hands back a [`PendingResolution`] wrapping the remote fetch; the caller
//! decides where to await it (inline, or on a spawned task) and feeds the
//! finished [`ResolvedBatch`] back to the controller.

use crate::cache::CandidateCache;
use crate::source::base::CandidateSource;
use sk_protocol::candidate::Candidate;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Where a batch of candidates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Remote,
}

/// A finished resolution, tagged with the generation of the text change
/// that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBatch {
    pub generation: u64,
    pub query: String,
    pub candidates: Vec<Candidate>,
    pub origin: Origin,
}

/// An in-flight remote resolution.
///
/// Failures have already been logged and turned into an empty list by the
/// time `wait` returns.
pub struct PendingResolution {
    generation: u64,
    query: String,
    future: Pin<Box<dyn Future<Output = Vec<Candidate>> + Send>>,
}

impl PendingResolution {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn wait(self) -> ResolvedBatch {
        let candidates = self.future.await;
        ResolvedBatch {
            generation: self.generation,
            query: self.query,
            candidates,
            origin: Origin::Remote,
        }
    }
}

impl fmt::Debug for PendingResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingResolution")
            .field("generation", &self.generation)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// Outcome of [`Resolver::resolve`].
#[derive(Debug)]
pub enum Resolution {
    /// Answered from the cache.
    Ready(Vec<Candidate>),
    /// A remote fetch is needed.
    Pending(PendingResolution),
    /// Local-only miss; nothing to show.
    Unavailable,
}

/// Chooses between the cache and the candidate source.
pub struct Resolver {
    cache: CandidateCache,
    source: Option<Arc<dyn CandidateSource>>,
}

impl Resolver {
    /// A resolver without a source only ever answers from the cache.
    pub fn new(cache: CandidateCache, source: Option<Arc<dyn CandidateSource>>) -> Self {
        Self { cache, source }
    }

    pub fn is_local_only(&self) -> bool {
        self.source.is_none()
    }

    pub fn cache(&self) -> &CandidateCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut CandidateCache {
        &mut self.cache
    }

    pub fn resolve(&self, query: &str, generation: u64) -> Resolution {
        if let Some(hit) = self.cache.lookup(query) {
            tracing::debug!(query, count = hit.len(), "cache hit");
            return Resolution::Ready(hit);
        }

        let Some(source) = &self.source else {
            tracing::debug!(query, "local-only miss");
            return Resolution::Unavailable;
        };

        let source = Arc::clone(source);
        let owned = query.to_string();
        let future = Box::pin(async move {
            match source.fetch(&owned).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(query = %owned, error = %e, "resolution failed, treating as no results");
                    Vec::new()
                }
            }
        });

        Resolution::Pending(PendingResolution {
            generation,
            query: query.to_string(),
            future,
        })
    }
}
