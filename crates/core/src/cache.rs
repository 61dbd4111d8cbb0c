//! Query-keyed candidate cache.
//!
//! Entries never expire on their own. With no capacity the cache grows for
//! the lifetime of its controller; with a capacity the oldest inserted entry
//! is evicted first.

use sk_protocol::candidate::Candidate;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Query text → resolved candidate list.
#[derive(Debug, Clone, Default)]
pub struct CandidateCache {
    enabled: bool,
    capacity: Option<usize>,
    entries: HashMap<String, Vec<Candidate>>,
    /// Insertion order, oldest first; used for eviction.
    order: VecDeque<String>,
}

impl CandidateCache {
    /// Create a cache. A disabled cache misses on every lookup and ignores
    /// inserts.
    pub fn new(enabled: bool, capacity: Option<usize>) -> Self {
        Self {
            enabled,
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Prime the cache with pre-resolved lists.
    ///
    /// Seeding stores entries even when the cache is disabled, but a
    /// disabled cache still never reports a hit.
    pub fn seed<I>(&mut self, lists: I)
    where
        I: IntoIterator<Item = (String, Vec<Candidate>)>,
    {
        for (query, candidates) in lists {
            self.store(query, candidates);
        }
    }

    pub fn lookup(&self, query: &str) -> Option<Vec<Candidate>> {
        if !self.enabled {
            return None;
        }
        self.entries.get(query).cloned()
    }

    pub fn insert(&mut self, query: &str, candidates: Vec<Candidate>) {
        if self.enabled {
            self.store(query.to_string(), candidates);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn store(&mut self, query: String, candidates: Vec<Candidate>) {
        if self.entries.insert(query.clone(), candidates).is_none() {
            self.order.push_back(query);
        }

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                tracing::trace!(query = %oldest, "evicted cache entry");
            }
        }
    }
}
