//! In-memory transport with canned responses.

use super::Transport;
use crate::source::base::SourceError;
use async_trait::async_trait;
use sk_protocol::request::RemoteRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Transport that answers from a fixed table, keyed by query text.
///
/// Unknown queries get the fallback body (`[]` unless changed). Every
/// request is recorded, so callers can assert how often the remote side was
/// reached. Useful for demos and tests.
#[derive(Debug, Clone)]
pub struct StaticTransport {
    responses: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    fallback: String,
    failing: bool,
    requests: Arc<Mutex<Vec<RemoteRequest>>>,
}

impl Default for StaticTransport {
    fn default() -> Self {
        Self {
            responses: HashMap::new(),
            delays: HashMap::new(),
            fallback: "[]".to_string(),
            failing: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every request fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_response(mut self, query: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(query.into(), body.into());
        self
    }

    /// Answer `query` with a JSON array of plain strings.
    pub fn with_texts(self, query: impl Into<String>, texts: &[&str]) -> Self {
        let body = serde_json::Value::from(texts.to_vec()).to_string();
        self.with_response(query, body)
    }

    pub fn with_fallback(mut self, body: impl Into<String>) -> Self {
        self.fallback = body.into();
        self
    }

    /// Hold the response for `query` back for `delay`.
    pub fn with_delay(mut self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(query.into(), delay);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn send(&self, request: &RemoteRequest) -> Result<String, SourceError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if let Some(delay) = self.delays.get(&request.query) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing {
            return Err(SourceError::Transport("static transport failure".to_string()));
        }

        Ok(self
            .responses
            .get(&request.query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
