//! Base CandidateSource trait and supporting types.

use async_trait::async_trait;
use sk_protocol::candidate::Candidate;
use thiserror::Error;

/// Reasons a remote resolution produced nothing usable.
///
/// These never reach the host: the resolver logs them and resolves to an
/// empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Resolves query text to an ordered candidate list.
///
/// An empty list means "no results"; it is not an error.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError>;
}
