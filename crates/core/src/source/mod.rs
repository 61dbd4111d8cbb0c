//! Candidate resolution.
//!
//! This module provides the `CandidateSource` trait (one implementation per
//! response format), the `Transport` boundary those sources talk through,
//! and the `Resolver` that arbitrates between the cache and a source.

pub mod adapters;
pub mod base;
pub mod factory;
pub mod normalize;
pub mod resolver;
pub mod transport;

pub use adapters::{HtmlSource, JsonSource};
pub use base::{CandidateSource, SourceError};
pub use factory::SourceFactory;
pub use resolver::{Origin, PendingResolution, Resolution, ResolvedBatch, Resolver};
pub use transport::{CommandTransport, StaticTransport, Transport};
