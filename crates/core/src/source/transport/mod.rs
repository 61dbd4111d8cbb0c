//! The remote boundary.
//!
//! A [`Transport`] carries one [`RemoteRequest`] and returns the raw
//! response body. Parsing the body is the job of the source on top.

mod command;
mod fixed;

pub use command::CommandTransport;
pub use fixed::StaticTransport;

use crate::source::base::SourceError;
use async_trait::async_trait;
use sk_protocol::request::RemoteRequest;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response body.
    async fn send(&self, request: &RemoteRequest) -> Result<String, SourceError>;
}
