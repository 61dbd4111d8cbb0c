//! Candidate source implementations, one per response format.

mod html_source;
mod json_source;

pub use html_source::HtmlSource;
pub use json_source::JsonSource;

use sk_protocol::config_models::SuggestConfig;
use sk_protocol::request::{RemoteRequest, RequestMethod};

/// The parts of a remote request that do not depend on the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    pub endpoint: String,
    pub method: RequestMethod,
    pub field_name: String,
}

impl RequestTemplate {
    pub fn from_config(config: &SuggestConfig) -> Self {
        Self {
            endpoint: config.endpoint_url.clone(),
            method: config.request_method,
            field_name: config.request_field_name.clone(),
        }
    }

    pub fn request(&self, query: &str) -> RemoteRequest {
        RemoteRequest {
            endpoint: self.endpoint.clone(),
            method: self.method,
            field_name: self.field_name.clone(),
            query: query.to_string(),
        }
    }
}
