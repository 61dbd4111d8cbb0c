//! Remote request description.
//!
//! The remote boundary is a single logical call: send the query text under a
//! configurable field name, receive an ordered list of candidates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// HTTP-equivalent method used for the remote call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Get,
    #[default]
    Post,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

/// One outbound resolution request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct RemoteRequest {
    /// Where the request is sent.
    pub endpoint: String,
    /// How the request is sent.
    pub method: RequestMethod,
    /// Name of the field carrying the query.
    pub field_name: String,
    /// The query text.
    pub query: String,
}

impl RemoteRequest {
    /// Encode the request as a single `field=query` form pair.
    pub fn form_pair(&self) -> String {
        format!("{}={}", self.field_name, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_pair() {
        let request = RemoteRequest {
            endpoint: "genres".to_string(),
            method: RequestMethod::Post,
            field_name: "request".to_string(),
            query: "ro".to_string(),
        };
        assert_eq!(request.form_pair(), "request=ro");
        assert_eq!(request.method.as_str(), "POST");
    }
}
