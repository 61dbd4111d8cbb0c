//! JSON response adapter.

use super::RequestTemplate;
use crate::source::base::{CandidateSource, SourceError};
use crate::source::normalize::candidates_from_value;
use crate::source::transport::Transport;
use async_trait::async_trait;
use sk_protocol::candidate::Candidate;
use std::sync::Arc;

/// Source whose backend answers with a JSON array of strings or records.
///
/// A JSON body that is not an array (e.g. `{"noresults": true}`) or an empty
/// body means no results. A body that is not JSON at all is an error.
pub struct JsonSource {
    transport: Arc<dyn Transport>,
    template: RequestTemplate,
}

impl JsonSource {
    pub fn new(transport: Arc<dyn Transport>, template: RequestTemplate) -> Self {
        Self {
            transport,
            template,
        }
    }
}

#[async_trait]
impl CandidateSource for JsonSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        let body = self.transport.send(&self.template.request(query)).await?;
        parse_json_body(&body)
    }
}

pub(crate) fn parse_json_body(body: &str) -> Result<Vec<Candidate>, SourceError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SourceError::MalformedResponse(format!("Failed to parse JSON: {e}")))?;
    Ok(candidates_from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::transport::StaticTransport;
    use sk_protocol::request::RequestMethod;

    fn template() -> RequestTemplate {
        RequestTemplate {
            endpoint: "genres".to_string(),
            method: RequestMethod::Post,
            field_name: "request".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_parses_array() {
        let transport = Arc::new(StaticTransport::new().with_texts("ro", &["Rock", "Rockabilly"]));
        let source = JsonSource::new(transport.clone(), template());

        let candidates = source.fetch("ro").await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].display_text, "Rock");
        let sent = &transport.requests()[0];
        assert_eq!(sent.form_pair(), "request=ro");
        assert_eq!(sent.endpoint, "genres");
    }

    #[tokio::test]
    async fn test_no_results_marker() {
        let transport = Arc::new(StaticTransport::new().with_fallback(r#"{"noresults":true}"#));
        let source = JsonSource::new(transport, template());
        assert!(source.fetch("zz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let transport = Arc::new(StaticTransport::new().with_fallback("<html>500</html>"));
        let source = JsonSource::new(transport, template());

        let result = source.fetch("ro").await;
        assert!(matches!(result, Err(SourceError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let source = JsonSource::new(Arc::new(StaticTransport::failing()), template());
        assert!(matches!(
            source.fetch("ro").await,
            Err(SourceError::Transport(_))
        ));
    }

    #[test]
    fn test_empty_body_is_no_results() {
        assert!(parse_json_body("  \n").unwrap().is_empty());
    }
}
