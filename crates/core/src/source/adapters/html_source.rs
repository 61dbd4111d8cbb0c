//! HTML fragment response adapter.

use super::json_source::parse_json_body;
use super::RequestTemplate;
use crate::sanitize::compile;
use crate::source::base::{CandidateSource, SourceError};
use crate::source::normalize::normalize;
use crate::source::transport::Transport;
use async_trait::async_trait;
use regex::Regex;
use sk_protocol::candidate::{Candidate, CandidateRecord, RawCandidate};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Source whose backend answers with a list of `<li>` items.
///
/// ```html
/// <li id="12">Rock</li><li><b>Rock</b>abilly</li>
/// ```
///
/// Each item's inner markup becomes the label and its `id` attribute the
/// id. A body that starts like JSON is read as JSON instead, so the
/// `{"noresults": true}` marker works here too.
pub struct HtmlSource {
    transport: Arc<dyn Transport>,
    template: RequestTemplate,
}

impl HtmlSource {
    pub fn new(transport: Arc<dyn Transport>, template: RequestTemplate) -> Self {
        Self {
            transport,
            template,
        }
    }
}

#[async_trait]
impl CandidateSource for HtmlSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        let body = self.transport.send(&self.template.request(query)).await?;
        let trimmed = body.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return parse_json_body(&body);
        }
        Ok(normalize(parse_list_items(&body)))
    }
}

/// Extract `<li>` items from an HTML fragment. An unclosed last item runs
/// to the end of the body.
fn parse_list_items(body: &str) -> Vec<RawCandidate> {
    static RE_ITEM: LazyLock<Regex> =
        LazyLock::new(|| compile(r"(?is)<li(\s[^>]*)?>(.*?)(?:</li>|$)"));

    RE_ITEM
        .captures_iter(body)
        .map(|caps| {
            RawCandidate::Record(CandidateRecord {
                html: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
                id: caps.get(1).and_then(|attrs| attribute(attrs.as_str(), "id")),
                text: None,
                extra: BTreeMap::new(),
            })
        })
        .collect()
}

/// Value of attribute `name` in a tag's attribute list. Quoted and unquoted
/// values are accepted; an empty value counts as absent.
fn attribute(attributes: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r#"(?i)(?:^|\s){}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
        regex::escape(name)
    );
    let caps = Regex::new(&pattern).ok()?.captures(attributes)?;
    (1..=3)
        .find_map(|group| caps.get(group))
        .map(|m| m.as_str().to_string())
        .filter(|value| !value.is_empty())
}
