//! Source factory for building candidate sources from configuration.

use crate::config::error::ConfigurationError;
use crate::config::models::AppConfig;
use crate::source::adapters::{HtmlSource, JsonSource, RequestTemplate};
use crate::source::base::CandidateSource;
use crate::source::transport::{CommandTransport, Transport};
use sk_protocol::config_models::{ResponseFormat, SuggestConfig};
use std::sync::Arc;

/// Factory for creating candidate sources based on configuration.
///
/// The response format decides which adapter parses the bodies the
/// transport returns.
pub struct SourceFactory;

impl SourceFactory {
    /// Create a source that sends requests through `transport`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sk_core::source::{SourceFactory, StaticTransport};
    /// use sk_protocol::config_models::SuggestConfig;
    /// use std::sync::Arc;
    ///
    /// let config = SuggestConfig::remote("genres");
    /// let transport = Arc::new(StaticTransport::new().with_texts("ro", &["Rock"]));
    /// let source = SourceFactory::create(&config, transport);
    /// ```
    pub fn create(config: &SuggestConfig, transport: Arc<dyn Transport>) -> Arc<dyn CandidateSource> {
        let template = RequestTemplate::from_config(config);
        match config.response_format {
            ResponseFormat::Json => Arc::new(JsonSource::new(transport, template)),
            ResponseFormat::Html => Arc::new(HtmlSource::new(transport, template)),
        }
    }

    /// Create the source described by a loaded configuration.
    ///
    /// Returns `None` in local-only mode. In remote mode the `[transport]`
    /// table is required.
    pub fn from_app_config(
        config: &AppConfig,
    ) -> Result<Option<Arc<dyn CandidateSource>>, ConfigurationError> {
        if config.suggest.local_only {
            return Ok(None);
        }

        let transport = config
            .transport
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingTransport(config.suggest.endpoint_url.clone()))?;

        Ok(Some(Self::create(
            &config.suggest,
            Arc::new(CommandTransport::from_config(transport)),
        )))
    }
}
