//! The plugin surface exposed to the monitoring agent runner.
//!
//! A [`Plugin`] answers three questions: what are the current values, how
//! should they be graphed, and under which prefix do the keys live. The
//! runner in [`crate::output`] turns those answers into agent protocol text.

use async_trait::async_trait;
use tracing::{debug, error};

use solrjvm_adapter::{FetchError, SolrJvmAdapter};
use solrjvm_types::{GraphDefinition, MetricSample};

use crate::graphs::graph_definition;
use crate::settings::Settings;

/// Default metric key prefix.
pub const DEFAULT_PREFIX: &str = "solrjvm";

/// A metrics source the agent runner can drive.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Collect one sample. Any failure aborts the poll cycle.
    async fn fetch_metrics(&self) -> Result<MetricSample, FetchError>;

    /// How the sample's keys are grouped into graphs.
    fn graph_definition(&self) -> &GraphDefinition;

    /// Namespace prepended to every reported key.
    fn metric_key_prefix(&self) -> &str;
}

/// Plugin reporting Solr JVM metrics.
#[derive(Debug, Clone)]
pub struct SolrJvmPlugin {
    adapter: SolrJvmAdapter,
    prefix: String,
}

impl SolrJvmPlugin {
    /// Create a plugin around an already configured adapter.
    pub fn new(adapter: SolrJvmAdapter, prefix: impl Into<String>) -> Self {
        Self {
            adapter,
            prefix: prefix.into(),
        }
    }

    /// Create a plugin from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let adapter = SolrJvmAdapter::builder()
            .endpoint(settings.url.clone())
            .timeout(settings.timeout())
            .build()?;
        Ok(Self::new(adapter, settings.prefix.clone()))
    }

    /// The Solr base URL being polled.
    pub fn url(&self) -> &str {
        self.adapter.endpoint()
    }
}

#[async_trait]
impl Plugin for SolrJvmPlugin {
    async fn fetch_metrics(&self) -> Result<MetricSample, FetchError> {
        match self.adapter.collect().await {
            Ok(sample) => {
                debug!("Collected {} metrics from {}", sample.len(), self.url());
                Ok(sample)
            }
            Err(e) => {
                error!("Failed to fetch Solr JVM metrics from {}: {}", self.url(), e);
                Err(e)
            }
        }
    }

    fn graph_definition(&self) -> &GraphDefinition {
        graph_definition()
    }

    fn metric_key_prefix(&self) -> &str {
        &self.prefix
    }
}
