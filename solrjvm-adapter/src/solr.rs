//! Solr adapter using the metrics HTTP API.
//!
//! This adapter collects JVM metrics from Solr by querying
//! `/solr/admin/metrics?group=jvm`, which is served on the regular Solr port
//! (8983 by default).
//!
//! ## Metrics Collected
//!
//! - **GC**: collection counts and accumulated time for the G1 young and old generations
//! - **Memory**: total, heap and non-heap usage plus per-pool usage
//! - **Threads**: thread counts by state
//!
//! ## Example
//!
//! ```rust,no_run
//! use solrjvm_adapter::solr::SolrJvmAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = SolrJvmAdapter::builder()
//!         .endpoint("http://localhost:8983")
//!         .build()?;
//!
//!     let sample = adapter.collect().await?;
//!
//!     for (key, value) in sample.iter() {
//!         println!("{}: {}", key, value);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use solrjvm_types::MetricSample;

use crate::mapping::to_sample;
use crate::schema::{JvmMetrics, SolrMetricsResponse};
use crate::FetchError;

/// Path and query of the JVM metrics endpoint.
pub const METRICS_PATH: &str = "/solr/admin/metrics?group=jvm";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "mackerel-plugin-solrjvm";

/// Default Solr base URL.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8983";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Solr adapter for collecting JVM metrics.
#[derive(Debug, Clone)]
pub struct SolrJvmAdapter {
    client: Client,
    endpoint: String,
}

impl SolrJvmAdapter {
    /// Create a new builder for configuring the adapter.
    pub fn builder() -> SolrJvmAdapterBuilder {
        SolrJvmAdapterBuilder::default()
    }

    /// The base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and map the JVM metrics in one step.
    pub async fn collect(&self) -> Result<MetricSample, FetchError> {
        let metrics = self.fetch().await?;
        Ok(to_sample(&metrics))
    }

    /// Fetch the raw JVM registry.
    ///
    /// Issues exactly one request. The HTTP status is not inspected; whatever
    /// body comes back must decode as the metrics schema.
    pub async fn fetch(&self) -> Result<JvmMetrics, FetchError> {
        let url = self.metrics_url()?;
        debug!(%url, "Fetching Solr JVM metrics");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Consumes the response; the connection is released when this returns.
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Received metrics response");

        let document = SolrMetricsResponse::from_slice(&body)?;
        Ok(document.into_jvm())
    }

    fn metrics_url(&self) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.endpoint, METRICS_PATH);
        Url::parse(&raw).map_err(|e| FetchError::RequestConstruction(format!("{}: {}", raw, e)))
    }
}

/// Builder for SolrJvmAdapter.
#[derive(Debug, Default)]
pub struct SolrJvmAdapterBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl SolrJvmAdapterBuilder {
    /// Set the Solr base URL (e.g., "http://localhost:8983").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    ///
    /// A zero duration disables the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the adapter.
    pub fn build(self) -> Result<SolrJvmAdapter, FetchError> {
        let mut client = Client::builder().user_agent(USER_AGENT);

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if !timeout.is_zero() {
            client = client.timeout(timeout);
        }

        Ok(SolrJvmAdapter {
            client: client.build()?,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}
