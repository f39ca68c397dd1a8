//! # solrjvm-adapter
//!
//! Collects JVM metrics from an Apache Solr node and converts them into a
//! flat [`MetricSample`].
//!
//! A poll is a single `GET /solr/admin/metrics?group=jvm`. The body is
//! decoded into [`JvmMetrics`] and every counter is renamed through a
//! static table ([`mapping::FIELD_MAPPINGS`]) into a dotted key such as
//! `gc_count.young` or `memory_space.eden`. Failures are reported as
//! [`FetchError`] and never retried.
//!
//! ## Quick Start
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
//!     println!("Collected {} metrics", sample.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mapping;
pub mod schema;
pub mod solr;

pub use error::FetchError;
pub use mapping::{to_sample, FieldMapping, FIELD_MAPPINGS};
pub use schema::JvmMetrics;
pub use solr::SolrJvmAdapter;

// Re-export types for convenience
pub use solrjvm_types::MetricSample;
