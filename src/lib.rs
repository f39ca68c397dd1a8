//! # mackerel-plugin-solrjvm
//!
//! A Mackerel agent plugin that reports Apache Solr JVM metrics: garbage
//! collection counts and times, memory usage by area and pool, and thread
//! counts by state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         mackerel agent                       │
//! └──────────────▲───────────────────────────────────────────────┘
//!                │ stdout (values or meta JSON)
//! ┌──────────────┴──────┐    ┌───────────────┐    ┌──────────────┐
//! │       output        │◀───│    plugin     │◀───│   adapter    │◀── Solr
//! │ (agent protocol)    │    │ (Plugin trait)│    │ (fetch + map)│
//! └─────────────────────┘    └───────┬───────┘    └──────────────┘
//!                                    │
//!                                    ▼
//!                             graphs (catalog)
//! ```
//!
//! - **[`plugin`]**: the [`Plugin`] trait and [`SolrJvmPlugin`]
//! - **[`graphs`]**: the static graph catalog
//! - **[`output`]**: value lines and graph definition output
//! - **[`settings`]**: layered configuration
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Report values
//! mackerel-plugin-solrjvm --url http://127.0.0.1:8983
//!
//! # Print graph definitions
//! MACKEREL_AGENT_PLUGIN_META=1 mackerel-plugin-solrjvm
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use mackerel_plugin_solrjvm::{output, Plugin, Settings, SolrJvmPlugin};
//!
//! # tokio_test::block_on(async {
//! let plugin = SolrJvmPlugin::from_settings(&Settings::default()).unwrap();
//! let sample = plugin.fetch_metrics().await.unwrap();
//!
//! let mut stdout = std::io::stdout();
//! output::write_values(
//!     &mut stdout,
//!     plugin.metric_key_prefix(),
//!     plugin.graph_definition(),
//!     &sample,
//!     0,
//! )
//! .unwrap();
//! # });
//! ```

pub mod graphs;
pub mod output;
pub mod plugin;
pub mod settings;

// Re-export main types for convenience
pub use graphs::graph_definition;
pub use output::Mode;
pub use plugin::{Plugin, SolrJvmPlugin, DEFAULT_PREFIX};
pub use settings::Settings;
pub use solrjvm_adapter::FetchError;
pub use solrjvm_types::{Graph, GraphDefinition, GraphMetric, MetricSample, Unit};
