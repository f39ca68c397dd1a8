//! # solrjvm-types
//!
//! Core types shared between the Solr JVM collector and the Mackerel plugin
//! surface. Nothing in here talks to the network: these are the shapes that
//! flow out of a poll cycle.
//!
//! - [`MetricSample`]: flat mapping from dotted metric keys
//!   (`"memory_used.heap"`) to unsigned values, produced once per poll.
//! - [`GraphDefinition`]: static catalog of graph groups, each with a label,
//!   a [`Unit`] and an ordered list of [`GraphMetric`]s.
//!
//! ## Features
//!
//! - `serde`: serialization support for samples and graph definitions
//!
//! ## Example
//!
//! ```rust
//! use solrjvm_types::{Graph, GraphDefinition, GraphMetric, MetricSample, Unit};
//!
//! static GRAPHS: GraphDefinition = GraphDefinition::new(&[Graph::new(
//!     "gc_count",
//!     "JVM GC Count",
//!     Unit::Integer,
//!     &[GraphMetric::new("old", "Old"), GraphMetric::new("young", "Young")],
//! )]);
//!
//! let mut sample = MetricSample::new();
//! sample.insert("gc_count.old", 3);
//! sample.insert("gc_count.young", 12);
//!
//! for key in GRAPHS.metric_keys() {
//!     assert!(sample.contains_key(&key));
//! }
//! assert_eq!(GRAPHS["gc_count"].label, "JVM GC Count");
//! ```

mod graph;
mod sample;

pub use graph::*;
pub use sample::*;
