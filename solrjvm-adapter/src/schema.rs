//! Response schema of `/solr/admin/metrics?group=jvm`.
//!
//! Only the counters the plugin reports are decoded. Anything else in the
//! response is ignored, and a counter that is missing or `null` decodes as
//! zero. Only the first JSON value in a body is read.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level body of the Solr metrics API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolrMetricsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: MetricsGroups,
}

/// Metric registries keyed by registry name. Only `solr.jvm` is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetricsGroups {
    #[serde(rename = "solr.jvm", deserialize_with = "null_as_default")]
    pub jvm: JvmMetrics,
}

/// Counters and gauges from the `solr.jvm` registry.
///
/// GC times are in milliseconds and memory figures in bytes, as Solr
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JvmMetrics {
    #[serde(rename = "gc.G1-Old-Generation.count", deserialize_with = "null_as_default")]
    pub gc_old_generation_count: u64,
    #[serde(rename = "gc.G1-Old-Generation.time", deserialize_with = "null_as_default")]
    pub gc_old_generation_time: u64,
    #[serde(rename = "gc.G1-Young-Generation.count", deserialize_with = "null_as_default")]
    pub gc_young_generation_count: u64,
    #[serde(rename = "gc.G1-Young-Generation.time", deserialize_with = "null_as_default")]
    pub gc_young_generation_time: u64,

    #[serde(rename = "memory.total.max", deserialize_with = "null_as_default")]
    pub memory_total_max: u64,
    #[serde(rename = "memory.total.used", deserialize_with = "null_as_default")]
    pub memory_total_used: u64,
    #[serde(rename = "memory.heap.used", deserialize_with = "null_as_default")]
    pub memory_heap_used: u64,
    #[serde(rename = "memory.non-heap.used", deserialize_with = "null_as_default")]
    pub memory_non_heap_used: u64,

    #[serde(rename = "memory.pools.CodeHeap-'non-nmethods'.used", deserialize_with = "null_as_default")]
    pub pool_code_heap_non_nmethods_used: u64,
    #[serde(rename = "memory.pools.CodeHeap-'non-profiled-nmethods'.used", deserialize_with = "null_as_default")]
    pub pool_code_heap_non_profiled_nmethods_used: u64,
    #[serde(rename = "memory.pools.CodeHeap-'profiled-nmethods'.used", deserialize_with = "null_as_default")]
    pub pool_code_heap_profiled_nmethods_used: u64,
    #[serde(rename = "memory.pools.Compressed-Class-Space.used", deserialize_with = "null_as_default")]
    pub pool_compressed_class_space_used: u64,
    #[serde(rename = "memory.pools.G1-Eden-Space.used", deserialize_with = "null_as_default")]
    pub pool_g1_eden_space_used: u64,
    #[serde(rename = "memory.pools.G1-Old-Gen.used", deserialize_with = "null_as_default")]
    pub pool_g1_old_gen_used: u64,
    #[serde(rename = "memory.pools.G1-Survivor-Space.used", deserialize_with = "null_as_default")]
    pub pool_g1_survivor_space_used: u64,
    #[serde(rename = "memory.pools.Metaspace.used", deserialize_with = "null_as_default")]
    pub pool_metaspace_used: u64,

    #[serde(rename = "threads.blocked.count", deserialize_with = "null_as_default")]
    pub threads_blocked_count: u64,
    #[serde(rename = "threads.count", deserialize_with = "null_as_default")]
    pub threads_count: u64,
    #[serde(rename = "threads.daemon.count", deserialize_with = "null_as_default")]
    pub threads_daemon_count: u64,
    #[serde(rename = "threads.deadlock.count", deserialize_with = "null_as_default")]
    pub threads_deadlock_count: u64,
    #[serde(rename = "threads.new.count", deserialize_with = "null_as_default")]
    pub threads_new_count: u64,
    #[serde(rename = "threads.runnable.count", deserialize_with = "null_as_default")]
    pub threads_runnable_count: u64,
    #[serde(rename = "threads.terminated.count", deserialize_with = "null_as_default")]
    pub threads_terminated_count: u64,
    #[serde(rename = "threads.timed_waiting.count", deserialize_with = "null_as_default")]
    pub threads_timed_waiting_count: u64,
    #[serde(rename = "threads.waiting.count", deserialize_with = "null_as_default")]
    pub threads_waiting_count: u64,
}

impl SolrMetricsResponse {
    /// Decode the first JSON value of a response body.
    ///
    /// Whatever follows that value is not read.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        Self::deserialize(&mut deserializer)
    }

    /// Take the JVM registry out of the response.
    pub fn into_jvm(self) -> JvmMetrics {
        self.metrics.jvm
    }
}
