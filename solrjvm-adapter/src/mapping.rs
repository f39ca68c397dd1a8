//! Renaming of Solr JVM counters into plugin metric keys.
//!
//! [`FIELD_MAPPINGS`] is the only place output keys are spelled out. Each
//! key is `"<graph group>.<metric>"` and must line up with the graph catalog
//! the plugin declares.

use solrjvm_types::MetricSample;

use crate::schema::JvmMetrics;

/// One entry of the rename table.
#[derive(Clone, Copy)]
pub struct FieldMapping {
    /// JSON key in the `solr.jvm` registry.
    pub source: &'static str,
    /// Dotted output key.
    pub key: &'static str,
    read: fn(&JvmMetrics) -> u64,
}

impl FieldMapping {
    const fn new(source: &'static str, key: &'static str, read: fn(&JvmMetrics) -> u64) -> Self {
        Self { source, key, read }
    }

    /// Read this field's value from a decoded document.
    pub fn value(&self, metrics: &JvmMetrics) -> u64 {
        (self.read)(metrics)
    }
}

impl std::fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMapping")
            .field("source", &self.source)
            .field("key", &self.key)
            .finish()
    }
}

/// Source field to output key, in output order.
pub static FIELD_MAPPINGS: [FieldMapping; 25] = [
    // GC
    FieldMapping::new("gc.G1-Old-Generation.count", "gc_count.old", |m| m.gc_old_generation_count),
    FieldMapping::new("gc.G1-Young-Generation.count", "gc_count.young", |m| {
        m.gc_young_generation_count
    }),
    FieldMapping::new("gc.G1-Old-Generation.time", "gc_time.old", |m| m.gc_old_generation_time),
    FieldMapping::new("gc.G1-Young-Generation.time", "gc_time.young", |m| {
        m.gc_young_generation_time
    }),
    // Memory totals
    FieldMapping::new("memory.total.max", "memory_used.total_max", |m| m.memory_total_max),
    FieldMapping::new("memory.total.used", "memory_used.total", |m| m.memory_total_used),
    FieldMapping::new("memory.heap.used", "memory_used.heap", |m| m.memory_heap_used),
    FieldMapping::new("memory.non-heap.used", "memory_used.non_heap", |m| m.memory_non_heap_used),
    // Memory pools
    FieldMapping::new(
        "memory.pools.CodeHeap-'non-nmethods'.used",
        "memory_space.code_heap_non_n_methods",
        |m| m.pool_code_heap_non_nmethods_used,
    ),
    FieldMapping::new(
        "memory.pools.CodeHeap-'non-profiled-nmethods'.used",
        "memory_space.code_heap_non_profiled_n_methods",
        |m| m.pool_code_heap_non_profiled_nmethods_used,
    ),
    FieldMapping::new(
        "memory.pools.CodeHeap-'profiled-nmethods'.used",
        "memory_space.code_heap_profiled_n_methods",
        |m| m.pool_code_heap_profiled_nmethods_used,
    ),
    FieldMapping::new(
        "memory.pools.Compressed-Class-Space.used",
        "memory_space.compressed_class",
        |m| m.pool_compressed_class_space_used,
    ),
    FieldMapping::new("memory.pools.G1-Eden-Space.used", "memory_space.eden", |m| {
        m.pool_g1_eden_space_used
    }),
    FieldMapping::new("memory.pools.G1-Old-Gen.used", "memory_space.old", |m| {
        m.pool_g1_old_gen_used
    }),
    FieldMapping::new("memory.pools.G1-Survivor-Space.used", "memory_space.survivor", |m| {
        m.pool_g1_survivor_space_used
    }),
    FieldMapping::new("memory.pools.Metaspace.used", "memory_space.metaspace", |m| {
        m.pool_metaspace_used
    }),
    // Threads
    FieldMapping::new("threads.blocked.count", "thread_count.blocked", |m| m.threads_blocked_count),
    FieldMapping::new("threads.count", "thread_count.all", |m| m.threads_count),
    FieldMapping::new("threads.daemon.count", "thread_count.daemon", |m| m.threads_daemon_count),
    FieldMapping::new("threads.deadlock.count", "thread_count.deadlock", |m| {
        m.threads_deadlock_count
    }),
    FieldMapping::new("threads.new.count", "thread_count.new", |m| m.threads_new_count),
    FieldMapping::new("threads.runnable.count", "thread_count.runnable", |m| {
        m.threads_runnable_count
    }),
    FieldMapping::new("threads.terminated.count", "thread_count.terminated", |m| {
        m.threads_terminated_count
    }),
    FieldMapping::new("threads.timed_waiting.count", "thread_count.timedWaiting", |m| {
        m.threads_timed_waiting_count
    }),
    FieldMapping::new("threads.waiting.count", "thread_count.waiting", |m| m.threads_waiting_count),
];

/// Convert a decoded document into a metric sample.
///
/// Every field in [`FIELD_MAPPINGS`] is copied once, unchanged.
pub fn to_sample(metrics: &JvmMetrics) -> MetricSample {
    FIELD_MAPPINGS
        .iter()
        .map(|mapping| (mapping.key, mapping.value(metrics)))
        .collect()
}
