//! Graph catalog for the Solr JVM plugin.
//!
//! Group and metric names here must match the output keys of
//! [`solrjvm_adapter::FIELD_MAPPINGS`]: each metric is looked up in the
//! sample as `"<group>.<metric>"`.

use solrjvm_types::{Graph, GraphDefinition, GraphMetric, Unit};

static GRAPHS: GraphDefinition = GraphDefinition::new(&[
    Graph::new(
        "gc_count",
        "JVM GC Count",
        Unit::Integer,
        &[GraphMetric::new("old", "Old"), GraphMetric::new("young", "Young")],
    ),
    Graph::new(
        "gc_time",
        "JVM GC Time",
        Unit::Integer,
        &[GraphMetric::new("old", "Old"), GraphMetric::new("young", "Young")],
    ),
    Graph::new(
        "memory_used",
        "JVM Memory Used",
        Unit::Bytes,
        &[
            GraphMetric::new("total_max", "Total Max"),
            GraphMetric::new("total", "Total"),
            GraphMetric::new("heap", "Heap").stacked(),
            GraphMetric::new("non_heap", "Non Heap").stacked(),
        ],
    ),
    Graph::new(
        "memory_space",
        "JVM Memory Space",
        Unit::Bytes,
        &[
            GraphMetric::new("code_heap_non_n_methods", "Code Heap Non N Methods").stacked(),
            GraphMetric::new(
                "code_heap_non_profiled_n_methods",
                "Code Heap Non Profiled N Methods",
            )
            .stacked(),
            GraphMetric::new("code_heap_profiled_n_methods", "Code Heap Profiled N Methods")
                .stacked(),
            GraphMetric::new("compressed_class", "Compressed Class").stacked(),
            GraphMetric::new("eden", "Eden").stacked(),
            GraphMetric::new("old", "Old").stacked(),
            GraphMetric::new("survivor", "Survivor").stacked(),
            GraphMetric::new("metaspace", "Metaspace").stacked(),
        ],
    ),
    Graph::new(
        "thread_count",
        "JVM Thread Count",
        Unit::Integer,
        &[
            GraphMetric::new("blocked", "Blocked"),
            GraphMetric::new("all", "All"),
            GraphMetric::new("daemon", "Daemon"),
            GraphMetric::new("deadlock", "Deadlock"),
            GraphMetric::new("new", "New"),
            GraphMetric::new("runnable", "Runnable"),
            GraphMetric::new("terminated", "Terminated"),
            GraphMetric::new("timedWaiting", "TimedWaiting"),
            GraphMetric::new("waiting", "Waiting"),
        ],
    ),
]);

/// The graph catalog. Always the same value.
pub fn graph_definition() -> &'static GraphDefinition {
    &GRAPHS
}
