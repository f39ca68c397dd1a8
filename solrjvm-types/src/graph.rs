//! Graph definitions - how metrics are grouped and presented.
//!
//! A graph definition is fixed at compile time. Every type here is `const`
//! constructible so a whole catalog can live in a `static`.

use std::ops::Index;

/// Display unit of a graph group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Plain counts.
    Integer,
    /// Byte sizes.
    Bytes,
}

impl Unit {
    /// The unit name as understood by the monitoring agent.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Integer => "integer",
            Unit::Bytes => "bytes",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single series on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphMetric {
    /// Short name, joined to the group name to form the sample key.
    pub name: &'static str,

    /// Display label.
    pub label: &'static str,

    /// Render as part of a stacked area.
    pub stacked: bool,

    /// Look the value up by `name` alone instead of `"<group>.<name>"`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub absolute_name: bool,
}

impl GraphMetric {
    /// Create an unstacked metric.
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            stacked: false,
            absolute_name: false,
        }
    }

    /// Mark the metric as stacked.
    pub const fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    /// Mark the metric as using an absolute name.
    pub const fn absolute(mut self) -> Self {
        self.absolute_name = true;
        self
    }
}

/// A named group of metrics rendered on one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    /// Group name, also the first segment of each metric key.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub name: &'static str,

    /// Chart title.
    pub label: &'static str,

    /// Unit shared by every metric in the group.
    pub unit: Unit,

    /// Metrics in display order.
    pub metrics: &'static [GraphMetric],
}

impl Graph {
    /// Create a graph group.
    pub const fn new(
        name: &'static str,
        label: &'static str,
        unit: Unit,
        metrics: &'static [GraphMetric],
    ) -> Self {
        Self {
            name,
            label,
            unit,
            metrics,
        }
    }

    /// The sample key a metric of this group is read from.
    pub fn metric_key(&self, metric: &GraphMetric) -> String {
        if metric.absolute_name {
            metric.name.to_string()
        } else {
            format!("{}.{}", self.name, metric.name)
        }
    }

    /// Sample keys of every metric in this group, in display order.
    pub fn metric_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.metrics.iter().map(move |m| self.metric_key(m))
    }
}

/// An ordered catalog of graph groups.
///
/// Lookups by name go through [`GraphDefinition::get`] or indexing;
/// indexing panics on an unknown group, the same way a map would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphDefinition {
    graphs: &'static [Graph],
}

impl GraphDefinition {
    /// Create a catalog from a static list of groups.
    pub const fn new(graphs: &'static [Graph]) -> Self {
        Self { graphs }
    }

    /// Look up a group by name.
    pub fn get(&self, name: &str) -> Option<&Graph> {
        self.graphs.iter().find(|g| g.name == name)
    }

    /// Iterate over groups in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Graph> {
        self.graphs.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Check if the catalog has no groups.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Sample keys referenced by every group, in declaration order.
    pub fn metric_keys(&self) -> impl Iterator<Item = String> {
        self.graphs.iter().flat_map(|g| g.metric_keys())
    }
}

impl Index<&str> for GraphDefinition {
    type Output = Graph;

    fn index(&self, name: &str) -> &Graph {
        match self.get(name) {
            Some(graph) => graph,
            None => panic!("no graph group named {name:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GRAPHS: GraphDefinition = GraphDefinition::new(&[
        Graph::new(
            "memory_used",
            "JVM Memory Used",
            Unit::Bytes,
            &[
                GraphMetric::new("total", "Total"),
                GraphMetric::new("heap", "Heap").stacked(),
            ],
        ),
        Graph::new(
            "uptime",
            "Uptime",
            Unit::Integer,
            &[GraphMetric::new("uptime_seconds", "Seconds").absolute()],
        ),
    ]);

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(GRAPHS.len(), 2);
        assert_eq!(GRAPHS["memory_used"].unit, Unit::Bytes);
        assert!(GRAPHS.get("gc_count").is_none());
    }

    #[test]
    #[should_panic(expected = "no graph group named")]
    fn test_index_unknown_group_panics() {
        let _ = &GRAPHS["missing"];
    }

    #[test]
    fn test_metric_keys() {
        let keys: Vec<_> = GRAPHS.metric_keys().collect();
        assert_eq!(keys, vec!["memory_used.total", "memory_used.heap", "uptime_seconds"]);
    }

    #[test]
    fn test_metric_flags() {
        let heap = GRAPHS["memory_used"].metrics[1];
        assert!(heap.stacked);
        assert!(!heap.absolute_name);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::Integer.to_string(), "integer");
        assert_eq!(Unit::Bytes.as_str(), "bytes");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_graph_serializes_without_name() {
        let json = serde_json::to_value(GRAPHS["memory_used"]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "JVM Memory Used",
                "unit": "bytes",
                "metrics": [
                    { "name": "total", "label": "Total", "stacked": false },
                    { "name": "heap", "label": "Heap", "stacked": true }
                ]
            })
        );
    }
}
