//! Metric samples produced by a single poll cycle.

use std::collections::BTreeMap;

/// A flat set of metric values keyed by dotted name.
///
/// Keys take the form `"<group>.<metric>"` (for example `"gc_count.young"`),
/// matching the graph groups declared in a [`GraphDefinition`](crate::GraphDefinition).
/// Values are passed through exactly as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MetricSample {
    values: BTreeMap<String, u64>,
}

impl MetricSample {
    /// Create an empty sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a key, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: u64) -> Option<u64> {
        self.values.insert(key.into(), value)
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for MetricSample {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for MetricSample {
    type Item = (String, u64);
    type IntoIter = std::collections::btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
