//! Mackerel agent plugin protocol.
//!
//! In normal mode a plugin prints one line per metric:
//!
//! ```text
//! solrjvm.gc_count.young	12	1703160000
//! ```
//!
//! When the agent sets `MACKEREL_AGENT_PLUGIN_META` it expects the graph
//! definitions instead: a `# mackerel-agent-plugin` header line followed by
//! a JSON document keyed by prefixed graph name.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::debug;

use solrjvm_types::{Graph, GraphDefinition, MetricSample};

use crate::plugin::Plugin;

/// Environment variable the agent sets when it wants graph definitions.
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

/// Header line of the graph definition output.
pub const META_HEADER: &str = "# mackerel-agent-plugin";

/// What a single plugin invocation prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Current metric values.
    Values,
    /// Graph definitions.
    Meta,
}

impl Mode {
    /// Pick the mode the way the agent signals it.
    pub fn detect(meta_flag: bool) -> Self {
        Self::from_parts(meta_flag, std::env::var_os(META_ENV).as_deref())
    }

    /// Any non-empty value of the meta variable selects [`Mode::Meta`].
    pub fn from_parts(meta_flag: bool, meta_env: Option<&OsStr>) -> Self {
        let env_meta = meta_env.is_some_and(|v| !v.is_empty());
        if meta_flag || env_meta {
            Mode::Meta
        } else {
            Mode::Values
        }
    }
}

#[derive(Serialize)]
struct Meta<'a> {
    graphs: BTreeMap<String, &'a Graph>,
}

fn qualified(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Write one value line per catalog metric present in the sample.
///
/// Lines follow catalog order. Metrics the sample lacks are skipped.
pub fn write_values<W: Write + ?Sized>(
    out: &mut W,
    prefix: &str,
    graphs: &GraphDefinition,
    sample: &MetricSample,
    timestamp: u64,
) -> io::Result<()> {
    for graph in graphs.iter() {
        for metric in graph.metrics {
            let key = graph.metric_key(metric);
            let Some(value) = sample.get(&key) else {
                debug!("No value for {}, skipping", key);
                continue;
            };
            writeln!(out, "{}\t{}\t{}", qualified(prefix, &key), value, timestamp)?;
        }
    }
    Ok(())
}

/// Write the graph definitions in the agent's meta format.
pub fn write_meta<W: Write + ?Sized>(
    out: &mut W,
    prefix: &str,
    graphs: &GraphDefinition,
) -> io::Result<()> {
    let meta = Meta {
        graphs: graphs.iter().map(|g| (qualified(prefix, g.name), g)).collect(),
    };

    writeln!(out, "{}", META_HEADER)?;
    serde_json::to_writer(&mut *out, &meta)?;
    writeln!(out)
}

/// Run one plugin invocation, writing protocol output to `out`.
///
/// On a fetch failure nothing is written and the error is returned.
pub async fn run<P, W>(plugin: &P, mode: Mode, out: &mut W) -> anyhow::Result<()>
where
    P: Plugin + ?Sized,
    W: Write,
{
    let prefix = plugin.metric_key_prefix();
    let graphs = plugin.graph_definition();

    match mode {
        Mode::Meta => write_meta(out, prefix, graphs)?,
        Mode::Values => {
            let sample = plugin.fetch_metrics().await?;
            write_values(out, prefix, graphs, &sample, unix_timestamp())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
