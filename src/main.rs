use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mackerel_plugin_solrjvm::{output, Mode, Settings, SolrJvmPlugin};

#[derive(Parser, Debug)]
#[command(name = "mackerel-plugin-solrjvm")]
#[command(about = "Mackerel agent plugin reporting Apache Solr JVM metrics")]
struct Args {
    /// Solr base URL (default: http://127.0.0.1:8983)
    #[arg(long)]
    url: Option<String>,

    /// Metric key prefix (default: solrjvm)
    #[arg(long)]
    prefix: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[arg(long)]
    timeout: Option<u64>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print graph definitions instead of values
    #[arg(long)]
    meta: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Accepted for agent configs that pass it; no state file is kept
    #[arg(long, hide = true)]
    tempfile: Option<String>,
}

/// Long flags that may also be spelled with a single dash (`-url=...`).
const LONG_FLAGS: &[&str] = &["url", "prefix", "timeout", "config", "meta", "debug", "tempfile"];

/// Rewrite `-name` and `-name=value` to `--name...` for known long flags.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

impl Args {
    /// Load settings and apply command-line overrides.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref()).context("Failed to load settings")?;

        if let Some(ref url) = self.url {
            settings.url = url.clone();
        }
        if let Some(ref prefix) = self.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }

        Ok(settings)
    }
}

/// Logs go to stderr; stdout is reserved for the agent protocol.
fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    init_logging(args.debug)?;

    if let Some(ref tempfile) = args.tempfile {
        tracing::debug!(%tempfile, "Ignoring --tempfile, no state is kept between runs");
    }

    let settings = args.settings()?;
    tracing::debug!(?settings, "Loaded settings");

    let plugin = SolrJvmPlugin::from_settings(&settings)?;
    let mode = Mode::detect(args.meta);

    // One request per invocation; a single-threaded runtime is enough.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    rt.block_on(output::run(&plugin, mode, &mut out))
}
