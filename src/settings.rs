//! Plugin settings.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. an optional settings file (TOML, YAML or JSON, by extension)
//! 3. `SOLRJVM_*` environment variables, e.g. `SOLRJVM_URL`
//!
//! Command-line flags are applied on top by the binary.
//!
//! ```toml
//! url = "http://solr.internal:8983"
//! prefix = "solrjvm"
//! timeout_secs = 5
//! ```

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use solrjvm_adapter::solr::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

use crate::plugin::DEFAULT_PREFIX;

/// Environment variable prefix for settings.
pub const ENV_PREFIX: &str = "SOLRJVM";

/// Resolved plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Solr base URL, without a trailing path.
    pub url: String,
    /// Metric key prefix.
    pub prefix: String,
    /// Request timeout in seconds, `0` for none.
    pub timeout_secs: u64,
}

impl Settings {
    /// Load settings from defaults, an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("url", DEFAULT_ENDPOINT)?
            .set_default("prefix", DEFAULT_PREFIX)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT.as_secs())?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// The request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.url, "http://127.0.0.1:8983");
        assert_eq!(settings.prefix, "solrjvm");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "url = \"http://solr.internal:8983\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let settings = Settings::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(settings.url, "http://solr.internal:8983");
        assert_eq!(settings.prefix, "solrjvm");
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "url = \"http://from-file:8983\"").unwrap();

        let settings = Settings::load_with_env(
            Some(file.path()),
            env(&[("SOLRJVM_URL", "http://from-env:8983"), ("SOLRJVM_TIMEOUT_SECS", "2")]),
        )
        .unwrap();
        assert_eq!(settings.url, "http://from-env:8983");
        assert_eq!(settings.timeout_secs, 2);
    }

    #[test]
    fn test_zero_timeout_is_accepted() {
        let settings =
            Settings::load_with_env(None, env(&[("SOLRJVM_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(settings.timeout_secs, 0);
        assert!(settings.timeout().is_zero());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load_with_env(Some(Path::new("/nonexistent/solrjvm.toml")), env(&[]));
        assert!(result.is_err());
    }
}
