use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tokio::sync::Semaphore;

/// Server settings, passed explicitly into [`crate::server::listener::Server`].
///
/// Defaults reproduce the fixed values the server has always used. A YAML
/// file may override any subset of them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Body of every 404 response.
    pub not_found_body: String,
    /// Longest request or header line accepted, CRLF excluded.
    pub max_line_length: usize,
    /// Upper bound on connections handled at once. `None` means unbounded.
    pub max_connections: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9980,
            not_found_body: "The requested page not found".to_string(),
            max_line_length: 8192,
            max_connections: None,
        }
    }
}

impl Config {
    /// Parses a YAML document; absent keys keep their default value.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(text).context("invalid configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects limits the acceptor cannot honour.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(n) = self.max_connections {
            if n == 0 {
                anyhow::bail!("max_connections must be at least 1");
            }
            if n > Semaphore::MAX_PERMITS {
                anyhow::bail!(
                    "max_connections {} exceeds the maximum of {}",
                    n,
                    Semaphore::MAX_PERMITS
                );
            }
        }
        Ok(())
    }

    /// Loads the YAML file at `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
