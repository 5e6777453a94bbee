//! Server configuration.

use std::net::SocketAddr;

use mailproof_scan::DEFAULT_SELECTORS;
use serde::{Deserialize, Serialize};

/// Configuration for the scan API server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP listen address (default: 0.0.0.0:8787)
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Per-lookup DNS timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// DKIM selector names to probe
    #[serde(default = "default_selectors")]
    pub selectors: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            timeout_secs: default_timeout_secs(),
            selectors: default_selectors(),
        }
    }
}

impl ServerConfig {
    /// Load config from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::SrvError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// The evaluator configuration this server config describes
    #[must_use]
    pub fn scan_config(&self) -> mailproof_scan::ScanConfig {
        mailproof_scan::ScanConfig::default()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .selectors(self.selectors.clone())
    }
}

// Default value functions for serde.
fn default_listen() -> SocketAddr {
    "0.0.0.0:8787".parse().expect("valid default addr")
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_selectors() -> Vec<String> {
    DEFAULT_SELECTORS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.listen.port(), 8787);
        assert_eq!(config.timeout_secs, 5);
        assert!(config.selectors.contains(&"default".to_string()));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: ServerConfig = toml::from_str("listen = \"127.0.0.1:9000\"").unwrap();
        assert_eq!(config.listen.port(), 9000);
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.selectors.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ServerConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: ServerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.listen, config.listen);
        assert_eq!(parsed.selectors, config.selectors);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = ServerConfig::load(std::path::Path::new("/nonexistent/mailproof.toml"));
        assert_eq!(config.unwrap().timeout_secs, 5);
    }
}
