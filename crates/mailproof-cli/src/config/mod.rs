//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Per-lookup DNS timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// DKIM selectors to probe instead of the built-in list.
    pub selectors: Option<Vec<String>>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "mailproof", "mailproof")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Read one key as a display string.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "output_format" => Ok(self
                .output_format
                .map_or_else(|| "unset".to_string(), |f| f.to_string())),
            "timeout_secs" => Ok(self
                .timeout_secs
                .map_or_else(|| "unset".to_string(), |t| t.to_string())),
            "selectors" => Ok(self
                .selectors
                .as_ref()
                .map_or_else(|| "unset".to_string(), |s| s.join(","))),
            _ => anyhow::bail!(
                "Unknown config key: {key}\n\
                 Valid keys: output_format, timeout_secs, selectors"
            ),
        }
    }

    /// Set one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" => self.output_format = Some(value.parse()?),
            "timeout_secs" => self.timeout_secs = Some(value.parse()?),
            "selectors" => {
                self.selectors = Some(
                    value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                );
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}\n\
                 Valid keys: output_format, timeout_secs, selectors"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let mut config = Config::default();
        config.set("output_format", "json").unwrap();
        config.set("timeout_secs", "10").unwrap();
        config.set("selectors", "mail, s1,").unwrap();

        assert_eq!(config.get("output_format").unwrap(), "json");
        assert_eq!(config.get("timeout_secs").unwrap(), "10");
        assert_eq!(config.get("selectors").unwrap(), "mail,s1");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut config = Config::default();
        assert!(config.set("api_key", "abc").is_err());
        assert!(config.get("api_key").is_err());
    }

    #[test]
    fn unset_keys_display_as_unset() {
        let config = Config::default();
        assert_eq!(config.get("timeout_secs").unwrap(), "unset");
    }
}
