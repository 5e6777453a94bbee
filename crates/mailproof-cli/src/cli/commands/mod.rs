//! Command implementations.

pub mod config;
pub mod scan;
pub mod selectors;
pub mod serve;

use std::time::Duration;

use mailproof::ScanConfig;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,

    /// Persisted CLI configuration
    pub config: Config,
}

impl Context {
    /// Build the evaluator configuration from persisted config plus
    /// per-invocation overrides.
    pub fn scan_config(&self, timeout: Option<u64>, selectors: &[String]) -> ScanConfig {
        let mut config = ScanConfig::default();

        if let Some(secs) = timeout.or(self.config.timeout_secs) {
            config = config.timeout(Duration::from_secs(secs));
        }

        if !selectors.is_empty() {
            config = config.selectors(selectors.to_vec());
        } else if let Some(ref configured) = self.config.selectors {
            config = config.selectors(configured.clone());
        }

        config
    }
}
