//! The Domain Compliance Evaluator.

use std::time::Duration;

use mailproof_core::{ComplianceReport, Result};
use tracing::debug;

use crate::dkim::{self, DEFAULT_SELECTORS};
use crate::dmarc;
use crate::domain::normalize_domain;
use crate::resolver::{DnsResolver, HickoryDns};
use crate::spf;

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Deadline applied to each individual DNS lookup
    pub timeout: Duration,
    /// DKIM selector names to probe
    pub selectors: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            selectors: DEFAULT_SELECTORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ScanConfig {
    /// Set the per-lookup timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the DKIM selector list
    #[must_use]
    pub fn selectors(mut self, selectors: Vec<String>) -> Self {
        self.selectors = selectors;
        self
    }
}

/// Stateless compliance scanner.
///
/// Each [`evaluate`](Self::evaluate) call is independent: the three
/// mechanism checks run concurrently against DNS, a lookup failure in
/// one never aborts the others, and the returned report is complete or
/// the input was invalid. Dropping the returned future (caller
/// disconnect) cancels any in-flight lookups.
#[derive(Clone)]
pub struct Evaluator<R = HickoryDns> {
    resolver: R,
    config: ScanConfig,
}

impl Evaluator<HickoryDns> {
    /// Evaluator over the system DNS configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(HickoryDns::new(), ScanConfig::default())
    }
}

impl Default for Evaluator<HickoryDns> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DnsResolver> Evaluator<R> {
    /// Evaluator over a custom resolver and configuration
    #[must_use]
    pub fn with_resolver(resolver: R, config: ScanConfig) -> Self {
        Self { resolver, config }
    }

    /// Evaluate SPF, DKIM and DMARC posture for `domain`.
    ///
    /// Fails only on input validation, before any network access; once
    /// the domain is accepted the result is always a complete report
    /// with the checks in `[SPF, DKIM, DMARC]` order.
    pub async fn evaluate(&self, domain: &str) -> Result<ComplianceReport> {
        let normalized = normalize_domain(domain)?;
        debug!(domain = %normalized, "starting compliance scan");

        let (spf, dkim, dmarc) = tokio::join!(
            spf::check(&self.resolver, &normalized, self.config.timeout),
            dkim::check(
                &self.resolver,
                &normalized,
                &self.config.selectors,
                self.config.timeout,
            ),
            dmarc::check(&self.resolver, &normalized, self.config.timeout),
        );

        Ok(ComplianceReport::new(normalized, spf, dkim, dmarc))
    }
}
