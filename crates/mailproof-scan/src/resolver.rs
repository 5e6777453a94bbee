//! DNS resolver abstraction.
//!
//! All mechanism checks go through [`DnsResolver`], so the evaluation
//! logic is testable without network access. [`HickoryDns`] is the
//! production implementation; [`StaticResolver`] serves fixed answers
//! for tests and offline fixture runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::debug;

use crate::error::LookupError;

/// TXT lookup interface used by every mechanism check
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Look up the TXT records published at `name`.
    ///
    /// Character-string fragments of a single record are joined before
    /// being returned, so each element is one complete record.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// Apply a deadline to a single TXT lookup.
///
/// An elapsed deadline is reported as [`LookupError::Timeout`], which
/// the checks classify as indeterminate rather than failing.
pub(crate) async fn lookup_txt_timed<R: DnsResolver + ?Sized>(
    resolver: &R,
    name: &str,
    timeout: Duration,
) -> Result<Vec<String>, LookupError> {
    match tokio::time::timeout(timeout, resolver.lookup_txt(name)).await {
        Ok(result) => result,
        Err(_) => {
            debug!(name = %name, timeout_secs = timeout.as_secs(), "TXT lookup timed out");
            Err(LookupError::Timeout)
        }
    }
}

/// Production resolver backed by hickory-resolver and the system
/// configuration
#[derive(Clone)]
pub struct HickoryDns {
    resolver: TokioResolver,
}

impl HickoryDns {
    /// Create a resolver using the default upstream configuration
    #[must_use]
    pub fn new() -> Self {
        let resolver = TokioResolver::builder_with_config(
            ResolverConfig::default(),
            TokioConnectionProvider::default(),
        )
        .build();
        Self { resolver }
    }

    /// Create a resolver with explicit upstream configuration
    #[must_use]
    pub fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(opts)
                .build();
        Self { resolver }
    }

    fn classify_error(e: &hickory_resolver::ResolveError) -> LookupError {
        let msg = e.to_string().to_lowercase();
        if msg.contains("nxdomain") || msg.contains("no records") {
            LookupError::NoRecords
        } else if msg.contains("timeout") || msg.contains("timed out") {
            LookupError::Timeout
        } else if msg.contains("servfail") {
            LookupError::ServFail
        } else {
            LookupError::Other(e.to_string())
        }
    }
}

impl Default for HickoryDns {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for HickoryDns {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        debug!(name = %name, "TXT lookup");
        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => {
                let records: Vec<String> = lookup
                    .iter()
                    .map(|txt| {
                        txt.iter()
                            .map(|data| String::from_utf8_lossy(data).to_string())
                            .collect::<Vec<_>>()
                            .join("")
                    })
                    .collect();
                if records.is_empty() {
                    Err(LookupError::NoRecords)
                } else {
                    Ok(records)
                }
            }
            Err(e) => Err(Self::classify_error(&e)),
        }
    }
}

/// Canned answer served by [`StaticResolver`]
#[derive(Debug, Clone)]
pub enum StaticAnswer {
    /// The name resolves to these TXT records
    Records(Vec<String>),
    /// The lookup fails with this error
    Error(LookupError),
    /// The lookup never completes (exercises timeout handling)
    Hang,
}

/// Fixed-answer resolver for tests and offline fixture runs.
///
/// Names with no configured answer resolve to
/// [`LookupError::NoRecords`], matching what a real resolver returns
/// for an unpublished name.
#[derive(Clone, Default)]
pub struct StaticResolver {
    answers: Arc<HashMap<String, StaticAnswer>>,
}

impl StaticResolver {
    /// Build a resolver from `(name, answer)` pairs
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = (String, StaticAnswer)>) -> Self {
        Self {
            answers: Arc::new(answers.into_iter().collect()),
        }
    }

    /// Shorthand: a single name serving TXT records
    #[must_use]
    pub fn with_txt(name: &str, records: &[&str]) -> Self {
        Self::new([(
            name.to_string(),
            StaticAnswer::Records(records.iter().map(ToString::to_string).collect()),
        )])
    }
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        match self.answers.get(name) {
            Some(StaticAnswer::Records(records)) if records.is_empty() => {
                Err(LookupError::NoRecords)
            }
            Some(StaticAnswer::Records(records)) => Ok(records.clone()),
            Some(StaticAnswer::Error(e)) => Err(e.clone()),
            Some(StaticAnswer::Hang) => {
                futures_util::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
            None => Err(LookupError::NoRecords),
        }
    }
}
