//! Email-authentication compliance scanner for SPF, DKIM and DMARC.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() -> mailproof::Result<()> {
//!     let report = mailproof::scan_domain("example.com").await?;
//!
//!     println!("{}: {} ({}/100)", report.domain, report.overall, report.score());
//!     for check in &report.checks {
//!         println!("  {:5} {}", check.mechanism, check.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! For custom timeouts, selector lists or resolvers, build an
//! [`Evaluator`] directly.

#![doc(html_root_url = "https://docs.rs/mailproof/0.3.0")]

// Re-export core types
pub use mailproof_core::*;

// Re-export the scan engine
pub use mailproof_scan::{
    normalize_domain, DnsResolver, Evaluator, HickoryDns, LookupError, ScanConfig, StaticAnswer,
    StaticResolver, DEFAULT_SELECTORS,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;

/// Scan a domain with default settings (system DNS, 5 second per-lookup
/// timeout, built-in selector list).
pub async fn scan_domain(domain: &str) -> Result<ComplianceReport> {
    Evaluator::new().evaluate(domain).await
}
