//! DNS evaluation engine for SPF, DKIM and DMARC compliance.
//!
//! The entry point is [`Evaluator`], a stateless scanner that performs
//! the three mechanism lookups concurrently and assembles a
//! [`mailproof_core::ComplianceReport`]:
//!
//! ```rust,ignore
//! use mailproof_scan::Evaluator;
//!
//! let evaluator = Evaluator::new();
//! let report = evaluator.evaluate("example.com").await?;
//! println!("{}: {}", report.domain, report.overall);
//! ```
//!
//! DNS access goes through the [`DnsResolver`] trait; production code
//! uses [`HickoryDns`], tests and offline runs use [`StaticResolver`].

#![doc(html_root_url = "https://docs.rs/mailproof-scan/0.3.0")]

mod dkim;
mod dmarc;
mod domain;
mod error;
mod evaluator;
mod resolver;
mod spf;

pub use dkim::DEFAULT_SELECTORS;
pub use domain::normalize_domain;
pub use error::LookupError;
pub use evaluator::{Evaluator, ScanConfig};
pub use resolver::{DnsResolver, HickoryDns, StaticAnswer, StaticResolver};
