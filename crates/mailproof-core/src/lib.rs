//! Core types and errors for the mailproof compliance scanner.
//!
//! This crate provides the foundational types used across the mailproof
//! workspace:
//!
//! - **Types**: [`ComplianceCheck`], [`ComplianceReport`] and the JSON
//!   adapter shapes consumed by the scan API
//! - **Errors**: Comprehensive error handling with [`MailproofError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use mailproof_core::{ComplianceReport, MailproofError, Result};
//!
//! fn summarize(report: ComplianceReport) -> Result<()> {
//!     println!("Domain: {}", report.domain);
//!     println!("Score: {}/100", report.score());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/mailproof-core/0.3.0")]

mod error;
pub mod types;

pub use error::{MailproofError, Result};
pub use types::*;
