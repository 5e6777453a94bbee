//! HTTP scan API for the mailproof compliance scanner.
//!
//! Exposes the evaluator over JSON for the web client:
//!
//! - `POST /api/scan` with `{ "domain": "example.com" }` returns the
//!   named-field scan response
//! - `GET /health` for load balancers
//!
//! Invalid domains produce HTTP 400; DNS lookup failures never produce
//! an HTTP error, they surface as `indeterminate` checks in a 200
//! response.

#![doc(html_root_url = "https://docs.rs/mailproof-srv/0.3.0")]

pub mod config;
mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::SrvError;
pub use server::{router, run};

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, SrvError>;
