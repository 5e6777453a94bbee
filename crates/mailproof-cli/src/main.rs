//! mailproof - email-authentication compliance scanner
//!
//! Checks a domain's SPF, DKIM and DMARC posture from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mailproof_cli::run().await
}
