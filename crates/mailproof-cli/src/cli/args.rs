//! Command-line argument definitions using clap.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Email-authentication compliance scanner
///
/// Checks a domain's SPF, DKIM and DMARC DNS records and reports what
/// passes, what fails, and how to fix it.
#[derive(Parser, Debug)]
#[command(name = "mailproof")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a domain's SPF, DKIM and DMARC records
    Scan(ScanArgs),

    /// List the DKIM selectors probed by default
    Selectors,

    /// Run the JSON scan API server
    Serve(ServeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Domain name to scan (e.g., example.com)
    pub domain: String,

    /// Per-lookup DNS timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=30))]
    pub timeout: Option<u64>,

    /// DKIM selector to probe (repeatable; replaces the built-in list)
    #[arg(long = "selector")]
    pub selectors: Vec<String>,

    /// Skip remediation advice in pretty output
    #[arg(long)]
    pub no_advice: bool,
}

// ============================================================================
// Serve command
// ============================================================================

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address (overrides the config file)
    #[arg(short, long)]
    pub listen: Option<SocketAddr>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one configuration value
    Get {
        /// Key to read (output_format, timeout_secs, selectors)
        key: String,
    },

    /// Set one configuration value
    Set {
        /// Key to write (output_format, timeout_secs, selectors)
        key: String,
        /// New value
        value: String,
    },

    /// Print the config file location
    Path,
}
