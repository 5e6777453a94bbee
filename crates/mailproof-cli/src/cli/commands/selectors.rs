//! `mailproof selectors` - list the DKIM selectors probed by default.

use anyhow::Result;
use colored::Colorize;

use mailproof::DEFAULT_SELECTORS;

use super::Context;
use crate::output::OutputFormat;

pub fn execute(ctx: Context) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&DEFAULT_SELECTORS)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&DEFAULT_SELECTORS)?);
        }
        OutputFormat::Csv => {
            println!("selector");
            for selector in DEFAULT_SELECTORS {
                println!("{selector}");
            }
        }
        OutputFormat::Pretty => {
            println!("{}", "DKIM selectors probed by default:".bold());
            println!();
            for selector in DEFAULT_SELECTORS {
                println!("  {}._domainkey.<domain>", selector.cyan());
            }
            println!();
            println!(
                "{}",
                "Selectors are not enumerable from DNS; a domain using other names \
                 can still have DKIM configured. Probe specific names with --selector."
                    .dimmed()
            );
        }
    }

    Ok(())
}
