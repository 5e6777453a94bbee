//! `mailproof serve` - run the JSON scan API.

use anyhow::Result;
use colored::Colorize;

use mailproof_srv::ServerConfig;

use super::Context;
use crate::cli::args::ServeArgs;

pub async fn execute(ctx: Context, args: ServeArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => ServerConfig::load(path)?,
        None => {
            // No server config file: seed from the CLI's persisted defaults.
            let mut config = ServerConfig::default();
            if let Some(secs) = ctx.config.timeout_secs {
                config.timeout_secs = secs;
            }
            if let Some(ref selectors) = ctx.config.selectors {
                config.selectors = selectors.clone();
            }
            config
        }
    };

    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    println!(
        "{} {}",
        "Scan API listening on".bold(),
        config.listen.to_string().cyan()
    );

    mailproof_srv::run(&config).await?;

    Ok(())
}
