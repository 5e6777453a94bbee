//! `mailproof config` - manage persisted CLI defaults.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Get { key } => {
            println!("{}", ctx.config.get(&key)?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = ctx.config;
            config.set(&key, &value)?;
            config.save()?;
            println!("{} {} = {}", "Saved:".green().bold(), key, value);
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}
