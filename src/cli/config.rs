//! CLI handler for the configuration file.

use crate::config::Config;
use crate::global;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::{self, IsTerminal};

use super::args::{ConfigCliArgs, ConfigCommand};

pub fn handle_config_command(args: ConfigCliArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => handle_show(),
        Some(ConfigCommand::Path) => {
            println!("{}", global::config_file()?.display());
            Ok(())
        }
        Some(ConfigCommand::Reset { force }) => handle_reset(force),
    }
}

fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;

    println!("# {}", global::config_file()?.display());
    println!("{}", rendered.trim_end());
    Ok(())
}

fn handle_reset(force: bool) -> Result<()> {
    if !force {
        if !io::stdin().is_terminal() {
            println!("Non-interactive session. Re-run with --force to reset the configuration.");
            return Ok(());
        }

        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;
        if !proceed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    Config::default().save()?;
    println!("Configuration reset: {}", global::config_file()?.display());
    Ok(())
}
