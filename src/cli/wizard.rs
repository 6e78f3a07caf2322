//! Interactive generator wizard.

use crate::config::Config;
use crate::export::{self, Overwrite};
use crate::generator::{generate, AiApi, DisplayMode, GenerationOptions, SpeechApi};
use crate::global;
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use super::args::WizardCliArgs;

pub fn handle_wizard_command(args: WizardCliArgs) -> Result<()> {
    if !io::stdin().is_terminal() {
        bail!(
            "The wizard needs an interactive terminal; use 'meetcraft generate' with flags instead"
        );
    }

    let theme = ColorfulTheme::default();
    let mut config = Config::load()?;
    let defaults = &config.generator;

    println!();
    println!("Meeting Assistant Generator");
    println!("===========================");
    println!();

    let extension_name: String = Input::with_theme(&theme)
        .with_prompt("Extension name")
        .default(defaults.extension_name.clone())
        .interact_text()?;

    let speech_api = select(
        &theme,
        "Speech recognition API",
        &SpeechApi::ALL,
        defaults.speech_api,
        SpeechApi::label,
    )?;
    let ai_api = select(&theme, "AI API", &AiApi::ALL, defaults.ai_api, AiApi::label)?;
    let display_mode = select(
        &theme,
        "Display mode",
        &DisplayMode::ALL,
        defaults.display_mode,
        DisplayMode::label,
    )?;

    let options = GenerationOptions::new(extension_name, speech_api, ai_api, display_mode);
    let set = generate(&options)?;

    println!();
    println!("Generated files");
    println!("---------------");
    for (id, source) in set.iter() {
        println!("  {:<18} {:>6} bytes", id.file_name(), source.len());
    }
    println!();

    let out_dir = match args.out {
        Some(dir) => Some(dir),
        None => prompt_out_dir(&theme)?,
    };

    if let Some(dir) = out_dir {
        let overwrite = if config.export.overwrite || dir_is_empty(&dir) {
            Overwrite::Allow
        } else if Confirm::with_theme(&theme)
            .with_prompt(format!("{} already has files. Overwrite?", dir.display()))
            .default(false)
            .interact()?
        {
            Overwrite::Allow
        } else {
            println!("Export cancelled.");
            return Ok(());
        };

        let written = export::write_dir(&set, &dir, overwrite)?;
        println!("Wrote {} files to {}", written.len(), dir.display());
    }

    if args.save_defaults {
        config.generator.extension_name = options.extension_name.clone();
        config.generator.speech_api = options.speech_api;
        config.generator.ai_api = options.ai_api;
        config.generator.display_mode = options.display_mode;
        config.save()?;
        println!("Saved options as defaults in {}", global::config_file()?.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Put your API keys into background.js");
    println!("  2. Open chrome://extensions, enable Developer mode, click 'Load unpacked'");
    println!("  3. meetcraft catalog setup    - Full setup walkthrough");

    Ok(())
}

fn select<T: Copy + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[T],
    current: T,
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(label).collect();
    let default = choices.iter().position(|c| *c == current).unwrap_or(0);

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(choices[index])
}

fn prompt_out_dir(theme: &ColorfulTheme) -> Result<Option<PathBuf>> {
    let export = Confirm::with_theme(theme)
        .with_prompt("Write the files to a folder?")
        .default(true)
        .interact()?;
    if !export {
        return Ok(None);
    }

    let default_dir = Config::load()?
        .export
        .default_dir
        .map(Ok)
        .unwrap_or_else(global::default_export_dir)?;

    let dir: String = Input::with_theme(theme)
        .with_prompt("Output folder")
        .default(default_dir.display().to_string())
        .interact_text()?;

    Ok(Some(PathBuf::from(dir)))
}

fn dir_is_empty(dir: &std::path::Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}
