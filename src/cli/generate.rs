//! CLI handler for code generation.
//!
//! Terminal presentation only; generation lives in `crate::generator`.

use crate::clipboard::{ClipboardService, CopiedWith};
use crate::config::{Config, GeneratorConfig};
use crate::export::{self, Overwrite};
use crate::generator::{generate, CodeView, GenerationOptions};
use anyhow::{Context, Result};
use tracing::debug;

use super::args::GenerateCliArgs;

pub fn handle_generate_command(args: GenerateCliArgs) -> Result<()> {
    let config = Config::load()?;
    let options = resolve_options(&args, &config.generator);
    debug!("Resolved generator options: {:?}", options);

    let mut view = CodeView::new(generate(&options)?);
    if let Some(tab) = args.tab.as_deref() {
        view.select_tab_key(tab)?;
    }

    let overwrite = if args.force || config.export.overwrite {
        Overwrite::Allow
    } else {
        Overwrite::Refuse
    };

    let mut exported = false;
    if let Some(dir) = args.out.as_deref() {
        let written = export::write_dir(view.files(), dir, overwrite)?;
        eprintln!("Wrote {} files to {}", written.len(), dir.display());
        exported = true;
    }
    if let Some(path) = args.archive.as_deref() {
        export::write_archive(view.files(), path, overwrite)?;
        eprintln!("Wrote archive {}", path.display());
        exported = true;
    }

    if args.copy {
        let copied_with = ClipboardService::new()
            .copy(view.active_source())
            .with_context(|| format!("Failed to copy {} to clipboard", view.active()))?;
        let backend = match copied_with {
            CopiedWith::Native => "system clipboard".to_string(),
            CopiedWith::Tool(name) => name.to_string(),
        };
        eprintln!(
            "Copied {} to clipboard via {} ({} chars)",
            view.active(),
            backend,
            view.active_source().len()
        );
    }

    if args.all {
        for (id, source) in view.files().iter() {
            println!("// ===== {} =====", id.file_name());
            println!("{}", source);
            println!();
        }
    } else if args.tab.is_some() || !(exported || args.copy) {
        println!("{}", view.active_source());
    }

    Ok(())
}

/// Command-line flags win over config defaults.
pub fn resolve_options(args: &GenerateCliArgs, defaults: &GeneratorConfig) -> GenerationOptions {
    GenerationOptions::new(
        args.name
            .clone()
            .unwrap_or_else(|| defaults.extension_name.clone()),
        args.speech.unwrap_or(defaults.speech_api),
        args.ai.unwrap_or(defaults.ai_api),
        args.display.unwrap_or(defaults.display_mode),
    )
}
