use crate::catalog::CatalogTable;
use crate::generator::{AiApi, DisplayMode, SpeechApi};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meetcraft")]
#[command(about = "Meeting assistant extension guide and code generator", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate the seven extension files
    Generate(GenerateCliArgs),
    /// Browse the reference tables (APIs, workarounds, setup steps, tips)
    Catalog(CatalogCliArgs),
    /// Pick generator options interactively, then generate
    Wizard(WizardCliArgs),
    /// Serve the guide page and generator API locally
    Serve(ServeCliArgs),
    /// Inspect or reset the configuration file
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateCliArgs {
    /// Extension name written into manifest.json and popup.html
    #[arg(short, long)]
    pub name: Option<String>,
    /// Speech recognition API (default: from config)
    #[arg(short, long, value_enum)]
    pub speech: Option<SpeechApi>,
    /// AI API used to answer questions (default: from config)
    #[arg(short, long, value_enum)]
    pub ai: Option<AiApi>,
    /// How answers are displayed (default: from config)
    #[arg(short, long, value_enum)]
    pub display: Option<DisplayMode>,
    /// File to print: a tab key (manifest, popup-js, ...) or a file name
    #[arg(short, long)]
    pub tab: Option<String>,
    /// Print every file instead of a single tab
    #[arg(long, conflicts_with = "tab")]
    pub all: bool,
    /// Copy the selected tab's raw text to the clipboard
    #[arg(short, long)]
    pub copy: bool,
    /// Write all files into this directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Write all files into a .tar.gz archive
    #[arg(long)]
    pub archive: Option<PathBuf>,
    /// Overwrite existing files when exporting
    #[arg(short, long)]
    pub force: bool,
}

#[derive(ClapArgs, Debug)]
pub struct CatalogCliArgs {
    /// Table to show (default: all tables)
    #[arg(value_enum)]
    pub table: Option<CatalogTable>,
    /// Print as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug)]
pub struct WizardCliArgs {
    /// Directory to export into after generating (prompted when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Save the chosen options as the new defaults
    #[arg(long)]
    pub save_defaults: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ServeCliArgs {
    /// Port to listen on (default: from config, 3737)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Restore the default configuration
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}
