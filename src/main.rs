use anyhow::Result;
use clap::Parser;
use meetcraft::cli::{
    handle_catalog_command, handle_config_command, handle_generate_command, handle_serve_command,
    handle_wizard_command, Cli, CliCommand, ServeCliArgs,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("meetcraft {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Generate(args)) => handle_generate_command(args),
        Some(CliCommand::Catalog(args)) => handle_catalog_command(args),
        Some(CliCommand::Wizard(args)) => handle_wizard_command(args),
        Some(CliCommand::Config(args)) => handle_config_command(args),
        Some(CliCommand::Serve(args)) => handle_serve_command(args).await,
        None => handle_serve_command(ServeCliArgs { port: None }).await,
    }
}
