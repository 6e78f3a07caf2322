pub mod args;
pub mod catalog;
pub mod config;
pub mod generate;
pub mod wizard;

pub use args::{
    CatalogCliArgs, Cli, CliCommand, ConfigCliArgs, ConfigCommand, GenerateCliArgs, ServeCliArgs,
    WizardCliArgs,
};
pub use catalog::handle_catalog_command;
pub use config::handle_config_command;
pub use generate::handle_generate_command;
pub use wizard::handle_wizard_command;

use crate::api::ApiServer;
use crate::config::Config;
use anyhow::Result;

pub async fn handle_serve_command(args: ServeCliArgs) -> Result<()> {
    let config = Config::load()?;
    let mut server = ApiServer::new(&config);
    if let Some(port) = args.port {
        server = server.with_port(port);
    }
    server.start().await
}
