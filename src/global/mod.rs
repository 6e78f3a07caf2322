use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "meetcraft";

/// Overrides the config file location (used by tests and CI).
pub const CONFIG_ENV: &str = "MEETCRAFT_CONFIG";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Default folder for `meetcraft generate --out` when none is given.
pub fn default_export_dir() -> Result<PathBuf> {
    let base = std::env::current_dir().context("Unable to determine current directory")?;
    Ok(base.join("meeting-assistant-extension"))
}
