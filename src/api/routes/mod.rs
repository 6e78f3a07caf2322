//! API route modules.

pub mod catalog;
pub mod generate;
pub mod page;

use crate::config::GeneratorConfig;
use crate::generator::{AiApi, DisplayMode, FileId, GenerationOptions, SpeechApi};
use serde::Deserialize;

/// Shared by every handler: the configured generator defaults.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub defaults: GeneratorConfig,
}

/// Generator options as they arrive in a query string. Missing fields fall
/// back to the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuery {
    pub name: Option<String>,
    pub speech: Option<SpeechApi>,
    pub ai: Option<AiApi>,
    pub display: Option<DisplayMode>,
    /// Tab key or file name.
    pub tab: Option<String>,
}

impl GenerateQuery {
    pub fn options(&self, defaults: &GeneratorConfig) -> GenerationOptions {
        GenerationOptions::new(
            self.name
                .clone()
                .unwrap_or_else(|| defaults.extension_name.clone()),
            self.speech.unwrap_or(defaults.speech_api),
            self.ai.unwrap_or(defaults.ai_api),
            self.display.unwrap_or(defaults.display_mode),
        )
    }
}

/// Query string reproducing `options`, with `tab` when given.
pub fn options_query(options: &GenerationOptions, tab: Option<FileId>) -> String {
    let mut query = format!(
        "name={}&speech={}&ai={}&display={}",
        urlencoding::encode(&options.extension_name),
        options.speech_api,
        options.ai_api,
        options.display_mode
    );
    if let Some(tab) = tab {
        query.push_str("&tab=");
        query.push_str(tab.key());
    }
    query
}
