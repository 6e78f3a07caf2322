//! One askama template per generated file.
//!
//! Each struct carries only the values its file depends on, already encoded
//! for the target format.

use super::options::{DisplayMode, GenerationOptions, SpeechBackend, TemplateVariant};
use askama::Template;

#[derive(Template)]
#[template(path = "extension/manifest.json.jinja", escape = "none")]
pub struct ManifestTemplate {
    /// The extension name as a complete JSON string literal, quotes included.
    pub name_json: String,
}

#[derive(Template)]
#[template(path = "extension/popup.html.jinja", escape = "html")]
pub struct PopupHtmlTemplate<'a> {
    pub extension_name: &'a str,
}

#[derive(Template)]
#[template(path = "extension/popup.js.jinja", escape = "none")]
pub struct PopupJsTemplate;

#[derive(Template)]
#[template(path = "extension/background.js.jinja", escape = "none")]
pub struct BackgroundJsTemplate {
    pub speech_api: &'static str,
    pub ai_api: &'static str,
}

#[derive(Template)]
#[template(path = "extension/content_script.js.jinja", escape = "none")]
pub struct ContentScriptTemplate {
    pub overlay: bool,
}

#[derive(Template)]
#[template(path = "extension/offscreen.html.jinja", escape = "none")]
pub struct OffscreenHtmlTemplate;

#[derive(Template)]
#[template(path = "extension/offscreen.js.jinja", escape = "none")]
pub struct OffscreenJsTemplate {
    pub built_in_speech: bool,
    pub display_mode: &'static str,
    pub notification: bool,
}

impl ManifestTemplate {
    pub fn new(extension_name: &str) -> Self {
        Self {
            name_json: json_string(extension_name),
        }
    }
}

impl BackgroundJsTemplate {
    pub fn new(options: &GenerationOptions) -> Self {
        Self {
            speech_api: options.speech_api.as_str(),
            ai_api: options.ai_api.as_str(),
        }
    }
}

impl ContentScriptTemplate {
    pub fn for_variant(variant: TemplateVariant) -> Self {
        match variant.display {
            DisplayMode::Overlay => Self { overlay: true },
            DisplayMode::Notification => Self { overlay: false },
        }
    }
}

impl OffscreenJsTemplate {
    pub fn for_variant(variant: TemplateVariant) -> Self {
        let built_in_speech = match variant.speech {
            SpeechBackend::BuiltIn => true,
            SpeechBackend::ExternalStreaming => false,
        };
        Self {
            built_in_speech,
            display_mode: variant.display.as_str(),
            notification: variant.display == DisplayMode::Notification,
        }
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
