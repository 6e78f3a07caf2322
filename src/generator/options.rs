//! User-selectable options that drive code generation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default extension name used by the CLI, wizard and config.
pub const DEFAULT_EXTENSION_NAME: &str = "Meeting Assistant";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str, keys: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: keys.join(", "),
        }
    }
}

/// Speech recognition service the generated extension talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpeechApi {
    Webspeech,
    Assemblyai,
    Deepgram,
    Whisper,
    Realtime,
}

impl SpeechApi {
    pub const ALL: [SpeechApi; 5] = [
        SpeechApi::Webspeech,
        SpeechApi::Assemblyai,
        SpeechApi::Deepgram,
        SpeechApi::Whisper,
        SpeechApi::Realtime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webspeech => "webspeech",
            Self::Assemblyai => "assemblyai",
            Self::Deepgram => "deepgram",
            Self::Whisper => "whisper",
            Self::Realtime => "realtime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Webspeech => "Web Speech API (Free)",
            Self::Assemblyai => "AssemblyAI Universal-Streaming",
            Self::Deepgram => "Deepgram",
            Self::Whisper => "OpenAI Whisper API",
            Self::Realtime => "OpenAI Realtime API",
        }
    }

    /// Only the browser's own recognizer runs without a streaming socket.
    pub fn backend(&self) -> SpeechBackend {
        match self {
            Self::Webspeech => SpeechBackend::BuiltIn,
            _ => SpeechBackend::ExternalStreaming,
        }
    }
}

/// Language model used to answer questions heard in the meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AiApi {
    Gpt4,
    Gpt5,
    Claude,
}

impl AiApi {
    pub const ALL: [AiApi; 3] = [AiApi::Gpt4, AiApi::Gpt5, AiApi::Claude];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt4 => "gpt4",
            Self::Gpt5 => "gpt5",
            Self::Claude => "claude",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gpt4 => "OpenAI GPT-4",
            Self::Gpt5 => "OpenAI GPT-5",
            Self::Claude => "Anthropic Claude",
        }
    }
}

/// Where answers are shown on the meeting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Overlay,
    Notification,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Overlay, DisplayMode::Notification];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Notification => "notification",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overlay => "On-page overlay (hide with Ctrl+Shift+H)",
            Self::Notification => "Browser notifications",
        }
    }
}

/// How the generated offscreen document obtains transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechBackend {
    /// `webkitSpeechRecognition` inside the browser.
    BuiltIn,
    /// A WebSocket to a hosted streaming recognizer.
    ExternalStreaming,
}

macro_rules! impl_option_str {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == needle)
                    .ok_or_else(|| {
                        let keys: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                        ParseOptionError::new($kind, s, &keys)
                    })
            }
        }
    };
}

impl_option_str!(SpeechApi, "speech API");
impl_option_str!(AiApi, "AI API");
impl_option_str!(DisplayMode, "display mode");

/// The four selections that fully determine a generated file set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub extension_name: String,
    pub speech_api: SpeechApi,
    pub ai_api: AiApi,
    pub display_mode: DisplayMode,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            extension_name: DEFAULT_EXTENSION_NAME.to_string(),
            speech_api: SpeechApi::Webspeech,
            ai_api: AiApi::Gpt4,
            display_mode: DisplayMode::Overlay,
        }
    }
}

impl GenerationOptions {
    pub fn new(
        extension_name: impl Into<String>,
        speech_api: SpeechApi,
        ai_api: AiApi,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            extension_name: extension_name.into(),
            speech_api,
            ai_api,
            display_mode,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.extension_name = name.into();
        self
    }

    pub fn with_speech_api(mut self, speech_api: SpeechApi) -> Self {
        self.speech_api = speech_api;
        self
    }

    pub fn with_ai_api(mut self, ai_api: AiApi) -> Self {
        self.ai_api = ai_api;
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn variant(&self) -> TemplateVariant {
        TemplateVariant {
            speech: self.speech_api.backend(),
            display: self.display_mode,
        }
    }
}

/// The pair of branch points the templates switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateVariant {
    pub speech: SpeechBackend,
    pub display: DisplayMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_case_insensitive() {
        assert_eq!("AssemblyAI".parse::<SpeechApi>(), Ok(SpeechApi::Assemblyai));
        assert_eq!(" claude ".parse::<AiApi>(), Ok(AiApi::Claude));
        assert_eq!("overlay".parse::<DisplayMode>(), Ok(DisplayMode::Overlay));
    }

    #[test]
    fn test_parse_unknown_lists_choices() {
        let err = "popup".parse::<DisplayMode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown display mode 'popup' (expected one of: overlay, notification)"
        );
    }

    #[test]
    fn test_only_webspeech_is_built_in() {
        for api in SpeechApi::ALL {
            let expected = if api == SpeechApi::Webspeech {
                SpeechBackend::BuiltIn
            } else {
                SpeechBackend::ExternalStreaming
            };
            assert_eq!(api.backend(), expected, "{api}");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let options = GenerationOptions::default().with_speech_api(SpeechApi::Realtime);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["speech_api"], "realtime");
        assert_eq!(json["ai_api"], "gpt4");
        assert_eq!(json["display_mode"], "overlay");
    }
}
