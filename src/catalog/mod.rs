//! Static reference tables shown alongside the generator.
//!
//! Every table is a `&'static` slice built at compile time. Nothing here is
//! ever mutated; the tables are consumed by the page renderer, the CLI and
//! the JSON API.

pub mod render;

use serde::Serialize;

pub use render::{render, DisplayFragment, Render};

/// One file (or file pair) of the generated extension.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Component {
    pub name: &'static str,
    pub kind: &'static str,
    pub purpose: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpeechApiRecord {
    pub name: &'static str,
    pub latency: &'static str,
    pub accuracy: &'static str,
    pub cost: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AiApiRecord {
    pub name: &'static str,
    pub speed: &'static str,
    pub quality: &'static str,
    pub cost: &'static str,
    pub best_for: &'static str,
}

/// A way to keep answers out of a shared screen.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Workaround {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
    pub effectiveness: &'static str,
}

impl Workaround {
    /// CSS class suffix, e.g. `Very High` -> `very-high`.
    pub fn effectiveness_class(&self) -> String {
        slug(self.effectiveness)
    }

    pub fn difficulty_class(&self) -> String {
        slug(self.difficulty)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SetupStep {
    pub number: u8,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct UsageTip {
    pub text: &'static str,
}

/// Names of the tables, as accepted by `meetcraft catalog <table>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTable {
    Components,
    Speech,
    Ai,
    Workarounds,
    Setup,
    Tips,
}

impl CatalogTable {
    pub const ALL: [CatalogTable; 6] = [
        CatalogTable::Components,
        CatalogTable::Speech,
        CatalogTable::Ai,
        CatalogTable::Workarounds,
        CatalogTable::Setup,
        CatalogTable::Tips,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Components => "Extension Components",
            Self::Speech => "Speech Recognition APIs",
            Self::Ai => "AI APIs",
            Self::Workarounds => "Screen Sharing Workarounds",
            Self::Setup => "Setup Steps",
            Self::Tips => "Usage Tips",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Components => COMPONENTS.len(),
            Self::Speech => SPEECH_APIS.len(),
            Self::Ai => AI_APIS.len(),
            Self::Workarounds => WORKAROUNDS.len(),
            Self::Setup => SETUP_STEPS.len(),
            Self::Tips => USAGE_TIPS.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The whole catalog, serialized as one document by the API.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub components: &'static [Component],
    pub speech_apis: &'static [SpeechApiRecord],
    pub ai_apis: &'static [AiApiRecord],
    pub workarounds: &'static [Workaround],
    pub setup_steps: &'static [SetupStep],
    pub usage_tips: &'static [UsageTip],
}

pub const CATALOG: Catalog = Catalog {
    components: COMPONENTS,
    speech_apis: SPEECH_APIS,
    ai_apis: AI_APIS,
    workarounds: WORKAROUNDS,
    setup_steps: SETUP_STEPS,
    usage_tips: USAGE_TIPS,
};

pub const COMPONENTS: &[Component] = &[
    Component {
        name: "manifest.json",
        kind: "Configuration",
        purpose: "Defines extension structure, permissions, and components",
        color: "#6366f1",
    },
    Component {
        name: "popup.html/js",
        kind: "UI",
        purpose: "User interface for starting/stopping and showing transcriptions",
        color: "#8b5cf6",
    },
    Component {
        name: "content_script.js",
        kind: "Display",
        purpose: "Displays real-time answers on the meeting page",
        color: "#a855f7",
    },
    Component {
        name: "background.js",
        kind: "Service Worker",
        purpose: "Handles audio capture and API orchestration",
        color: "#ec4899",
    },
    Component {
        name: "offscreen.html/js",
        kind: "Processing",
        purpose: "Manages audio processing and API connections",
        color: "#f43f5e",
    },
];

pub const SPEECH_APIS: &[SpeechApiRecord] = &[
    SpeechApiRecord {
        name: "Web Speech API",
        latency: "~100ms",
        accuracy: "85-90%",
        cost: "Free",
        pros: "Free, built-in, no setup",
        cons: "Chrome only, requires internet, basic accuracy",
    },
    SpeechApiRecord {
        name: "AssemblyAI Universal-Streaming",
        latency: "~300ms",
        accuracy: "98-99%",
        cost: "$0.15/hour",
        pros: "Industry-leading accuracy, low latency, immutable transcripts",
        cons: "Paid service, requires API key",
    },
    SpeechApiRecord {
        name: "Deepgram",
        latency: "~200-400ms",
        accuracy: "90-95%",
        cost: "$0.12/hour",
        pros: "Good balance of speed and accuracy, affordable",
        cons: "Paid service, requires API key",
    },
    SpeechApiRecord {
        name: "OpenAI Whisper API",
        latency: "2-5 seconds",
        accuracy: "95-97%",
        cost: "$0.006/minute",
        pros: "High accuracy, good language support",
        cons: "Not true real-time, higher latency",
    },
    SpeechApiRecord {
        name: "OpenAI Realtime API",
        latency: "~300ms",
        accuracy: "95-97%",
        cost: "Variable",
        pros: "Native speech support, versatile",
        cons: "More complex setup, newer API",
    },
];

pub const AI_APIS: &[AiApiRecord] = &[
    AiApiRecord {
        name: "OpenAI GPT-4",
        speed: "2-5 seconds",
        quality: "Excellent",
        cost: "$0.03/1K tokens",
        best_for: "General purpose, balanced",
    },
    AiApiRecord {
        name: "OpenAI GPT-5",
        speed: "2-4 seconds",
        quality: "Superior reasoning",
        cost: "Higher tier pricing",
        best_for: "Complex reasoning tasks",
    },
    AiApiRecord {
        name: "Anthropic Claude",
        speed: "2-4 seconds",
        quality: "Excellent",
        cost: "$0.015/1K tokens",
        best_for: "Longer context, nuanced responses",
    },
];

pub const WORKAROUNDS: &[Workaround] = &[
    Workaround {
        title: "Manual Toggle Button",
        description: "Add a button in the extension popup to show/hide the answer overlay",
        difficulty: "Easy",
        effectiveness: "Medium",
    },
    Workaround {
        title: "Keyboard Shortcut",
        description: "Use Ctrl+Shift+H to instantly hide/show answers (fastest method)",
        difficulty: "Easy",
        effectiveness: "High",
    },
    Workaround {
        title: "Separate Popup Window",
        description: "Display answers in a separate browser window outside screen share",
        difficulty: "Medium",
        effectiveness: "High",
    },
    Workaround {
        title: "Second Monitor",
        description: "Show answers on a second monitor that's not being shared",
        difficulty: "Easy",
        effectiveness: "Very High",
    },
    Workaround {
        title: "Browser Notifications",
        description: "Send answers as browser notifications instead of on-page display",
        difficulty: "Easy",
        effectiveness: "Low",
    },
];

pub const SETUP_STEPS: &[SetupStep] = &[
    SetupStep {
        number: 1,
        title: "Get API Keys",
        content: "Sign up for your chosen speech recognition service (AssemblyAI, Deepgram, or use Web Speech API for free) and AI service (OpenAI or Anthropic). AssemblyAI: https://www.assemblyai.com | Deepgram: https://www.deepgram.com | OpenAI: https://platform.openai.com | Anthropic: https://www.anthropic.com",
    },
    SetupStep {
        number: 2,
        title: "Download Code",
        content: "Generate the extension code with `meetcraft generate --out <dir>` (or `--archive extension.tar.gz`) and extract it to a folder on your computer.",
    },
    SetupStep {
        number: 3,
        title: "Configure API Keys",
        content: "Open the background.js file in a text editor. Find the configuration section at the top and replace 'YOUR_API_KEY_HERE' with your actual API keys for the speech and AI services you selected.",
    },
    SetupStep {
        number: 4,
        title: "Load Extension",
        content: "Open Chrome and navigate to chrome://extensions. Enable 'Developer mode' using the toggle in the top right. Click 'Load unpacked' and select the folder containing your extension files.",
    },
    SetupStep {
        number: 5,
        title: "Grant Permissions",
        content: "Click the extension icon in your browser toolbar. When prompted, grant microphone and tab capture permissions. These are required for the extension to capture meeting audio.",
    },
    SetupStep {
        number: 6,
        title: "Test It",
        content: "Join a test meeting (or play a YouTube video with speech) and click 'Start Assistant' in the extension popup. Verify that transcription appears and AI answers are generated. Test the Ctrl+Shift+H shortcut to hide/show the overlay.",
    },
];

pub const USAGE_TIPS: &[UsageTip] = &[
    UsageTip {
        text: "Start the assistant BEFORE joining the meeting for best results",
    },
    UsageTip {
        text: "Use Ctrl+Shift+H to quickly hide answers when screen sharing",
    },
    UsageTip {
        text: "Keep the extension popup open to monitor transcription status",
    },
    UsageTip {
        text: "Test your setup with recorded videos before using in real meetings",
    },
    UsageTip {
        text: "Always inform meeting participants if you're recording (legal requirement in many jurisdictions)",
    },
    UsageTip {
        text: "Use a second monitor for the safest setup",
    },
    UsageTip {
        text: "Configure 'be concise' in AI prompts for faster responses",
    },
];

fn slug(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
