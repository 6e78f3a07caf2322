//! HTML and terminal rendering for catalog tables.

use super::{AiApiRecord, Component, SetupStep, SpeechApiRecord, UsageTip, Workaround};
use askama::Template;
use serde::Serialize;
use std::fmt;

/// Escaped HTML ready to be spliced into a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayFragment(String);

impl DisplayFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn from_template(template: &impl Template) -> Result<Self, askama::Error> {
        template.render().map(Self)
    }
}

impl fmt::Display for DisplayFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog record kind that knows how to present a table of itself.
pub trait Render: Sized {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error>;

    /// Multi-line plain text for terminal output.
    fn terminal(&self) -> String;
}

/// Render a whole table as an HTML fragment.
pub fn render<R: Render>(table: &[R]) -> Result<DisplayFragment, askama::Error> {
    R::fragment(table)
}

#[derive(Template)]
#[template(path = "page/components.html", escape = "html")]
struct ComponentsFragment<'a> {
    rows: &'a [Component],
}

#[derive(Template)]
#[template(path = "page/speech_rows.html", escape = "html")]
struct SpeechRowsFragment<'a> {
    rows: &'a [SpeechApiRecord],
}

#[derive(Template)]
#[template(path = "page/ai_rows.html", escape = "html")]
struct AiRowsFragment<'a> {
    rows: &'a [AiApiRecord],
}

#[derive(Template)]
#[template(path = "page/workarounds.html", escape = "html")]
struct WorkaroundsFragment<'a> {
    cards: &'a [Workaround],
}

#[derive(Template)]
#[template(path = "page/setup_steps.html", escape = "html")]
struct SetupStepsFragment<'a> {
    steps: &'a [SetupStep],
}

#[derive(Template)]
#[template(path = "page/tips.html", escape = "html")]
struct TipsFragment<'a> {
    tips: &'a [UsageTip],
}

impl Render for Component {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&ComponentsFragment { rows: table })
    }

    fn terminal(&self) -> String {
        format!("{} [{}]\n    {}", self.name, self.kind, self.purpose)
    }
}

impl Render for SpeechApiRecord {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&SpeechRowsFragment { rows: table })
    }

    fn terminal(&self) -> String {
        format!(
            "{}\n    Latency: {} | Accuracy: {} | Cost: {}\n    Pros: {}\n    Cons: {}",
            self.name, self.latency, self.accuracy, self.cost, self.pros, self.cons
        )
    }
}

impl Render for AiApiRecord {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&AiRowsFragment { rows: table })
    }

    fn terminal(&self) -> String {
        format!(
            "{}\n    Speed: {} | Quality: {} | Cost: {}\n    Best for: {}",
            self.name, self.speed, self.quality, self.cost, self.best_for
        )
    }
}

impl Render for Workaround {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&WorkaroundsFragment { cards: table })
    }

    fn terminal(&self) -> String {
        format!(
            "{} (difficulty: {}, effect: {})\n    {}",
            self.title, self.difficulty, self.effectiveness, self.description
        )
    }
}

impl Render for SetupStep {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&SetupStepsFragment { steps: table })
    }

    fn terminal(&self) -> String {
        format!("{}. {}\n    {}", self.number, self.title, self.content)
    }
}

impl Render for UsageTip {
    fn fragment(table: &[Self]) -> Result<DisplayFragment, askama::Error> {
        DisplayFragment::from_template(&TipsFragment { tips: table })
    }

    fn terminal(&self) -> String {
        format!("* {}", self.text)
    }
}

/// Decodes the entities askama's HTML escaper emits, named or numeric.
#[cfg(test)]
pub(crate) fn unescape_html(html: &str) -> String {
    [
        ("&#60;", "<"),
        ("&lt;", "<"),
        ("&#62;", ">"),
        ("&gt;", ">"),
        ("&#34;", "\""),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&#x27;", "'"),
        ("&#38;", "&"),
        ("&amp;", "&"),
    ]
    .iter()
    .fold(html.to_string(), |text, (entity, raw)| text.replace(entity, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AI_APIS, SETUP_STEPS, SPEECH_APIS, USAGE_TIPS, WORKAROUNDS};

    #[test]
    fn test_speech_rows_one_per_record() {
        let html = render(SPEECH_APIS).unwrap();
        assert_eq!(html.as_str().matches("<tr>").count(), SPEECH_APIS.len());
        assert!(html.as_str().contains("<strong>Deepgram</strong>"));
    }

    #[test]
    fn test_ai_rows_include_best_for() {
        let html = render(AI_APIS).unwrap();
        assert!(html.as_str().contains("Complex reasoning tasks"));
    }

    #[test]
    fn test_workaround_badges_use_css_slug() {
        let html = render(WORKAROUNDS).unwrap();
        assert!(html.as_str().contains("effectiveness-very-high"));
        assert!(html.as_str().contains("Effect: Very High"));
    }

    #[test]
    fn test_setup_steps_and_tips() {
        let steps = render(SETUP_STEPS).unwrap();
        assert_eq!(steps.as_str().matches("step-card").count(), SETUP_STEPS.len());

        let tips = render(USAGE_TIPS).unwrap();
        assert_eq!(tips.as_str().matches("tip-item").count(), USAGE_TIPS.len());
    }

    #[test]
    fn test_record_text_is_escaped() {
        let hostile = [UsageTip {
            text: "<script>alert(1)</script> & more",
        }];
        let html = render(&hostile).unwrap();
        assert!(!html.as_str().contains("<script>"));
        assert!(unescape_html(html.as_str()).contains("<script>alert(1)</script> & more"));
    }

    struct Unprintable;

    impl fmt::Display for Unprintable {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[derive(Template)]
    #[template(source = "<p>{{ value }}</p>", ext = "html")]
    struct UnprintableFragment {
        value: Unprintable,
    }

    #[test]
    fn test_render_failure_is_returned() {
        let result = DisplayFragment::from_template(&UnprintableFragment { value: Unprintable });
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let html = render::<Workaround>(&[]).unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_terminal_lines() {
        assert_eq!(USAGE_TIPS[5].terminal(), "* Use a second monitor for the safest setup");
        assert!(SETUP_STEPS[0].terminal().starts_with("1. Get API Keys\n"));
    }
}
