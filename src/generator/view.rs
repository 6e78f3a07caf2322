//! Tabbed view over a generated file set.

use super::{generate, FileId, GenerateError, GeneratedFileSet, GenerationOptions};
use crate::catalog::DisplayFragment;
use askama::Template;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("no code has been generated yet; run a generation first")]
    NoGenerationYet,
    #[error("unknown file '{0}' (expected one of: manifest, popup-html, popup-js, background, content, offscreen-html, offscreen-js)")]
    UnknownFile(String),
}

/// A generated file set with exactly one active tab.
#[derive(Debug, Clone)]
pub struct CodeView {
    files: GeneratedFileSet,
    active: FileId,
}

struct TabLink {
    key: &'static str,
    file_name: &'static str,
    href: String,
    active: bool,
}

#[derive(Template)]
#[template(path = "page/code_view.html", escape = "html")]
struct CodeViewTemplate<'a> {
    tabs: Vec<TabLink>,
    file_name: &'a str,
    source: &'a str,
}

impl CodeView {
    /// Opens on `manifest.json`.
    pub fn new(files: GeneratedFileSet) -> Self {
        Self {
            files,
            active: FileId::Manifest,
        }
    }

    pub fn files(&self) -> &GeneratedFileSet {
        &self.files
    }

    pub fn active(&self) -> FileId {
        self.active
    }

    pub fn select_tab(&mut self, id: FileId) {
        debug!("Switching code tab to {}", id.file_name());
        self.active = id;
    }

    /// Select by tab key or file name; unknown identifiers leave the view unchanged.
    pub fn select_tab_key(&mut self, key: &str) -> Result<FileId, ViewError> {
        let id = key.parse::<FileId>()?;
        self.select_tab(id);
        Ok(id)
    }

    /// Unescaped text of the active file, as copied to the clipboard.
    pub fn active_source(&self) -> &str {
        self.files.get(self.active)
    }

    /// Tab strip plus the active file, HTML-escaped. `tab_href` builds each tab's link.
    pub fn render_html(
        &self,
        tab_href: impl Fn(FileId) -> String,
    ) -> Result<DisplayFragment, askama::Error> {
        let tabs = FileId::ALL
            .into_iter()
            .map(|id| TabLink {
                key: id.key(),
                file_name: id.file_name(),
                href: tab_href(id),
                active: id == self.active,
            })
            .collect();

        DisplayFragment::from_template(&CodeViewTemplate {
            tabs,
            file_name: self.active.file_name(),
            source: self.active_source(),
        })
    }
}

/// Holds the latest generation, if any.
///
/// Each call to [`Session::generate`] replaces the previous file set whole.
#[derive(Debug, Clone, Default)]
pub struct Session {
    view: Option<CodeView>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, options: &GenerationOptions) -> Result<&mut CodeView, GenerateError> {
        let files = generate(options)?;
        Ok(self.view.insert(CodeView::new(files)))
    }

    pub fn view(&self) -> Result<&CodeView, ViewError> {
        self.view.as_ref().ok_or(ViewError::NoGenerationYet)
    }

    pub fn select_tab(&mut self, id: FileId) -> Result<&CodeView, ViewError> {
        let view = self.view.as_mut().ok_or(ViewError::NoGenerationYet)?;
        view.select_tab(id);
        Ok(view)
    }

    pub fn select_tab_key(&mut self, key: &str) -> Result<&CodeView, ViewError> {
        let view = self.view.as_mut().ok_or(ViewError::NoGenerationYet)?;
        view.select_tab_key(key)?;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::render::unescape_html;
    use crate::generator::{DisplayMode, SpeechApi};

    fn view() -> CodeView {
        CodeView::new(generate(&GenerationOptions::default()).unwrap())
    }

    #[test]
    fn test_new_view_starts_on_manifest() {
        let view = view();
        assert_eq!(view.active(), FileId::Manifest);
        assert!(view.active_source().contains("\"manifest_version\": 3"));
    }

    #[test]
    fn test_unknown_key_keeps_active_tab() {
        let mut view = view();
        view.select_tab(FileId::PopupJs);
        let err = view.select_tab_key("styles.css").unwrap_err();
        assert_eq!(err, ViewError::UnknownFile("styles.css".to_string()));
        assert_eq!(view.active(), FileId::PopupJs);
    }

    #[test]
    fn test_render_html_marks_single_active_tab() {
        let mut view = view();
        view.select_tab(FileId::Background);
        let html = view.render_html(|id| format!("?tab={}", id.key())).unwrap();
        assert_eq!(html.as_str().matches("code-tab active").count(), 1);
        assert!(html.as_str().contains("href=\"?tab=background\" class=\"code-tab active\""));
        assert!(html.as_str().contains("background.js"));
    }

    #[test]
    fn test_render_html_escapes_source() {
        let mut view = view();
        view.select_tab(FileId::PopupHtml);
        let html = view.render_html(|id| format!("?tab={}", id.key())).unwrap();
        assert!(!html.as_str().contains("<!DOCTYPE html>"));
        assert!(unescape_html(html.as_str()).contains(view.active_source()));
    }

    #[test]
    fn test_session_requires_generation() {
        let mut session = Session::new();
        assert_eq!(session.view().unwrap_err(), ViewError::NoGenerationYet);
        assert_eq!(
            session.select_tab(FileId::Content).unwrap_err(),
            ViewError::NoGenerationYet
        );
        assert_eq!(
            session.select_tab_key("content").unwrap_err(),
            ViewError::NoGenerationYet
        );
    }

    #[test]
    fn test_session_generation_replaces_previous_set() {
        let mut session = Session::new();
        session
            .generate(&GenerationOptions::default().with_display_mode(DisplayMode::Overlay))
            .unwrap()
            .select_tab(FileId::Content);

        let options = GenerationOptions::default()
            .with_display_mode(DisplayMode::Notification)
            .with_speech_api(SpeechApi::Deepgram);
        session.generate(&options).unwrap();

        let view = session.select_tab_key("content").unwrap();
        assert_eq!(view.files().options(), &options);
        assert!(view.active_source().contains("showNotification"));
    }
}
