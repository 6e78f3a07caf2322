//! Chrome extension code generator.
//!
//! [`generate`] turns a [`GenerationOptions`] into a [`GeneratedFileSet`]
//! holding exactly one text per [`FileId`]. The result is a plain value:
//! callers hand it to a [`CodeView`] or to the export functions instead of
//! stashing it in shared state.

pub mod options;
pub mod templates;
pub mod view;

use askama::Template;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

pub use options::{
    AiApi, DisplayMode, GenerationOptions, ParseOptionError, SpeechApi, SpeechBackend,
    TemplateVariant, DEFAULT_EXTENSION_NAME,
};
pub use view::{CodeView, Session, ViewError};

use templates::{
    BackgroundJsTemplate, ContentScriptTemplate, ManifestTemplate, OffscreenHtmlTemplate,
    OffscreenJsTemplate, PopupHtmlTemplate, PopupJsTemplate,
};

/// Chrome rejects manifests whose `name` is longer than this.
pub const MAX_EXTENSION_NAME_CHARS: usize = 75;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to render {file}: {source}")]
    Render {
        file: FileId,
        #[source]
        source: askama::Error,
    },
}

/// The seven files every generated extension consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileId {
    Manifest,
    PopupHtml,
    PopupJs,
    Background,
    Content,
    OffscreenHtml,
    OffscreenJs,
}

impl FileId {
    pub const ALL: [FileId; 7] = [
        FileId::Manifest,
        FileId::PopupHtml,
        FileId::PopupJs,
        FileId::Background,
        FileId::Content,
        FileId::OffscreenHtml,
        FileId::OffscreenJs,
    ];

    /// Tab identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::PopupHtml => "popup-html",
            Self::PopupJs => "popup-js",
            Self::Background => "background",
            Self::Content => "content",
            Self::OffscreenHtml => "offscreen-html",
            Self::OffscreenJs => "offscreen-js",
        }
    }

    /// Name of the file inside the extension folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest.json",
            Self::PopupHtml => "popup.html",
            Self::PopupJs => "popup.js",
            Self::Background => "background.js",
            Self::Content => "content_script.js",
            Self::OffscreenHtml => "offscreen.html",
            Self::OffscreenJs => "offscreen.js",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Accepts either the tab key (`popup-js`) or the file name (`popup.js`).
impl FromStr for FileId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FileId::ALL
            .into_iter()
            .find(|id| id.key() == needle || id.file_name() == needle)
            .ok_or_else(|| ViewError::UnknownFile(s.to_string()))
    }
}

impl Serialize for FileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Output of one generation: one text per [`FileId`] and the options used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFileSet {
    options: GenerationOptions,
    files: [String; 7],
}

impl GeneratedFileSet {
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn get(&self, id: FileId) -> &str {
        &self.files[id.index()]
    }

    /// Files in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &str)> + '_ {
        FileId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(String::len).sum()
    }
}

/// Serialized as `{ "options": .., "files": { "manifest.json": "..", .. } }`.
impl Serialize for GeneratedFileSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Files<'a>(&'a GeneratedFileSet);

        impl Serialize for Files<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(FileId::ALL.len()))?;
                for (id, source) in self.0.iter() {
                    map.serialize_entry(id.file_name(), source)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("options", &self.options)?;
        map.serialize_entry("files", &Files(self))?;
        map.end()
    }
}

/// Render all seven files for `options`.
///
/// Deterministic: the same options always yield byte-identical files.
pub fn generate(options: &GenerationOptions) -> Result<GeneratedFileSet, GenerateError> {
    let name = options.extension_name.as_str();
    if name.chars().count() > MAX_EXTENSION_NAME_CHARS {
        warn!(
            "Extension name is {} characters; Chrome limits manifest names to {}",
            name.chars().count(),
            MAX_EXTENSION_NAME_CHARS
        );
    }

    let variant = options.variant();
    debug!(
        "Generating extension '{}' with variant {:?} (ai: {})",
        name, variant, options.ai_api
    );

    let files = [
        render(FileId::Manifest, &ManifestTemplate::new(name))?,
        render(
            FileId::PopupHtml,
            &PopupHtmlTemplate {
                extension_name: name,
            },
        )?,
        render(FileId::PopupJs, &PopupJsTemplate)?,
        render(FileId::Background, &BackgroundJsTemplate::new(options))?,
        render(FileId::Content, &ContentScriptTemplate::for_variant(variant))?,
        render(FileId::OffscreenHtml, &OffscreenHtmlTemplate)?,
        render(FileId::OffscreenJs, &OffscreenJsTemplate::for_variant(variant))?,
    ];

    Ok(GeneratedFileSet {
        options: options.clone(),
        files,
    })
}

fn render(file: FileId, template: &impl Template) -> Result<String, GenerateError> {
    template
        .render()
        .map_err(|source| GenerateError::Render { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_order_matches_index() {
        for (position, id) in FileId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn test_file_id_parses_key_or_file_name() {
        assert_eq!("content".parse::<FileId>().unwrap(), FileId::Content);
        assert_eq!("content_script.js".parse::<FileId>().unwrap(), FileId::Content);
        assert_eq!(
            "styles.css".parse::<FileId>().unwrap_err(),
            ViewError::UnknownFile("styles.css".to_string())
        );
    }

    #[test]
    fn test_generated_set_serializes_by_file_name() {
        let set = generate(&GenerationOptions::default()).unwrap();
        assert_eq!(set.len(), FileId::ALL.len());
        assert!(!set.is_empty());
        let json = serde_json::to_value(&set).unwrap();
        let files = json["files"].as_object().unwrap();
        assert_eq!(files.len(), 7);
        assert_eq!(files["offscreen.js"], set.get(FileId::OffscreenJs));
        assert_eq!(json["options"]["extension_name"], DEFAULT_EXTENSION_NAME);
    }

    #[test]
    fn test_long_names_are_still_generated() {
        let name = "x".repeat(MAX_EXTENSION_NAME_CHARS + 10);
        let set = generate(&GenerationOptions::default().with_name(name.clone())).unwrap();
        assert!(set.get(FileId::Manifest).contains(&name));
    }
}
