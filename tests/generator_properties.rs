//! Behavioral properties of the extension code generator.

use meetcraft::generator::{
    generate, AiApi, CodeView, DisplayMode, FileId, GenerationOptions, Session, SpeechApi,
    ViewError,
};

/// Decodes the named and numeric entities an HTML escaper may emit.
fn unescape_html(html: &str) -> String {
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

fn all_options() -> Vec<GenerationOptions> {
    let mut all = Vec::new();
    for speech in SpeechApi::ALL {
        for ai in AiApi::ALL {
            for display in DisplayMode::ALL {
                all.push(GenerationOptions::new("Team Sync Helper", speech, ai, display));
            }
        }
    }
    all
}

#[test]
fn test_every_combination_yields_seven_non_empty_files() {
    for options in all_options() {
        let set = generate(&options).unwrap();
        let ids: Vec<FileId> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, FileId::ALL.to_vec());
        for (id, source) in set.iter() {
            assert!(!source.trim().is_empty(), "{} empty for {:?}", id, options);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    for options in all_options() {
        assert_eq!(generate(&options).unwrap(), generate(&options).unwrap());
    }
}

#[test]
fn test_example_from_guide() {
    let options = GenerationOptions::new(
        "My Assistant",
        SpeechApi::Webspeech,
        AiApi::Gpt4,
        DisplayMode::Overlay,
    );
    let set = generate(&options).unwrap();

    assert!(set.get(FileId::Manifest).contains(r#""name": "My Assistant""#));
    assert!(set.get(FileId::OffscreenJs).contains("webkitSpeechRecognition"));
    assert!(set.get(FileId::Content).contains("meeting-assistant-overlay"));
    assert!(set.get(FileId::Background).contains("speechApi: 'webspeech'"));
    assert!(set.get(FileId::Background).contains("aiApi: 'gpt4'"));
}

#[test]
fn test_display_mode_changes_content_and_offscreen_not_manifest() {
    let overlay = GenerationOptions::default().with_display_mode(DisplayMode::Overlay);
    let notification = overlay.clone().with_display_mode(DisplayMode::Notification);

    let a = generate(&overlay).unwrap();
    let b = generate(&notification).unwrap();

    assert_ne!(a.get(FileId::Content), b.get(FileId::Content));
    assert_ne!(a.get(FileId::OffscreenJs), b.get(FileId::OffscreenJs));
    assert_eq!(a.get(FileId::Manifest), b.get(FileId::Manifest));
    assert!(b.get(FileId::OffscreenJs).contains("const DISPLAY_MODE = 'notification';"));
    assert!(b.get(FileId::OffscreenJs).contains("MAX_ANSWER_CHARS"));
    assert!(!a.get(FileId::OffscreenJs).contains("MAX_ANSWER_CHARS"));
    assert!(b.get(FileId::Content).contains("new Notification("));
    assert!(!b.get(FileId::Content).contains("meeting-assistant-overlay"));
}

#[test]
fn test_speech_api_switches_offscreen_branch() {
    let built_in = generate(&GenerationOptions::default().with_speech_api(SpeechApi::Webspeech))
        .unwrap();
    for external in [
        SpeechApi::Assemblyai,
        SpeechApi::Deepgram,
        SpeechApi::Whisper,
        SpeechApi::Realtime,
    ] {
        let set = generate(&GenerationOptions::default().with_speech_api(external)).unwrap();
        let offscreen = set.get(FileId::OffscreenJs);
        assert_ne!(offscreen, built_in.get(FileId::OffscreenJs));
        assert!(offscreen.contains("new WebSocket("));
        assert!(!offscreen.contains("webkitSpeechRecognition"));
    }
}

#[test]
fn test_manifest_is_valid_json_for_hostile_names() {
    for name in [
        "Plain",
        "Quote \" inside",
        "Back\\slash",
        "</script><b>markup</b>",
        "Line\nbreak\ttab",
        "",
        "ünïcødé 会议助手",
    ] {
        let set = generate(&GenerationOptions::default().with_name(name)).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(set.get(FileId::Manifest))
            .unwrap_or_else(|err| panic!("manifest for {name:?} is not JSON: {err}"));
        assert_eq!(manifest["name"], name);
        assert_eq!(manifest["manifest_version"], 3);
    }
}

#[test]
fn test_popup_html_escapes_name() {
    let set = generate(&GenerationOptions::default().with_name("<i>Sneaky</i> & Co")).unwrap();
    let popup = set.get(FileId::PopupHtml);
    assert!(!popup.contains("<i>Sneaky</i>"));
    assert!(unescape_html(popup).contains("<title><i>Sneaky</i> & Co</title>"));
}

#[test]
fn test_ai_choice_only_touches_background() {
    let gpt = generate(&GenerationOptions::default().with_ai_api(AiApi::Gpt4)).unwrap();
    let claude = generate(&GenerationOptions::default().with_ai_api(AiApi::Claude)).unwrap();

    for id in FileId::ALL {
        if id == FileId::Background {
            assert_ne!(gpt.get(id), claude.get(id));
        } else {
            assert_eq!(gpt.get(id), claude.get(id), "{id} should not depend on AI choice");
        }
    }
}

#[test]
fn test_selecting_unknown_tab_fails() {
    let mut view = CodeView::new(generate(&GenerationOptions::default()).unwrap());
    assert_eq!(
        view.select_tab_key("README.md").unwrap_err(),
        ViewError::UnknownFile("README.md".to_string())
    );
    assert_eq!(view.active(), FileId::Manifest);
}

#[test]
fn test_session_before_generation_fails() {
    let mut session = Session::new();
    assert_eq!(
        session.select_tab(FileId::PopupJs).unwrap_err(),
        ViewError::NoGenerationYet
    );

    session.generate(&GenerationOptions::default()).unwrap();
    let view = session.select_tab(FileId::PopupJs).unwrap();
    assert!(view.active_source().contains("updateUI"));
}
