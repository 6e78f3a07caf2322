//! HTTP routes served by `meetcraft serve`, exercised in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use meetcraft::api::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::default())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_index_page_lists_catalog() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("AssemblyAI Universal-Streaming"));
    assert!(body.contains("Second Monitor"));
    assert!(body.contains("id=\"config-form\""));
    assert!(!body.contains("id=\"code-output\""));
}

#[tokio::test]
async fn test_generate_page_shows_selected_tab() {
    let (status, body) =
        get("/generate?name=Demo&speech=deepgram&ai=claude&display=notification&tab=offscreen-js")
            .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"code-output\""));
    assert!(body.contains("<span class=\"code-file-name\">offscreen.js</span>"));
    assert!(body.contains("new WebSocket("));
    assert_eq!(body.matches("code-tab active").count(), 1);
}

#[tokio::test]
async fn test_generate_page_unknown_tab_is_not_found() {
    let (status, body) = get("/generate?tab=styles.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("unknown file 'styles.css'"));
}

#[tokio::test]
async fn test_generate_page_rejects_unknown_option() {
    let (status, body) = get("/generate?speech=carrier-pigeon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], true);
    assert!(json["message"].as_str().unwrap().contains("carrier-pigeon"));
}

#[tokio::test]
async fn test_post_generate_rejects_bad_body_as_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "speech_api": "telegraph" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], true);
    assert!(json["message"].as_str().unwrap().contains("telegraph"));
}

#[tokio::test]
async fn test_catalog_json() {
    let (status, body) = get("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["speech_apis"].as_array().unwrap().len(), 5);
    assert_eq!(json["setup_steps"][3]["title"], "Load Extension");
}

#[tokio::test]
async fn test_post_generate_returns_all_files() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "extension_name": "My Assistant",
                "speech_api": "webspeech",
                "ai_api": "gpt4",
                "display_mode": "overlay"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    let files = json["files"].as_object().unwrap();
    assert_eq!(files.len(), 7);
    assert!(files["manifest.json"]
        .as_str()
        .unwrap()
        .contains(r#""name": "My Assistant""#));
    assert_eq!(json["options"]["display_mode"], "overlay");
}

#[tokio::test]
async fn test_raw_file_endpoint() {
    let (status, body) = get("/api/generate/file?name=Raw&tab=manifest.json").await;
    assert_eq!(status, StatusCode::OK);
    let manifest: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(manifest["name"], "Raw");
}

#[tokio::test]
async fn test_archive_endpoint() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/generate/archive?name=Call%20Helper")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"call-helper.tar.gz\""
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
}

#[tokio::test]
async fn test_version() {
    let (status, body) = get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}
