//! Generator API routes.

use super::{AppState, GenerateQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::export;
use crate::generator::{generate, CodeView, GeneratedFileSet, GenerationOptions};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::info;

/// Creates the generator router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_files))
        .route("/file", get(generate_file))
        .route("/archive", get(generate_archive))
}

/// POST /api/generate - Generate all seven files from a JSON options body.
async fn generate_files(
    ApiJson(options): ApiJson<GenerationOptions>,
) -> ApiResult<Json<GeneratedFileSet>> {
    info!(
        "Generating '{}' via API ({} / {} / {})",
        options.extension_name, options.speech_api, options.ai_api, options.display_mode
    );
    Ok(Json(generate(&options)?))
}

/// GET /api/generate/file - Raw text of one file, chosen with `tab`.
async fn generate_file(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GenerateQuery>,
) -> ApiResult<impl IntoResponse> {
    let options = query.options(&state.defaults);
    let mut view = CodeView::new(generate(&options)?);
    if let Some(tab) = query.tab.as_deref() {
        view.select_tab_key(tab)?;
    }

    let content_type = match view.active().file_name().rsplit('.').next() {
        Some("json") => "application/json; charset=utf-8",
        Some("html") => "text/plain; charset=utf-8",
        _ => "text/javascript; charset=utf-8",
    };

    Ok((
        [(header::CONTENT_TYPE, content_type)],
        view.active_source().to_string(),
    ))
}

/// GET /api/generate/archive - All files as a `.tar.gz` download.
async fn generate_archive(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GenerateQuery>,
) -> ApiResult<impl IntoResponse> {
    let options = query.options(&state.defaults);
    let set = generate(&options)?;
    let bytes = export::archive_bytes(&set).map_err(ApiError::from)?;
    let disposition = format!(
        "attachment; filename=\"{}.tar.gz\"",
        export::folder_slug(&options.extension_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/gzip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
