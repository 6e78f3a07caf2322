//! Catalog API routes.

use super::AppState;
use crate::catalog::{Catalog, CATALOG};
use axum::{response::Json, routing::get, Router};

/// Creates the catalog router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_catalog))
}

/// GET /api/catalog - Every reference table as JSON.
async fn get_catalog() -> Json<Catalog> {
    Json(CATALOG)
}
