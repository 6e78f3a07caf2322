//! Local HTTP server for the guide page and generator API.
//!
//! Provides:
//! - The guide page with catalog tables and the code generator form
//! - Server-rendered code tabs for a set of generator options
//! - JSON catalog and generation endpoints
//! - Raw file and `.tar.gz` downloads

pub mod error;
pub mod extract;
pub mod routes;

use crate::config::Config;
use anyhow::{Context, Result};
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

pub use routes::AppState;

pub struct ApiServer {
    host: String,
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            state: AppState {
                defaults: config.generator.clone(),
            },
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);
        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Server listening on http://{}", addr);
        info!("Endpoints:");
        info!("  GET  /                      - Guide page");
        info!("  GET  /generate              - Guide page with generated code tabs");
        info!("  GET  /version               - Get version info");
        info!("  GET  /api/catalog           - Reference tables as JSON");
        info!("  POST /api/generate          - Generate all files from JSON options");
        info!("  GET  /api/generate/file     - Raw text of one generated file");
        info!("  GET  /api/generate/archive  - All generated files as .tar.gz");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version))
        .merge(routes::page::router())
        .nest("/api/catalog", routes::catalog::router())
        .nest("/api/generate", routes::generate::router())
        .layer(ServiceBuilder::new())
        .with_state(state)
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "meetcraft"
    }))
}
