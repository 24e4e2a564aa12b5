//! HTTP front end for per-year movie exports.
//!
//! Routes:
//! - `GET /generate-csv?year=<year>`: rendered table as a CSV download
//! - `GET /exports/<file>`: previously persisted exports (when configured)
//! - `GET /health`: liveness probe

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod routes;
pub mod service;

pub use config::ServerConfig;
pub use routes::ApiError;
pub use service::{CsvExport, ExportService};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ExportService>,
}

impl AppState {
    pub fn new(service: ExportService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let mut router = routes::export_routes();

    if let Some(dir) = state.service.export_dir() {
        router = router.nest_service("/exports", ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
