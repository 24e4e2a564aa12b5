//! HTTP handlers.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::AppState;
use catalog::ReleaseYear;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub year: Option<String>,
}

/// Failures a client can see. The message doubles as the JSON `error` field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Year is required")]
    MissingYear,

    #[error("Year must be a number")]
    InvalidYear,

    /// Details go to the log, never to the client
    #[error("Failed to get movies")]
    Upstream(anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingYear | ApiError::InvalidYear => StatusCode::BAD_REQUEST,
            ApiError::Upstream(cause) => {
                error!("Export failed: {:#}", cause);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Validate the raw `year` query value.
pub fn parse_year(raw: Option<&str>) -> Result<ReleaseYear, ApiError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::MissingYear);
    }
    raw.parse().map_err(|_| ApiError::InvalidYear)
}

/// GET /generate-csv?year=<year>
pub async fn generate_csv(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Response, ApiError> {
    let year = parse_year(params.year.as_deref())?;
    info!("CSV requested for {}", year);

    let export = state.service.generate(year).await.map_err(ApiError::Upstream)?;
    let disposition = format!("attachment; filename={}", export.file_name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/generate-csv", get(generate_csv))
        .route("/health", get(health_check))
}
