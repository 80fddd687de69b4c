//! Health check handler.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse};

/// GET /api/v1/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::new(
        200,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        "Service is healthy",
    ))
}
