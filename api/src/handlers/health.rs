use axum::Json;
use common::models::HealthResponse;

/// Health check endpoint
#[tracing::instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}
