//! Liveness endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports whether the service can reach its database.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// **200 OK** when the database answers, **503 Service Unavailable**
/// otherwise. The body has the same shape in both cases:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 posts" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let response = HealthResponse::from_checks(HealthChecks {
        database: check_database(&state).await,
    });

    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        tracing::warn!("Health check failed: database unreachable");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response)).into_response()
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.post_service.count_posts().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} posts", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}
