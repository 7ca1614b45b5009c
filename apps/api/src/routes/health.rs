//! Health check HTTP route handlers
//!
//! - `GET /health` - model backend reachability, always 200
//! - `GET /health/live` - process liveness, no dependency checks

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

use super::AppState;
use crate::models::HealthResponse;

/// Create health check router
pub fn health_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(backend_health))
        .route("/live", get(liveness_probe))
        .with_state(state)
}

/// Report whether the model backend is reachable
///
/// Probe failures show up as `backend_connected: false`, never as an HTTP error.
async fn backend_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend_connected = state.pipeline.backend_connected().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        backend_connected,
    })
}

/// Liveness probe
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_liveness_probe() {
        let response = liveness_probe().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "alive");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
