use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Consults nothing, so it answers whenever the process
/// accepts connections.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe: reports whether the predictor can serve requests.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let predictor = state.predictor.name();

    match state.predictor.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "predictor": predictor,
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => {
            tracing::warn!(predictor, error = %e, "Predictor failed readiness check");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "predictor": predictor,
                    "error": e.to_string()
                })),
            )
        }
    }
}
