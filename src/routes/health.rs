use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use krishvatech_contact::Channel;
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Not ready while the contact form has no delivery channel, every submission
/// would fail with the misconfiguration banner.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let channel = match app_state.dispatcher.channel() {
        Channel::Relay { .. } => "relay",
        Channel::DeepLink { .. } => "whatsapp",
        Channel::Unconfigured => {
            tracing::error!("Readiness check failed: no submission backend configured");

            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "no_submission_backend"
                })),
            );
        }
    };

    (
        StatusCode::OK,
        Json(json!({"status": "ready", "channel": channel})),
    )
}
