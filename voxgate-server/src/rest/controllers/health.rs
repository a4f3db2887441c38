//! Health endpoint.

use super::GatewayController;
use axum::{Json, extract::State};
use serde_json::{Value, json};

/// `GET /health` — check that the remote model endpoint is reachable with
/// the configured credential. Never fails the request itself.
pub async fn health(State(controller): State<GatewayController>) -> Json<Value> {
    match controller.backend().probe().await {
        Ok(()) => Json(json!({
            "status": "ok",
            "model": controller.backend().model_name(),
        })),
        Err(e) => {
            tracing::warn!(code = e.code(), error = %e, "health probe failed");
            Json(json!({ "status": "error", "message": e.to_string() }))
        }
    }
}
