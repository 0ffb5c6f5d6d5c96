//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    mongodb: bool,
}

/// Create the readiness router; `/health` liveness comes from axum-helpers
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection
async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    Json(ReadinessResponse {
        status: if mongodb_healthy {
            "ready"
        } else {
            "unhealthy"
        }
        .to_string(),
        mongodb: mongodb_healthy,
    })
}
