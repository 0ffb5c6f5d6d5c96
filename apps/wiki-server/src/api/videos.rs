//! Video routes: in-memory service behind the gate, probe included.

use axum::{Json, Router, middleware, routing::get};
use domain_videos::VideoService;
use serde_json::json;

use crate::api::auth::require_session;

/// Create the `/api` group: videos plus its probe, all gated
pub fn router() -> Router {
    let service = VideoService::new();

    Router::new()
        .merge(domain_videos::handlers::router(service))
        .route("/test", get(probe))
        .route_layer(middleware::from_fn(require_session))
}

async fn probe() -> Json<serde_json::Value> {
    Json(json!({ "message": "OK!!" }))
}
