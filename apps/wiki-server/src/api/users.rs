//! User routes: repository → service → domain router, behind the gate.

use axum::{Json, Router, middleware, routing::get};
use domain_users::{MongoUserRepository, UserResult, UserService};
use mongodb::Database;
use serde_json::json;

use crate::api::auth::require_session;
use crate::state::AppState;

/// Ensure the user collection's indexes exist
pub async fn init_indexes(db: &Database) -> UserResult<()> {
    MongoUserRepository::new(db).create_indexes().await
}

/// Create the user routes
///
/// Everything except the `/test` probe sits behind the session gate.
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);

    Router::new().route("/test", get(probe)).merge(
        domain_users::handlers::router(service)
            .route_layer(middleware::from_fn(require_session)),
    )
}

async fn probe() -> Json<serde_json::Value> {
    Json(json!({ "message": "User routes working" }))
}
