//! API routes module
//!
//! Assembles the user, video, auth, and readiness routes. The session
//! layer itself is applied once in `main`, over the whole app.

pub mod auth;
pub mod health;
pub mod users;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Create all application routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(auth::router(state.config.auth.clone()))
        .nest("/user", users::router(state))
        .nest("/api", videos::router())
        .merge(health::router(state.clone()))
}
