//! Session login/logout and the gate middleware.
//!
//! A single operator credential pair from the environment opens a cookie
//! session; `require_session` rejects gated routes without one.

use axum::{
    Json, Router,
    extract::{Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::session::{SESSION_USER_KEY, SessionUser};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::config::AuthConfig;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Create the login/logout router
pub fn router(auth: AuthConfig) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
        .with_state(auth)
}

/// Gate middleware for authenticated routes
///
/// Rejects with 401 when the session carries no signed-in user.
pub async fn require_session(session: Session, request: Request, next: Next) -> Response {
    let user: Option<SessionUser> = session.get(SESSION_USER_KEY).await.ok().flatten();

    match user {
        Some(_) => next.run(request).await,
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        )
            .into_response(),
    }
}

async fn login(
    State(auth): State<AuthConfig>,
    session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let current: Option<SessionUser> = session.get(SESSION_USER_KEY).await.ok().flatten();
    if current.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Please logout first" })),
        )
            .into_response();
    }

    let Ok(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Malformed login body" })),
        )
            .into_response();
    };

    if input.username.is_empty() || input.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Parameters can't be empty" })),
        )
            .into_response();
    }

    if input.username != auth.username || input.password != auth.password {
        warn!(username = %input.username, "Rejected login attempt");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Authentication failed" })),
        )
            .into_response();
    }

    if let Err(error) = session
        .insert(SESSION_USER_KEY, SessionUser::new(&input.username))
        .await
    {
        warn!(%error, "Failed to save session");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save session" })),
        )
            .into_response();
    }

    info!(username = %input.username, "User logged in");
    (
        StatusCode::OK,
        Json(json!({ "message": "Successfully authenticated user" })),
    )
        .into_response()
}

async fn logout(session: Session) -> Response {
    let user: Option<SessionUser> = session.get(SESSION_USER_KEY).await.ok().flatten();
    if user.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid session token" })),
        )
            .into_response();
    }

    if let Err(error) = session.delete().await {
        warn!(%error, "Failed to clear session");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to clear session" })),
        )
            .into_response();
    }

    info!("User logged out");
    (
        StatusCode::OK,
        Json(json!({ "message": "Successfully logged out" })),
    )
        .into_response()
}
