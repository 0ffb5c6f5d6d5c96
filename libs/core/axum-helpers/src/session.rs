use serde::{Deserialize, Serialize};
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session key under which the signed-in user is stored
pub const SESSION_USER_KEY: &str = "user";

/// User information stored in the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Login name the session was opened with
    pub username: String,
}

impl SessionUser {
    /// Create a new session user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Create the cookie session layer
///
/// Sessions live in process memory and expire after seven days of
/// inactivity, so a restart signs everyone out.
///
/// # Returns
/// Session layer ready to be added to the axum router
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    SessionManagerLayer::new(session_store)
        .with_name("mysession")
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
