//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Server lifecycle, health endpoint, graceful shutdown
//! - **[`session`]**: Cookie session layer and the user record it carries
//! - **[`extractors`]**: Custom extractors (tolerant UUID path)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::create_production_app;
//! use axum_helpers::session::create_session_layer;
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Router::new().layer(create_session_layer());
//!
//!     let config = ServerConfig::default();
//!     create_production_app(app, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod extractors;
pub mod server;
pub mod session;

// Re-export server types
pub use server::{HealthResponse, ShutdownCoordinator, create_production_app, health_router};

// Re-export session helpers
pub use session::{SESSION_USER_KEY, SessionUser, create_session_layer};

// Re-export extractors
pub use extractors::LenientUuid;
