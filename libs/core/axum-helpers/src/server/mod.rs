//! Server infrastructure module.
//!
//! This module provides:
//! - Health endpoint wiring
//! - Graceful shutdown coordination
//! - Connection cleanup on exit
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, health_router};
//! use core_config::app_info;
//!
//! // Add the liveness endpoint
//! let app = api_routes.merge(health_router(app_info!()));
//!
//! // Start server with graceful shutdown and cleanup
//! create_production_app(app, &config.server, config.server.shutdown_timeout(), async move {
//!     drop(mongo_client);
//! })
//! .await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::create_production_app;
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
