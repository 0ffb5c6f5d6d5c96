use axum_helpers::server::{create_production_app, health_router};
use axum_helpers::session::create_session_layer;
use core_config::tracing::{init_tracing, install_color_eyre};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes
    api::users::init_indexes(&db).await?;

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // The cleanup future below takes the state, so keep our own handle
    // on the server config
    let server_config = state.config.server.clone();
    let shutdown_timeout = server_config.shutdown_timeout();

    // Assemble the app: routes, liveness, docs, then the session and
    // trace layers over everything
    let app = api::routes(&state)
        .merge(health_router(state.config.app))
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(create_session_layer())
        .layer(TraceLayer::new_for_http());

    info!(
        "Starting wiki-server with production-ready shutdown ({:?} timeout)",
        shutdown_timeout
    );

    // Production-ready server with graceful shutdown
    create_production_app(app, &server_config, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        // MongoDB client closes automatically on drop
        drop(state.mongo_client);
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("wiki-server shutdown complete");
    Ok(())
}
