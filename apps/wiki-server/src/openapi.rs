//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wiki Server",
        version = "0.1.0",
        description = "User account REST API over MongoDB with a video catalogue sidecar",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/user", api = domain_users::ApiDoc),
        (path = "/api", api = domain_videos::ApiDoc)
    ),
    tags(
        (name = "Users", description = "User account endpoints (MongoDB)"),
        (name = "Videos", description = "Video catalogue endpoints (in-memory)")
    )
)]
pub struct ApiDoc;
