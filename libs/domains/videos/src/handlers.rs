use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use utoipa::OpenApi;

use crate::models::{Creator, Video};
use crate::service::VideoService;

/// OpenAPI documentation for the Videos API
#[derive(OpenApi)]
#[openapi(
    paths(list_videos, save_video),
    components(schemas(Video, Creator)),
    tags(
        (name = "Videos", description = "Video catalogue endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the videos router
pub fn router(service: VideoService) -> Router {
    Router::new()
        .route("/videos", get(list_videos).post(save_video))
        .with_state(service)
}

/// List all videos
#[utoipa::path(
    get,
    path = "/videos",
    tag = "Videos",
    responses(
        (status = 200, description = "All stored videos", body = Vec<Video>)
    )
)]
async fn list_videos(State(service): State<VideoService>) -> Json<Vec<Video>> {
    Json(service.find_all().await)
}

/// Validate and store a video
#[utoipa::path(
    post,
    path = "/videos",
    tag = "Videos",
    request_body = Video,
    responses(
        (status = 201, description = "Video accepted"),
        (status = 400, description = "Malformed body or failed validation")
    )
)]
async fn save_video(
    State(service): State<VideoService>,
    payload: Result<Json<Video>, JsonRejection>,
) -> Response {
    let video = match payload {
        Ok(Json(video)) => video,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match service.save(video).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Video Input is valid!!" })),
        )
            .into_response(),
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": errors.to_string() })),
        )
            .into_response(),
    }
}
