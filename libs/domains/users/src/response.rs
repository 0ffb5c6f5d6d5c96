use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inner wrapper of the response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payload<T> {
    pub data: T,
}

/// Uniform envelope returned by every user endpoint
///
/// Wire shape: `{"status": <code>, "message": "...", "data": {"data": <payload>}}`.
/// The HTTP status is repeated in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Payload<T>,
}

impl<T> UserResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Payload { data },
        }
    }

    /// Envelope with the conventional `success` message
    pub fn success(status: StatusCode, data: T) -> Self {
        Self::new(status, "success", data)
    }
}

impl<T: Serialize> IntoResponse for UserResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
