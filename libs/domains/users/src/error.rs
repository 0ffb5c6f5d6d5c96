use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::response::UserResponse;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    Validation(String),

    #[error("User with specified ID not found!")]
    NotFound(Uuid),

    #[error("{0}")]
    Storage(String),

    #[error("storage call exceeded the {0:?} deadline")]
    Timeout(Duration),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::Malformed(_) | UserError::Validation(_) => StatusCode::BAD_REQUEST,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Storage(_) | UserError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope `message` field; validation failures carry their own label
    fn message(&self) -> &'static str {
        match self {
            UserError::Validation(_) => "Validation error",
            _ => "error",
        }
    }
}

/// Render the error through the same envelope as successful responses,
/// with the underlying detail as the payload
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "user operation failed");
        }
        UserResponse::new(status, self.message(), self.to_string()).into_response()
    }
}

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        UserError::Malformed(rejection.body_text())
    }
}

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        UserError::Validation(errors.to_string())
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            UserError::Malformed("bad json".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::Validation("fname".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::NotFound(Uuid::nil()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::Storage("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            UserError::Timeout(Duration::from_secs(10)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_detail_text() {
        let err = UserError::NotFound(Uuid::nil());
        assert_eq!(err.to_string(), "User with specified ID not found!");
    }

    #[test]
    fn test_validation_message_label() {
        assert_eq!(UserError::Validation("x".into()).message(), "Validation error");
        assert_eq!(UserError::Storage("x".into()).message(), "error");
    }
}
