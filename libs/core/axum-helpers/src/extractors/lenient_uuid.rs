//! Tolerant UUID path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for UUID path parameters that tolerates malformed input.
///
/// A path value that does not parse as a UUID yields [`Uuid::nil`] instead
/// of rejecting the request, so the operation proceeds and simply fails to
/// match any record.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::LenientUuid;
///
/// async fn get_user(LenientUuid(id): LenientUuid) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
pub struct LenientUuid(pub Uuid);

impl<S> FromRequestParts<S> for LenientUuid
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        let id = Uuid::parse_str(&raw).unwrap_or_else(|_| {
            tracing::debug!(raw = %raw, "path value is not a UUID, substituting the nil id");
            Uuid::nil()
        });

        Ok(LenientUuid(id))
    }
}
