//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::UserPayload;

/// User id from the `{id}` path segment.
///
/// A segment that is not an integer cannot name any row, so it is
/// reported as not found rather than as a client error.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound {
                resource: "user",
                id: e.body_text(),
            })?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::NotFound {
                resource: "user",
                id: raw,
            })
    }
}

/// JSON user payload; any rejection becomes a 500 like a store failure.
pub struct UserBody(pub UserPayload);

impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<UserPayload>::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody {
                message: e.body_text(),
            })?;

        Ok(Self(payload))
    }
}
