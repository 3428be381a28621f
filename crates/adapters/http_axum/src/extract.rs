//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body decoded regardless of the `Content-Type` header.
///
/// Unlike [`axum::Json`], a missing or foreign content type is not an error:
/// only a body that fails to decode into `T` is rejected, as
/// [`ApiError::Decode`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::Body)?;
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(ApiError::Decode)
    }
}
