//! Extractors whose rejections use the crate's JSON error body.
//!
//! Axum's stock `Json` and `Path` rejections answer with plain text; these wrappers turn
//! them into [`Error::Validation`] so every failure has the same `{code, message}` shape.

use crate::errors::Error;
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON request body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Numeric ticket id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy)]
pub struct TicketId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for TicketId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Self(id))
    }
}
