// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use super::error::HttpError;

/// JSON request body whose rejections are reported as [`HttpError`], so a
/// malformed body gets the same `{error, message}` shape as every other error.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
