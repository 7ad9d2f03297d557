//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a body that fails to parse is answered with
/// 400 `Invalid object received!` in the usual error shape.
pub struct JsonBody<T>(pub T);

pub const INVALID_OBJECT_MESSAGE: &str = "Invalid object received!";

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::bad_request(
                    INVALID_OBJECT_MESSAGE,
                    rejection.body_text(),
                )),
            }
        }
    }
}
