//! JSON body extractor that answers malformed bodies in the API envelope.

use crate::responses::AppError;
use productify_core::ProductifyError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a body that cannot be parsed into `T` becomes a
/// 400 `BAD_REQUEST` error response.
///
/// Field rules are checked by the services, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError(ProductifyError::bad_request(format!(
                    "Invalid JSON: {}",
                    rejection.body_text()
                )))
            })?;

        Ok(JsonBody(value))
    }
}
