//! JWT claims extractor.

use crate::responses::AppError;
use productify_core::ProductifyError;
use productify_security::Claims;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Extractor for authenticated user claims.
///
/// Reads the claims that [`crate::middleware::auth_middleware`] stored for
/// a valid bearer token; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| {
                AppError(ProductifyError::unauthorized(
                    "Missing, invalid or expired bearer token",
                ))
            })
    }
}
