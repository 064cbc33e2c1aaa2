//! JWT token provider for issuing and verifying bearer tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use productify_config::SecurityConfig;
use productify_core::{ProductifyError, ProductifyResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Issues a signed token for `subject`.
    pub fn issue_token(&self, subject: &str) -> ProductifyResult<String> {
        let lifetime = Duration::from_std(self.config.token_expiration())
            .map_err(|e| ProductifyError::Configuration(format!("Invalid token lifetime: {e}")))?;
        let expires_at = Utc::now()
            .checked_add_signed(lifetime)
            .ok_or_else(|| ProductifyError::Configuration("Token lifetime overflows".to_string()))?;

        let claims = Claims::new(subject, self.config.jwt_issuer.clone(), expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ProductifyError::Internal(format!("Failed to issue token: {e}")))?;

        debug!("Issued token for {}", subject);
        Ok(token)
    }

    /// Verifies a token and returns its claims.
    pub fn verify_token(&self, token: &str) -> ProductifyResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => ProductifyError::TokenExpired,
                    ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                        ProductifyError::InvalidToken("Invalid token signature".to_string())
                    }
                    ErrorKind::InvalidIssuer => {
                        ProductifyError::InvalidToken("Invalid token issuer".to_string())
                    }
                    _ => ProductifyError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("expiration_secs", &self.config.jwt_expiration_secs)
            .finish_non_exhaustive()
    }
}
