//! Authentication service implementation.

use crate::dto::{LoginRequest, LoginResponse};
use async_trait::async_trait;
use productify_config::SecurityConfig;
use productify_core::{ProductifyError, ProductifyResult, ValidateExt};
use productify_security::{Claims, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, request: LoginRequest) -> ProductifyResult<LoginResponse>;

    /// Validates a bearer token and returns its claims.
    async fn validate_token(&self, token: &str) -> ProductifyResult<Claims>;
}

/// Authentication against the single configured administrator account.
pub struct AuthServiceImpl {
    config: Arc<SecurityConfig>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let token_provider = Arc::new(TokenProvider::new(Arc::clone(&config)));
        Self {
            config,
            token_provider,
        }
    }

    fn credentials_match(&self, request: &LoginRequest) -> bool {
        request.username == self.config.admin_username
            && request.password == self.config.admin_password
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, request: LoginRequest) -> ProductifyResult<LoginResponse> {
        debug!("Login attempt for: {}", request.username);

        request.validate_request()?;

        if !self.credentials_match(&request) {
            warn!("Failed login attempt for: {}", request.username);
            return Err(ProductifyError::InvalidCredentials);
        }

        let token = self.token_provider.issue_token(&request.username)?;

        info!("User logged in: {}", request.username);
        Ok(LoginResponse { token })
    }

    async fn validate_token(&self, token: &str) -> ProductifyResult<Claims> {
        self.token_provider.verify_token(token)
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl")
            .field("admin_username", &self.config.admin_username)
            .field("token_provider", &self.token_provider)
            .finish_non_exhaustive()
    }
}
