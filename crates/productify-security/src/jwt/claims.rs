//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (login name).
    pub sub: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Not before timestamp.
    pub nbf: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates claims for `subject` valid from now until `expires_at`.
    #[must_use]
    pub fn new(subject: impl Into<String>, issuer: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: subject.into(),
            iat: now,
            nbf: now,
            exp: expires_at.timestamp(),
            iss: issuer.into(),
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// Returns the authenticated login name.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_claims() {
        let expires = Utc::now() + Duration::hours(1);
        let claims = Claims::new("admin", "issuer", expires);

        assert_eq!(claims.subject(), "admin");
        assert_eq!(claims.iss, "issuer");
        assert_eq!(claims.iat, claims.nbf);
        assert_eq!(claims.expires_at().timestamp(), expires.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new("admin", "issuer", Utc::now() - Duration::minutes(5));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_unique_token_ids() {
        let expires = Utc::now() + Duration::hours(1);
        let a = Claims::new("admin", "issuer", expires);
        let b = Claims::new("admin", "issuer", expires);
        assert_ne!(a.jti, b.jti);
    }
}
