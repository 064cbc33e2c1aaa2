//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use thiserror::Error;

/// Unified error type for all layers of Productify.
///
/// Lookups never produce [`ProductifyError::NotFound`]; they return
/// `Option` and leave the translation to the caller. `NotFound` is raised
/// only by mutations that target a missing identity.
#[derive(Error, Debug)]
pub enum ProductifyError {
    // ============ Domain Errors ============
    /// Entity targeted by an update or delete does not exist
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// One or more field rules failed
    #[error("Validation error: {0}")]
    Validation(Violations),

    /// Malformed request that is not tied to a single field rule
    #[error("Bad request: {0}")]
    BadRequest(String),

    // ============ Authentication Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Store Errors ============
    /// The store rejected a write because of a referential, unique or
    /// check constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other store failure (connectivity, missing row on update, ...)
    #[error("Database error: {0}")]
    Database(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProductifyError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BadRequest(_) => 400,
            Self::Constraint(_) => 409,
            Self::Unauthorized(_)
            | Self::InvalidToken(_)
            | Self::TokenExpired
            | Self::InvalidCredentials => 401,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Constraint(_) => "CONSTRAINT_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for an entity.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error for a single field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(Violations(vec![FieldError {
            field: field.into(),
            message: message.into(),
            code: "invalid".to_string(),
        }]))
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was surfaced by the backing store.
    #[must_use]
    pub const fn is_store_error(&self) -> bool {
        matches!(self, Self::Constraint(_) | Self::Database(_))
    }

    /// Checks if this error is the terminal "entity not found" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// SQLite reports `RESTRICT` foreign key actions under this extended code.
#[cfg(feature = "sqlx")]
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ProductifyError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation()
                || db_err.is_unique_violation()
                || db_err.is_check_violation()
                || db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)
            {
                return Self::Constraint(db_err.message().to_string());
            }
        }
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for ProductifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

/// Ordered list of field rule violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(pub Vec<FieldError>);

impl Violations {
    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if any violation concerns the given field.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    /// Creates a new error response from a `ProductifyError`.
    ///
    /// Validation errors carry their field violations in `details`.
    #[must_use]
    pub fn from_error(error: &ProductifyError) -> Self {
        let details = match error {
            ProductifyError::Validation(violations) => Some(violations.0.clone()),
            _ => None,
        };
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

impl From<&ProductifyError> for ErrorResponse {
    fn from(error: &ProductifyError) -> Self {
        Self::from_error(error)
    }
}
