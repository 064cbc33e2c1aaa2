//! Validation utilities.

use crate::{FieldError, ProductifyError, Violations};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ProductifyError` listing every
    /// violation on failure.
    fn validate_request(&self) -> Result<(), ProductifyError> {
        self.validate().map_err(validation_errors_to_productify_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a structured list of
/// violations, ordered by field name.
///
/// Field names are reported in their camelCase wire form.
#[must_use]
pub fn collect_violations(errors: &ValidationErrors) -> Violations {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: wire_name(field),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    Violations(field_errors)
}

/// Maps a Rust field name (`category_id`) to its JSON key (`categoryId`).
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// Converts `validator::ValidationErrors` to `ProductifyError`.
#[must_use]
pub fn validation_errors_to_productify_error(errors: ValidationErrors) -> ProductifyError {
    ProductifyError::Validation(collect_violations(&errors))
}

/// Common validation functions.
pub mod rules {
    use crate::EntityId;
    use rust_decimal::Decimal;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a decimal amount is strictly greater than zero.
    pub fn positive(value: &Decimal) -> Result<(), ValidationError> {
        if *value <= Decimal::ZERO {
            return Err(ValidationError::new("positive"));
        }
        Ok(())
    }

    /// Validates that an identity refers to a persisted record.
    pub fn assigned(value: &EntityId) -> Result<(), ValidationError> {
        if !value.is_assigned() {
            return Err(ValidationError::new("assigned"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use crate::EntityId;
    use rust_decimal::Decimal;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(
            custom(function = "not_blank", message = "The name is required."),
            length(max = 5, message = "Too long.")
        )]
        name: String,
        #[validate(range(min = 1, message = "Must be positive."))]
        count: i64,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn test_positive() {
        assert!(positive(&Decimal::new(1, 2)).is_ok());
        assert!(positive(&Decimal::ZERO).is_err());
        assert!(positive(&Decimal::new(-10, 0)).is_err());
    }

    #[test]
    fn test_assigned() {
        assert!(assigned(&EntityId::new(1)).is_ok());
        assert!(assigned(&EntityId::UNASSIGNED).is_err());
        assert!(assigned(&EntityId::new(-1)).is_err());
    }

    #[test]
    fn test_validate_request_ok() {
        let sample = Sample {
            name: "ok".to_string(),
            count: 1,
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_collects_every_violation() {
        let sample = Sample {
            name: "  ".to_string(),
            count: 0,
        };
        let err = sample.validate_request().unwrap_err();
        match err {
            ProductifyError::Validation(violations) => {
                assert_eq!(violations.as_slice().len(), 2);
                assert_eq!(violations.as_slice()[0].field, "count");
                assert_eq!(violations.as_slice()[0].message, "Must be positive.");
                assert_eq!(violations.as_slice()[1].field, "name");
                assert_eq!(violations.as_slice()[1].code, "not_blank");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[derive(Debug, Validate)]
    struct Reference {
        #[validate(custom(function = "assigned", message = "A valid category is required."))]
        category_id: EntityId,
    }

    #[test]
    fn test_violation_fields_use_wire_names() {
        let err = Reference {
            category_id: EntityId::UNASSIGNED,
        }
        .validate_request()
        .unwrap_err();
        match err {
            ProductifyError::Validation(violations) => {
                assert!(violations.has_field("categoryId"));
                assert!(!violations.has_field("category_id"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("name"), "name");
        assert_eq!(wire_name("category_id"), "categoryId");
        assert_eq!(wire_name("jwt_expiration_secs"), "jwtExpirationSecs");
    }

    #[test]
    fn test_length_violation_message() {
        let sample = Sample {
            name: "toolong".to_string(),
            count: 3,
        };
        let err = sample.validate_request().unwrap_err();
        assert!(err.to_string().contains("name: Too long."));
    }
}
