//! Validation helpers shared by request DTOs

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::errors::DomainError;

pub fn non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

pub fn positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}

/// Flatten field errors into `field: message; field: message`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{:?}", e.code));
                if *field == "__all__" {
                    msg
                } else {
                    format!("{}: {}", field, msg)
                }
            })
        })
        .collect();
    field_errors.sort();

    if field_errors.is_empty() {
        "Validation failed".to_string()
    } else {
        field_errors.join("; ")
    }
}

/// Run `validator` checks and map failures to a [`DomainError`] built by `wrap`.
pub fn validate_with<T: Validate>(
    value: &T,
    wrap: impl FnOnce(String) -> DomainError,
) -> Result<(), DomainError> {
    value
        .validate()
        .map_err(|errors| wrap(format_validation_errors(&errors)))
}
