//! Custom field rules shared by request DTOs.

use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

use crate::domain::entities::Money;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Checks the address shape after trimming, since the stored value is trimmed.
/// Blank input is left to `not_blank`.
pub fn email_address(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !trimmed.validate_email() {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("must be a well-formed email address")));
    }
    Ok(())
}

/// Rejects zero and negative amounts.
pub fn positive_money(value: &Money) -> Result<(), ValidationError> {
    if !value.is_positive() {
        return Err(
            ValidationError::new("positive").with_message(Cow::Borrowed("must be greater than 0.00")),
        );
    }
    Ok(())
}
