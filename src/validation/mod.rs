//! Root module for the validation system.
//! Exposes the public API for sign-in form validation.

mod constants;
mod email;
mod outcome;

pub use constants::*;
pub use email::is_valid_email;
pub use outcome::{ValidationError, ValidationResult};

use crate::form::FormInput;

/// Validates one submission snapshot and returns its single outcome.
///
/// Checks run in order of logical dependency and short-circuit on the first
/// failure: a password check is meaningless without a valid email
/// destination, and confirmation is meaningless without a valid password.
/// Later checks are never evaluated, and never reported, while an earlier
/// one fails.
///
/// The function is pure and idempotent: it reads nothing but `input` and
/// touches no external state, so repeated calls on the same snapshot yield
/// the same outcome.
///
/// # Example
/// ```
/// use signin_form::{validate, FormInput, ValidationResult};
///
/// let input = FormInput::new("user@example.com", "secret", "secret");
/// assert_eq!(validate(&input), ValidationResult::Valid);
/// ```
pub fn validate(input: &FormInput) -> ValidationResult {
    if !is_valid_email(&input.email) {
        return ValidationResult::EmailInvalid;
    }

    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::PasswordTooShort;
    }

    // Exact, case-sensitive comparison of the password as typed
    if input.password != input.confirm_password {
        return ValidationResult::ConfirmPasswordMismatch;
    }

    ValidationResult::Valid
}
