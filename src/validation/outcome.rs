//! The outcome of one validation pass.
//!
//! A submission produces exactly one of four mutually exclusive tags. The
//! original form this replaces tracked three independent error booleans and
//! partially overwrote them per branch, which let a previously-set flag leak
//! across submissions; a single tagged variant makes that state structurally
//! unrepresentable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages;

/// The single result of validating one submission snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The email field does not parse as an address.
    EmailInvalid,
    /// The email is valid but the password is below the minimum length.
    PasswordTooShort,
    /// Email and password are valid but the confirmation differs.
    ConfirmPasswordMismatch,
    /// All three checks passed.
    Valid,
}

impl ValidationResult {
    /// Returns whether the submission passed every check.
    pub fn is_valid(self) -> bool {
        self == ValidationResult::Valid
    }

    /// The message the form shows for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            ValidationResult::EmailInvalid => messages::EMAIL_INVALID,
            ValidationResult::PasswordTooShort => messages::PASSWORD_TOO_SHORT,
            ValidationResult::ConfirmPasswordMismatch => messages::CONFIRM_PASSWORD_MISMATCH,
            ValidationResult::Valid => messages::SIGN_IN_SUCCESS,
        }
    }

    /// Converts the outcome into a `Result` for callers using `?`-style flow.
    pub fn ok(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::EmailInvalid => Err(ValidationError::EmailInvalid),
            ValidationResult::PasswordTooShort => Err(ValidationError::PasswordTooShort),
            ValidationResult::ConfirmPasswordMismatch => {
                Err(ValidationError::ConfirmPasswordMismatch)
            }
        }
    }
}

/// A failed validation outcome as a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::EMAIL_INVALID)]
    EmailInvalid,
    #[error("{}", messages::PASSWORD_TOO_SHORT)]
    PasswordTooShort,
    #[error("{}", messages::CONFIRM_PASSWORD_MISMATCH)]
    ConfirmPasswordMismatch,
}
