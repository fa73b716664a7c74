//! Validation core for a sign-in form.
//!
//! The form has three text fields (email, password, confirm-password) and a
//! single submit action. On submit, [`validate`] evaluates the current field
//! values and returns exactly one [`ValidationResult`]: the first failing
//! check wins, so at most one error is ever reported per submission.
//!
//! The rendering layer owns the mutable field state (see [`SignInForm`]),
//! calls [`validate`] only on submit, and maps the outcome onto a single
//! visible message.

pub mod form;
pub mod messages;
pub mod validation;

pub use form::{FormInput, SignInForm};
pub use validation::{validate, ValidationError, ValidationResult, MIN_PASSWORD_LENGTH};
