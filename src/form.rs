//! Form field state and the submission snapshot.

use serde::{Deserialize, Serialize};

use crate::validation::{validate, ValidationResult};

/// The three raw field values of one submission, exactly as typed.
///
/// This is an explicit, immutable snapshot: `validate` reads these fields
/// and nothing else, so there is no ambient state to go stale between
/// submissions. The wire shape keeps the original form's camelCase field
/// name for the confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl FormInput {
    pub fn new(email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            email: email.to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        }
    }
}

/// Mutable form state owned by the rendering layer.
///
/// Field setters run on every keystroke; validation runs only on
/// [`submit`](SignInForm::submit). Each submit recomputes the outcome from a
/// full snapshot of the current fields and replaces the previous outcome
/// wholesale, so the visible message always equals the mapping of the most
/// recent result and never a union of current and past errors.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    input: FormInput,
    last_outcome: Option<ValidationResult>,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: &str) {
        self.input.email = email.to_owned();
    }

    pub fn set_password(&mut self, password: &str) {
        self.input.password = password.to_owned();
    }

    pub fn set_confirm_password(&mut self, confirm_password: &str) {
        self.input.confirm_password = confirm_password.to_owned();
    }

    /// The current field values.
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Validates the current fields and records the outcome.
    pub fn submit(&mut self) -> ValidationResult {
        let outcome = validate(&self.input);
        self.last_outcome = Some(outcome);
        outcome
    }

    /// The outcome of the most recent submit, if any.
    pub fn last_outcome(&self) -> Option<ValidationResult> {
        self.last_outcome
    }

    /// The message currently shown by the form, if a submit happened.
    pub fn message(&self) -> Option<&'static str> {
        self.last_outcome.map(ValidationResult::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_initially_empty() {
        let form = SignInForm::new();
        assert_eq!(form.input(), &FormInput::default());
        assert_eq!(form.last_outcome(), None);
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_setters_capture_typed_values() {
        let mut form = SignInForm::new();
        form.set_email("wiu@gmail.com");
        form.set_password("wiu66");
        form.set_confirm_password("wiu66");

        assert_eq!(
            form.input(),
            &FormInput::new("wiu@gmail.com", "wiu66", "wiu66")
        );
    }

    #[test]
    fn test_submit_records_single_outcome() {
        let mut form = SignInForm::new();
        form.set_email("wiu@gmail.com");
        form.set_password("wiu6");
        form.set_confirm_password("wiu6");

        assert_eq!(form.submit(), ValidationResult::PasswordTooShort);
        assert_eq!(form.last_outcome(), Some(ValidationResult::PasswordTooShort));
        assert_eq!(form.message(), Some(crate::messages::PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_resubmit_replaces_previous_outcome() {
        let mut form = SignInForm::new();
        form.set_email("wiugmail.com");
        form.set_password("wiu66");
        form.set_confirm_password("wiu66");
        assert_eq!(form.submit(), ValidationResult::EmailInvalid);

        // Fixing only the email must not leave the old error showing
        form.set_email("wiu@gmail.com");
        assert_eq!(form.submit(), ValidationResult::Valid);
        assert_eq!(form.message(), Some(crate::messages::SIGN_IN_SUCCESS));
    }

    #[test]
    fn test_form_input_deserializes_camel_case_payload() {
        let payload = r#"{
            "email": "wiu@gmail.com",
            "password": "wiu66",
            "confirmPassword": "wiu66"
        }"#;

        let input: FormInput = serde_json::from_str(payload).unwrap();
        assert_eq!(input, FormInput::new("wiu@gmail.com", "wiu66", "wiu66"));
    }
}
