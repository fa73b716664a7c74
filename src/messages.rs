//! User-facing messages shown by the form.

pub const EMAIL_INVALID: &str = "The email you input is invalid";

pub const PASSWORD_TOO_SHORT: &str =
    "The password you entered should contain 5 or more characters";

pub const CONFIRM_PASSWORD_MISMATCH: &str = "The passwords don't match. Try again.";

pub const SIGN_IN_SUCCESS: &str = "You signed in successfully!";
