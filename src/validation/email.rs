//! Email address grammar checking.
//!
//! Uses the validator crate to check the address against HTML5 email format
//! requirements, tightened with an explicit dot-in-domain rule: HTML5 admits
//! dotless domains like `user@localhost`, but a sign-in address must carry a
//! top-level domain.

use validator::ValidateEmail;

use crate::validation::MAX_EMAIL_LENGTH;

/// Returns whether `email` is a syntactically valid address.
///
/// The address is checked exactly as typed: no trimming or case folding, so
/// any unescaped whitespace fails the grammar. The domain part must contain
/// at least one dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    if !email.validate_email() {
        return false;
    }

    // The local part may contain escaped '@' inside quotes, so the domain
    // starts after the last one.
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}
