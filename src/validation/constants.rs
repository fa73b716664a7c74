//! Constants used throughout the validation system

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Maximum reasonable length for an email address, per RFC 5321
pub const MAX_EMAIL_LENGTH: usize = 254;
