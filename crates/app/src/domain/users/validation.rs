//! Signup validation.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const USERNAME_REQUIRED: &str = "Username is required";
const INVALID_EMAIL: &str = "Invalid email format";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";

/// A single rejected signup field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending body field.
    pub path: &'static str,

    /// Human readable reason.
    pub msg: &'static str,

    /// The submitted value (empty when absent, never the password).
    pub value: String,
}

/// Validated signup input.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ValidSignup {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        custom(function = "has_public_tld", message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

/// The last domain label must be an alphabetic TLD of two or more letters,
/// or a punycode `xn--` label.
fn has_public_tld(email: &str) -> Result<(), ValidationError> {
    let tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .map(|(_, tld)| tld);

    let valid = tld.is_some_and(|tld| {
        let punycode = tld.to_ascii_lowercase().starts_with("xn--")
            && tld.len() > 4
            && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        punycode || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("tld").with_message(Cow::Borrowed(INVALID_EMAIL)))
    }
}

/// One violation per failed field, in form order.
fn violations(signup: &ValidSignup, errors: &ValidationErrors) -> Vec<FieldViolation> {
    let failed = errors.field_errors();

    [
        ("username", USERNAME_REQUIRED, signup.username.as_str()),
        ("email", INVALID_EMAIL, signup.email.as_str()),
        ("password", PASSWORD_TOO_SHORT, ""),
    ]
    .into_iter()
    .filter(|(path, _, _)| failed.contains_key(*path))
    .map(|(path, msg, value)| FieldViolation {
        path,
        msg,
        value: value.to_owned(),
    })
    .collect()
}

/// Check every signup field and collect all violations.
pub fn validate_signup(
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<ValidSignup, Vec<FieldViolation>> {
    let signup = ValidSignup {
        username: username.unwrap_or_default().to_owned(),
        email: email.unwrap_or_default().to_owned(),
        password: password.unwrap_or_default().to_owned(),
    };

    match signup.validate() {
        Ok(()) => Ok(signup),
        Err(errors) => Err(violations(&signup, &errors)),
    }
}

/// Whether `email` passes the same check signup applies.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email() && has_public_tld(email).is_ok()
}
