//! Field validation shared by registration and login.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.-]+$").expect("email pattern is valid");
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Accepts `local@domain.tld` shaped addresses.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate all three form fields, reporting the first failure in form order.
pub fn validate_credentials(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(password)
}
