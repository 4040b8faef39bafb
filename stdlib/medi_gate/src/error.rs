//! Error types for the session gate

use thiserror::Error;

/// Malformed registration/login fields.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
}

/// Errors raised by a [`crate::UserStore`] implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage I/O failed: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Outcome of a failed `register` or `login`
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Email is already registered.")]
    DuplicateEmail(String),
    #[error("Email not registered. Please sign up first.")]
    UnknownEmail(String),
    #[error("Incorrect password. Please try again.")]
    WrongPassword,
    #[error("User store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for GateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(email) => GateError::DuplicateEmail(email),
            other => GateError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_maps_to_duplicate_email() {
        let err: GateError = StoreError::AlreadyExists("ann@gmail.com".into()).into();
        assert!(matches!(err, GateError::DuplicateEmail(ref e) if e == "ann@gmail.com"));
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err: GateError = ValidationError::PasswordTooShort.into();
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long."
        );
    }
}
