//! Session gate for the Health Assistant.
//!
//! Holds user records behind a pluggable [`UserStore`], hashes credentials
//! through a [`CredentialHasher`], validates registration/login fields and
//! moves a caller-owned [`SessionContext`] from anonymous to authenticated.

pub mod credential;
pub mod error;
pub mod gate;
pub mod session;
pub mod store;
pub mod store_file;
pub mod user;
pub mod validate;

pub use credential::{Credential, CredentialHasher, Sha256Hasher};
pub use error::{GateError, StoreError, ValidationError};
pub use gate::SessionGate;
pub use session::{SessionContext, SessionState};
pub use store::{InMemoryUserStore, UserStore};
pub use store_file::FileUserStore;
pub use user::UserRecord;
pub use validate::{
    validate_credentials, validate_email, validate_name, validate_password, MIN_PASSWORD_LEN,
};

#[cfg(test)]
mod tests {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .is_test(true)
                .try_init();
        });
    }
}

#[cfg(test)]
pub(crate) use tests::init_test_logger;
