//! Registration and login over an injected store and hasher

use crate::credential::{CredentialHasher, Sha256Hasher};
use crate::error::GateError;
use crate::session::SessionContext;
use crate::store::{InMemoryUserStore, UserStore};
use crate::user::UserRecord;
use crate::validate::validate_credentials;

/// Guards access to the prediction pages.
pub struct SessionGate {
    store: Box<dyn UserStore>,
    hasher: Box<dyn CredentialHasher>,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionGate {
    pub fn new(store: Box<dyn UserStore>, hasher: Box<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// In-memory store with salted SHA-256 credentials
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(InMemoryUserStore::new()))
    }

    pub fn with_store(store: Box<dyn UserStore>) -> Self {
        Self::new(store, Box::new(Sha256Hasher))
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Create a new account.
    ///
    /// Fails on invalid fields or an already registered email; the existing
    /// record is never touched.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, GateError> {
        validate_credentials(name, email, password)?;

        if self.store.contains(email)? {
            log::debug!("sign up rejected, email already registered: {email}");
            return Err(GateError::DuplicateEmail(email.to_string()));
        }

        let record = UserRecord::new(name, email, self.hasher.hash(password));
        self.store.insert(record.clone())?;
        log::info!(
            "registered {email} ({} store, {})",
            self.store.backend_name(),
            self.hasher.scheme()
        );
        Ok(record)
    }

    /// Authenticate `session` on success. The display name is the one
    /// supplied here, not the one stored at sign-up.
    pub fn login(
        &self,
        session: &mut SessionContext,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), GateError> {
        validate_credentials(name, email, password)?;

        let record = self
            .store
            .get(email)?
            .ok_or_else(|| GateError::UnknownEmail(email.to_string()))?;

        if !self.hasher.verify(password, &record.credential) {
            log::debug!("login rejected for {email}: wrong password");
            return Err(GateError::WrongPassword);
        }

        session.authenticate(name, email);
        log::info!("login succeeded for {email}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::session::SessionState;

    #[test]
    fn register_then_login() {
        crate::init_test_logger();
        let gate = SessionGate::in_memory();
        let rec = gate.register("Ann", "ann@gmail.com", "password1").unwrap();
        assert_eq!(rec.name, "Ann");
        assert_ne!(rec.credential.hash, "password1");

        let mut session = SessionContext::new();
        gate.login(&mut session, "Ann", "ann@gmail.com", "password1")
            .unwrap();
        assert_eq!(
            session.state(),
            &SessionState::Authenticated {
                user_name: "Ann".into(),
                email: "ann@gmail.com".into()
            }
        );
    }

    #[test]
    fn login_uses_supplied_name() {
        let gate = SessionGate::in_memory();
        gate.register("Ann", "ann@gmail.com", "password1").unwrap();
        let mut session = SessionContext::new();
        gate.login(&mut session, "Annie", "ann@gmail.com", "password1")
            .unwrap();
        assert_eq!(session.user_name(), Some("Annie"));
    }

    #[test]
    fn login_errors() {
        let gate = SessionGate::in_memory();
        gate.register("Ann", "ann@gmail.com", "password1").unwrap();
        let mut session = SessionContext::new();

        let err = gate
            .login(&mut session, "Ann", "bob@gmail.com", "password1")
            .unwrap_err();
        assert!(matches!(err, GateError::UnknownEmail(_)));

        let err = gate
            .login(&mut session, "Ann", "ann@gmail.com", "password2")
            .unwrap_err();
        assert!(matches!(err, GateError::WrongPassword));

        let err = gate
            .login(&mut session, "", "ann@gmail.com", "password1")
            .unwrap_err();
        assert!(matches!(
            err,
            GateError::Validation(ValidationError::EmptyName)
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn failed_login_after_success_keeps_session() {
        let gate = SessionGate::in_memory();
        gate.register("Ann", "ann@gmail.com", "password1").unwrap();
        let mut session = SessionContext::new();
        gate.login(&mut session, "Ann", "ann@gmail.com", "password1")
            .unwrap();
        assert!(gate
            .login(&mut session, "Ann", "ann@gmail.com", "wrongpass")
            .is_err());
        assert_eq!(session.user_name(), Some("Ann"));
    }
}
