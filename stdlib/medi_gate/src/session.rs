//! Caller-owned session state.

/// Two-state session: anonymous until a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { user_name: String, email: String },
}

/// Per-user session context, passed explicitly to the gate.
///
/// There is no transition back to [`SessionState::Anonymous`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    state: SessionState,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// Display name given at login
    pub fn user_name(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { user_name, .. } => Some(user_name),
            SessionState::Anonymous => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { email, .. } => Some(email),
            SessionState::Anonymous => None,
        }
    }

    pub(crate) fn authenticate(&mut self, user_name: &str, email: &str) {
        self.state = SessionState::Authenticated {
            user_name: user_name.to_string(),
            email: email.to_string(),
        };
    }
}
