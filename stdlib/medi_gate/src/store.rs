//! User repository trait and the process-lifetime implementation.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::StoreError;
use crate::user::UserRecord;

/// Repository of user records keyed by email.
///
/// Records are insert-only: `insert` must reject an email that is already
/// present and leave the existing record untouched.
pub trait UserStore: Send + Sync {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    fn insert(&self, record: UserRecord) -> Result<(), StoreError>;

    fn contains(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.get(email)?.is_some())
    }

    fn list_emails(&self) -> Result<Vec<String>, StoreError>;

    /// Get backend name/identifier
    fn backend_name(&self) -> &str;
}

/// Users held in memory for the lifetime of the process
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().get(email).cloned())
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write();
        if users.contains_key(&record.email) {
            return Err(StoreError::AlreadyExists(record.email));
        }
        users.insert(record.email.clone(), record);
        Ok(())
    }

    fn list_emails(&self) -> Result<Vec<String>, StoreError> {
        let mut emails: Vec<String> = self.users.read().keys().cloned().collect();
        emails.sort();
        Ok(emails)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
