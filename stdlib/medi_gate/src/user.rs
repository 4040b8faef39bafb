use serde::{Deserialize, Serialize};

use crate::credential::Credential;

/// A registered user. Created on sign-up, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub credential: Credential,
    pub created_at: String,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>, credential: Credential) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            credential,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
