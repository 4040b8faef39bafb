//! Salted credential hashing

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// A stored credential. Never contains the plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub salt: String,
    pub hash: String,
}

/// Pluggable password hashing
pub trait CredentialHasher: Send + Sync {
    /// Hash a password with a fresh salt
    fn hash(&self, password: &str) -> Credential;

    /// Check a password against a stored credential
    fn verify(&self, password: &str, credential: &Credential) -> bool;

    fn scheme(&self) -> &str;
}

/// `sha256(salt_hex || password)` with a random 16-byte salt
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        let out = hasher.finalize();
        format!("{out:x}")
    }
}

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> Credential {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let salt = hex::encode(salt);
        let hash = Self::digest(&salt, password);
        Credential { salt, hash }
    }

    fn verify(&self, password: &str, credential: &Credential) -> bool {
        let candidate = Self::digest(&credential.salt, password);
        constant_time_eq(candidate.as_bytes(), credential.hash.as_bytes())
    }

    fn scheme(&self) -> &str {
        "sha256-salted"
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = Sha256Hasher;
        let cred = hasher.hash("password1");
        assert!(hasher.verify("password1", &cred));
        assert!(!hasher.verify("password2", &cred));
        assert!(!hasher.verify("", &cred));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hasher = Sha256Hasher;
        let a = hasher.hash("password1");
        let b = hasher.hash("password1");
        assert_eq!(hex::decode(&a.salt).unwrap().len(), SALT_LEN);
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn credential_never_holds_plaintext() {
        let cred = Sha256Hasher.hash("correct horse battery");
        assert!(!cred.hash.contains("correct horse"));
        assert!(!cred.salt.contains("correct horse"));
        assert_eq!(cred.hash.len(), 64);
    }

    #[test]
    fn constant_time_eq_checks_length() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
