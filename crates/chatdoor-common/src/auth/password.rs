//! Credential hashing
//!
//! Stored credentials are `hex(sha256(secret || password))` with one
//! process-wide secret and no per-user salt. This is the scheme the existing
//! directory was populated with, so it is kept as-is: two users with the same
//! password share the same stored credential.

use sha2::{Digest, Sha256};
use std::fmt;

/// Secret prefix used when none is configured
pub const DEFAULT_HASH_SECRET: &str = "secretCrypto";

/// Deterministic password hasher
#[derive(Clone)]
pub struct CredentialHasher {
    secret: String,
}

impl CredentialHasher {
    /// Create a hasher with the given secret prefix
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Hash a plaintext password into its stored representation
    ///
    /// Total and deterministic: the same input always yields the same
    /// 64-character lowercase hex digest.
    pub fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Check a plaintext password against a stored credential
    pub fn verify(&self, plaintext: &str, stored: &str) -> bool {
        self.hash(plaintext) == stored
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_SECRET)
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}
