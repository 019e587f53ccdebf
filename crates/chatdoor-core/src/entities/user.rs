//! User entity - a registered account in the user directory

use chrono::{DateTime, Utc};
use std::fmt;

/// A registered user
///
/// Records are created once at registration and never mutated afterwards.
/// `password_hash` holds the stored credential, never the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User stamped with the current time
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_credential() {
        let user = User::new("alice", "super-secret-digest");
        let debug = format!("{user:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("super-secret-digest"));
    }
}
