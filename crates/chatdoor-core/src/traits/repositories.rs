//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the user directory, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::Username;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// The user directory: username -> stored credential
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact (case-sensitive, untrimmed) username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already registered
    async fn exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// Insert a new user record
    ///
    /// Implementations must enforce username uniqueness themselves and report
    /// a collision as `DomainError::UsernameTaken`, even when a prior
    /// existence check passed.
    async fn create(&self, username: &Username, password_hash: &str) -> RepoResult<User>;

    /// Check connectivity with the backing store
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
