//! In-process implementation of UserRepository
//!
//! Keeps records in a map behind a lock. Insert checks and writes under the
//! same write lock, so it has the same uniqueness guarantee as the
//! PostgreSQL primary key.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use chatdoor_core::entities::User;
use chatdoor_core::error::DomainError;
use chatdoor_core::traits::{RepoResult, UserRepository};
use chatdoor_core::value_objects::Username;

/// User directory held in memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Whether no user has registered yet
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().get(username).cloned())
    }

    async fn create(&self, username: &Username, password_hash: &str) -> RepoResult<User> {
        let mut users = self.users.write();
        if users.contains_key(username.as_str()) {
            return Err(DomainError::UsernameTaken(username.to_string()));
        }

        let user = User::new(username.as_str(), password_hash);
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}
