//! Service context - dependency container for services
//!
//! Holds the user directory, the credential hasher and the session issuer.

use std::sync::Arc;

use chatdoor_common::{CredentialHasher, SessionIssuer};
use chatdoor_core::traits::UserRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared read-only between requests.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    credential_hasher: Arc<CredentialHasher>,
    session_issuer: Arc<SessionIssuer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        credential_hasher: Arc<CredentialHasher>,
        session_issuer: Arc<SessionIssuer>,
    ) -> Self {
        Self {
            user_repo,
            credential_hasher,
            session_issuer,
        }
    }

    /// Get the user directory
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the credential hasher
    pub fn credential_hasher(&self) -> &CredentialHasher {
        self.credential_hasher.as_ref()
    }

    /// Get the session issuer
    pub fn session_issuer(&self) -> &SessionIssuer {
        self.session_issuer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("credential_hasher", &self.credential_hasher)
            .field("session_issuer", &self.session_issuer)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    credential_hasher: Option<Arc<CredentialHasher>>,
    session_issuer: Option<Arc<SessionIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn credential_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.credential_hasher = Some(Arc::new(hasher));
        self
    }

    pub fn session_issuer(mut self, issuer: SessionIssuer) -> Self {
        self.session_issuer = Some(Arc::new(issuer));
        self
    }

    /// Build the ServiceContext
    ///
    /// The credential hasher falls back to the legacy default secret.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the directory or the session
    /// issuer is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.credential_hasher.unwrap_or_default(),
            self.session_issuer
                .ok_or_else(|| ServiceError::validation("session_issuer is required"))?,
        ))
    }
}
