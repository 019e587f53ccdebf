//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Includes the start time so repeated runs against one database do not
/// collide.
pub fn unique_suffix() -> String {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{started}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Credentials posted to both /register and /login
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser_{}", unique_suffix()),
            password: "TestPass123!".to_string(),
        }
    }

    pub fn with_password(&self, password: &str) -> Self {
        Self {
            username: self.username.clone(),
            password: password.to_string(),
        }
    }
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
}

/// Session response
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub username: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: Option<String>,
}
