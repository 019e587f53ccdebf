//! Username - normalized account name used as the directory key

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A username accepted for registration
///
/// Surrounding whitespace is stripped and the result must be non-empty.
/// Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Normalize a raw username as submitted on registration
    ///
    /// # Errors
    /// Returns `DomainError::InvalidUsername` if nothing is left after trimming
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUsername(
                "Username must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the normalized name
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
