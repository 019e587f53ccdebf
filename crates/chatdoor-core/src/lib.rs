//! # chatdoor-core
//!
//! Domain layer containing the user entity, the username value object and the
//! user directory trait. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::User;
pub use error::DomainError;
pub use traits::{RepoResult, UserRepository};
pub use value_objects::Username;
