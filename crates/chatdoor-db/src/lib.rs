//! # chatdoor-db
//!
//! User directory implementations of the `UserRepository` trait defined in
//! `chatdoor-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap for PostgreSQL
//! - The `users` table model with SQLx `FromRow` derive
//! - Model -> entity mapper
//! - `PgUserRepository` and an `InMemoryUserRepository` with the same
//!   uniqueness guarantees
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatdoor_db::{create_pool, ensure_schema, DatabaseConfig, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{InMemoryUserRepository, PgUserRepository};
