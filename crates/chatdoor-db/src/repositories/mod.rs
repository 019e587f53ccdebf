//! Repository implementations
//!
//! Implementations of the user directory trait defined in chatdoor-core.

mod error;
mod memory;
mod user;

pub use memory::InMemoryUserRepository;
pub use user::PgUserRepository;
