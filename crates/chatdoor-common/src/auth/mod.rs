//! Authentication utilities

mod clock;
mod jwt;
mod password;

pub use clock::{Clock, ManualClock, SystemClock};
pub use jwt::{SessionClaims, SessionIssuer};
pub use password::{CredentialHasher, DEFAULT_HASH_SECRET};
