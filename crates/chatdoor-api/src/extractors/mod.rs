//! Axum extractors for request handling
//!
//! Custom extractors for form bodies and session authentication.

mod form;
mod session;

pub use form::FormOrJson;
pub use session::{session_token, SessionUser};
