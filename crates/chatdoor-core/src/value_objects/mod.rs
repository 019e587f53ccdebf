//! Value objects - immutable types that represent domain concepts

mod username;

pub use username::Username;
