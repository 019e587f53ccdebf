//! Model to entity mappers

mod user;
