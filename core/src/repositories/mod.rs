//! Repository trait definitions and in-memory test doubles.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
