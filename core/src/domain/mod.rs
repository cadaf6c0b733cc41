//! Domain layer: entities shared across services and repositories.

pub mod entities;

pub use entities::{Claims, User, UserView};
