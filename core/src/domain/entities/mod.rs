//! Domain entities.

pub mod token;
pub mod user;

pub use token::Claims;
pub use user::{User, UserView};
