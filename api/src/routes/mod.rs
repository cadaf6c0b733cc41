//! Route handlers.

pub mod auth;
pub mod calculator;

pub use auth::AppState;
