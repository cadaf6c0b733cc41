//! Request and response payloads.

pub mod auth;
pub mod calculator;
pub mod error;

pub use error::ErrorResponse;
