//! Token service module for JWT management.
//!
//! Handles issuance and verification of signed, time-limited bearer
//! tokens. There is deliberately no way to decode a token without
//! verifying its signature.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenConfig;
pub use service::TokenService;
