//! Authentication service module.
//!
//! Covers the full credential flow: registration, login (credential check
//! plus token issuance) and per-request session resolution.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthResponse, AuthService, SessionResolver};
