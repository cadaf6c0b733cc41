//! Domain-specific error types for authentication and token operations.
//!
//! Authentication failures carry deliberately uninformative messages: the
//! externally visible kind never reveals whether an identifier exists or
//! why a presented token was rejected.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Login failed. Covers both unknown identifiers and wrong passwords.
    #[error("Invalid username/email or password")]
    InvalidCredentials,

    /// Session resolution failed. Covers invalid tokens, missing subjects,
    /// unknown identities and deactivated accounts.
    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("Username or email already registered")]
    UserAlreadyExists,
}

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signing failed. Wraps the underlying cause, which is never exposed
    /// to callers; typically a misconfiguration.
    #[error("Token creation failed")]
    CreationFailed,

    /// Verification failed. Expired, forged and structurally malformed
    /// tokens all map here.
    #[error("Invalid or expired token")]
    Invalid,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}
