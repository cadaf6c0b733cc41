//! # Calc Core
//!
//! Core business logic and domain layer for the calculator API backend.
//! This crate contains domain entities, the authentication services,
//! repository interfaces, the arithmetic operations and error types.

pub mod domain;
pub mod errors;
pub mod operations;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, User, UserView};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    AuthResponse, AuthService, PasswordService, SessionResolver, TokenConfig, TokenService,
};
