//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthResponse, AuthService, SessionResolver};
pub use password::PasswordService;
pub use token::{TokenConfig, TokenService};
