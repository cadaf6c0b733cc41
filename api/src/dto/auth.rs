//! Authentication request and response payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use calc_core::domain::entities::user::UserView;
use calc_core::services::auth::AuthResponse;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    /// Must contain an uppercase letter, a lowercase letter and a digit.
    #[validate(length(min = 6, max = 128), custom = "validate_password_strength")]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email
    #[validate(length(min = 3, max = 120))]
    pub identifier: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Returned after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserView,
}

impl From<AuthResponse> for TokenResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            user: response.user,
        }
    }
}

fn validate_password_strength(password: &str) -> Result<(), validator::ValidationError> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(validator::ValidationError::new("missing_uppercase"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(validator::ValidationError::new("missing_lowercase"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(validator::ValidationError::new("missing_digit"));
    }
    Ok(())
}
