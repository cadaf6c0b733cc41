//! Authentication routes: registration, login and the current-user
//! endpoint.

pub mod login;
pub mod me;
pub mod register;

use std::sync::Arc;

use calc_core::repositories::UserRepository;
use calc_core::services::auth::AuthService;

/// Shared application state injected into handlers.
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}

impl<U: UserRepository> AppState<U> {
    pub fn new(auth_service: Arc<AuthService<U>>) -> Self {
        Self { auth_service }
    }
}
