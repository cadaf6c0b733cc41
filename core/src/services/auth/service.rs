//! Authentication and session resolution service.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserView};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Successful login payload: a bearer token plus the resolved identity view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserView,
}

/// Orchestrates credential verification, token issuance and per-request
/// session resolution.
///
/// The service is stateless apart from its injected collaborators; every
/// call receives its own borrowed repository handle and nothing is cached
/// across requests.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
    password_service: PasswordService,
    token_service: TokenService,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(
        repository: Arc<U>,
        password_service: PasswordService,
        token_service: TokenService,
    ) -> Self {
        Self {
            repository,
            password_service,
            token_service,
        }
    }

    /// Registers a new user.
    ///
    /// The password digest is computed here, before anything reaches the
    /// persistence layer; the plaintext is dropped on return.
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted user
    /// * `Err(AuthError::UserAlreadyExists)` - Username or email taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<User> {
        if self.repository.exists_by_username(username).await?
            || self.repository.exists_by_email(email).await?
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let digest = self.password_service.hash(password)?;
        let user = User::new(username.to_string(), email.to_string(), digest);
        let created = self.repository.create(user).await?;

        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown identifiers and wrong passwords are indistinguishable to the
    /// caller: both yield [`AuthError::InvalidCredentials`].
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.repository.find_by_identifier(identifier).await? {
            Some(user) => user,
            None => {
                tracing::debug!("login rejected: unknown identifier");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_service.verify(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut extra = BTreeMap::new();
        extra.insert("username".to_string(), Value::String(user.username.clone()));
        let access_token = self
            .token_service
            .issue(&user.id.to_string(), extra, None)?;

        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(AuthResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.token_service.default_ttl().num_seconds(),
            user: user.to_view(),
        })
    }

    /// Resolves a bearer token to a live identity.
    ///
    /// Steps run strictly in order: signature/expiry verification, subject
    /// extraction, identity lookup, liveness check. Liveness is re-checked
    /// on every call; a valid token for a deactivated account does not
    /// establish a session. All failures collapse to
    /// [`AuthError::Unauthorized`]; the internal cause is logged at debug
    /// level only.
    pub async fn resolve_session(&self, token: &str) -> DomainResult<UserView> {
        let claims = match self.token_service.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("session rejected: {e}");
                return Err(AuthError::Unauthorized.into());
            }
        };

        if claims.sub.is_empty() {
            tracing::debug!("session rejected: token missing subject");
            return Err(AuthError::Unauthorized.into());
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!("session rejected: malformed subject");
            DomainError::Auth(AuthError::Unauthorized)
        })?;

        let user = match self.repository.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                tracing::debug!(%user_id, "session rejected: identity not found");
                return Err(AuthError::Unauthorized.into());
            }
        };

        if !user.is_active {
            tracing::debug!(%user_id, "session rejected: account deactivated");
            return Err(AuthError::Unauthorized.into());
        }

        Ok(user.to_view())
    }
}

/// Object-safe session resolution, used by the HTTP middleware for dynamic
/// dispatch over the concrete repository type.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolves a bearer token to a live identity view.
    async fn resolve_session(&self, token: &str) -> DomainResult<UserView>;
}

#[async_trait]
impl<U: UserRepository> SessionResolver for AuthService<U> {
    async fn resolve_session(&self, token: &str) -> DomainResult<UserView> {
        AuthService::resolve_session(self, token).await
    }
}
