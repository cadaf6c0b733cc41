//! Token service configuration.

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_TTL_MINUTES;

/// Immutable signing configuration.
///
/// Constructed once at process start and injected into the
/// [`TokenService`](super::TokenService); nothing mutates it at runtime.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for symmetric signing
    pub secret: String,

    /// Signing algorithm (HS256 by default)
    pub algorithm: Algorithm,

    /// Default access token time-to-live
    pub access_token_ttl: Duration,
}

impl TokenConfig {
    /// Creates a configuration with the given secret and defaults for
    /// everything else.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::minutes(DEFAULT_ACCESS_TOKEN_TTL_MINUTES),
        }
    }

    /// Overrides the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Overrides the default token lifetime, in minutes.
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl = Duration::minutes(minutes);
        self
    }
}
