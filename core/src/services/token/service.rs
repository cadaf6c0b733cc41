//! JWT issuance and verification.

use std::collections::BTreeMap;

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Service issuing and verifying signed bearer tokens.
///
/// All verification failures collapse to [`TokenError::Invalid`]: an
/// expired token, a forged signature and a structurally malformed string
/// are indistinguishable to the caller.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from immutable configuration.
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        // Expiry is compared against the verifier's own clock with no
        // grace period.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Default TTL applied when [`issue`](Self::issue) is called without an
    /// explicit one.
    pub fn default_ttl(&self) -> Duration {
        self.config.access_token_ttl
    }

    /// Issues a signed token for `subject`, merging `extra` claims with the
    /// computed expiry.
    ///
    /// # Returns
    /// * `Ok(token)` - compact encoded token string
    /// * `Err(TokenError::CreationFailed)` - signing failed; the underlying
    ///   cause is logged, not returned
    pub fn issue(
        &self,
        subject: &str,
        extra: BTreeMap<String, Value>,
        ttl: Option<Duration>,
    ) -> DomainResult<String> {
        let claims = Claims::new(subject, extra, ttl.unwrap_or(self.config.access_token_ttl));
        let header = Header::new(self.config.algorithm);

        encode(&header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("token signing failed: {e}");
            DomainError::Token(TokenError::CreationFailed)
        })
    }

    /// Verifies signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {e}");
                DomainError::Token(TokenError::Invalid)
            })
    }
}
