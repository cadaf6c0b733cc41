//! Token claims for JWT-based authentication.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default access token lifetime (30 minutes)
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Claims structure for the JWT payload.
///
/// `extra` carries arbitrary application-supplied claims and is flattened
/// into the payload next to the registered claims, so `{"username": ...}`
/// ends up as a top-level claim on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,

    /// Additional application-supplied claims
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Claims {
    /// Creates claims for `subject` expiring `ttl` from now.
    ///
    /// A negative `ttl` produces already-expired claims; the token service
    /// will sign them, and verification will reject them.
    pub fn new(subject: impl Into<String>, extra: BTreeMap<String, Value>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            extra,
        }
    }

    /// Checks whether the claims have expired against the local clock.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expiry_ahead_of_issuance() {
        let claims = Claims::new("user-1", BTreeMap::new(), Duration::minutes(30));

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let claims = Claims::new("user-1", BTreeMap::new(), Duration::seconds(-1));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_extra_claims_flatten_to_top_level() {
        let mut extra = BTreeMap::new();
        extra.insert("username".to_string(), Value::String("alice".to_string()));
        let claims = Claims::new("user-1", extra, Duration::minutes(5));

        let json: Value = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["sub"], "user-1");

        let decoded: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, claims);
    }
}
