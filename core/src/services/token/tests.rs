//! Token service tests.

use std::collections::BTreeMap;

use chrono::Duration;
use serde_json::Value;

use crate::errors::{DomainError, TokenError};

use super::{TokenConfig, TokenService};

fn service() -> TokenService {
    TokenService::new(TokenConfig::new("test-secret"))
}

fn extra_username(username: &str) -> BTreeMap<String, Value> {
    let mut extra = BTreeMap::new();
    extra.insert(
        "username".to_string(),
        Value::String(username.to_string()),
    );
    extra
}

#[test]
fn test_issue_verify_round_trip() {
    let service = service();
    let token = service
        .issue("user-123", extra_username("alice"), None)
        .unwrap();

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.sub, "user-123");
    assert_eq!(claims.extra["username"], "alice");
}

#[test]
fn test_issue_uses_default_ttl() {
    let service = service();
    let token = service.issue("user-123", BTreeMap::new(), None).unwrap();

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, service.default_ttl().num_seconds());
}

#[test]
fn test_expired_token_rejected() {
    let service = service();
    let token = service
        .issue("user-123", BTreeMap::new(), Some(Duration::seconds(-1)))
        .unwrap();

    let err = service.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}

#[test]
fn test_tampered_signature_rejected_with_same_kind() {
    let service = service();
    let token = service.issue("user-123", BTreeMap::new(), None).unwrap();

    // Flip the last character of the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });
    assert_ne!(token, tampered);

    let err = service.verify(&tampered).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}

#[test]
fn test_malformed_tokens_rejected() {
    let service = service();

    for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "ey.ey.ey"] {
        let err = service.verify(garbage).unwrap_err();
        assert!(
            matches!(err, DomainError::Token(TokenError::Invalid)),
            "expected uniform rejection for {garbage:?}"
        );
    }
}

#[test]
fn test_token_from_other_secret_rejected() {
    let issuer = TokenService::new(TokenConfig::new("secret-a"));
    let verifier = TokenService::new(TokenConfig::new("secret-b"));

    let token = issuer.issue("user-123", BTreeMap::new(), None).unwrap();
    let err = verifier.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Invalid)));
}
