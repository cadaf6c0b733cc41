//! Tests covering registration, login and session resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Duration;

use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::password::PasswordService;
use crate::services::token::{TokenConfig, TokenService};

const TEST_SECRET: &str = "test-secret";

fn service_with_repo() -> (Arc<MockUserRepository>, AuthService<MockUserRepository>) {
    let repository = Arc::new(MockUserRepository::new());
    let service = AuthService::new(
        repository.clone(),
        PasswordService::with_cost(4),
        TokenService::new(TokenConfig::new(TEST_SECRET)),
    );
    (repository, service)
}

// Issues tokens the service under test will accept
fn token_service() -> TokenService {
    TokenService::new(TokenConfig::new(TEST_SECRET))
}

#[tokio::test]
async fn test_register_then_login() {
    let (_, service) = service_with_repo();

    let user = service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();
    assert!(user.is_active);
    assert_ne!(user.password_hash, "Secr3t!pass");

    let response = service.login("alice", "Secr3t!pass").await.unwrap();
    assert_eq!(response.token_type, "bearer");
    assert_eq!(response.user.id, user.id);
    assert!(response.expires_in > 0);
}

#[tokio::test]
async fn test_login_by_email() {
    let (_, service) = service_with_repo();
    service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();

    let response = service
        .login("alice@example.com", "Secr3t!pass")
        .await
        .unwrap();
    assert_eq!(response.user.username, "alice");
}

#[tokio::test]
async fn test_login_enumeration_resistance() {
    let (_, service) = service_with_repo();
    service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();

    let unknown = service
        .login("nonexistent_user", "anything")
        .await
        .unwrap_err();
    let wrong_password = service.login("alice", "wrong_password").await.unwrap_err();

    assert!(matches!(
        unknown,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let (_, service) = service_with_repo();
    service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();

    let same_username = service
        .register("alice", "other@example.com", "Secr3t!pass")
        .await
        .unwrap_err();
    let same_email = service
        .register("bob", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap_err();

    assert!(matches!(
        same_username,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
    assert!(matches!(
        same_email,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
}

#[tokio::test]
async fn test_resolve_session_round_trip() {
    let (_, service) = service_with_repo();
    let user = service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();
    let response = service.login("alice", "Secr3t!pass").await.unwrap();

    let view = service
        .resolve_session(&response.access_token)
        .await
        .unwrap();
    assert_eq!(view.id, user.id);
    assert_eq!(view.username, "alice");

    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn test_resolve_session_rejects_deactivated_account() {
    let (repository, service) = service_with_repo();
    service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();
    let response = service.login("alice", "Secr3t!pass").await.unwrap();

    // Token is still valid, but liveness is re-checked on every resolution
    let mut user = repository
        .find_by_identifier("alice")
        .await
        .unwrap()
        .unwrap();
    user.deactivate();
    repository.update(user).await.unwrap();

    let err = service
        .resolve_session(&response.access_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_resolve_session_rejects_expired_token() {
    let (_, service) = service_with_repo();
    let user = service
        .register("alice", "alice@example.com", "Secr3t!pass")
        .await
        .unwrap();

    let expired = token_service()
        .issue(
            &user.id.to_string(),
            BTreeMap::new(),
            Some(Duration::seconds(-1)),
        )
        .unwrap();

    let err = service.resolve_session(&expired).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_resolve_session_rejects_unknown_identity() {
    let (_, service) = service_with_repo();

    let token = token_service()
        .issue(&uuid::Uuid::new_v4().to_string(), BTreeMap::new(), None)
        .unwrap();

    let err = service.resolve_session(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
}

#[tokio::test]
async fn test_resolve_session_rejects_missing_or_malformed_subject() {
    let (_, service) = service_with_repo();
    let tokens = token_service();

    let empty_subject = tokens.issue("", BTreeMap::new(), None).unwrap();
    let bad_subject = tokens.issue("not-a-uuid", BTreeMap::new(), None).unwrap();

    for token in [empty_subject, bad_subject] {
        let err = service.resolve_session(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
    }
}

#[tokio::test]
async fn test_resolve_session_rejects_garbage_token() {
    let (_, service) = service_with_repo();

    let err = service.resolve_session("not.a.token").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
}

// End-to-end scenario: register, login, resolve, deactivate, resolve again
#[tokio::test]
async fn test_full_session_lifecycle() {
    let (repository, service) = service_with_repo();

    let alice = service
        .register("alice", "alice@x.com", "Secr3t!1")
        .await
        .unwrap();

    let response = service.login("alice", "Secr3t!1").await.unwrap();
    let view = service
        .resolve_session(&response.access_token)
        .await
        .unwrap();
    assert_eq!(view.id, alice.id);

    let mut user = repository.find_by_id(alice.id).await.unwrap().unwrap();
    user.deactivate();
    repository.update(user).await.unwrap();

    let err = service
        .resolve_session(&response.access_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthorized)));
}
