//! Mapping from domain errors to HTTP responses.
//!
//! Authentication failures surface as the same generic payload regardless
//! of internal cause; no stack trace or internal error kind crosses the
//! trust boundary.

use actix_web::HttpResponse;

use calc_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Database(_) | DomainError::Internal { .. } => {
            log::error!("internal error: {error:?}")
        }
        _ => log::debug!("domain error: {error:?}"),
    }

    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => HttpResponse::Unauthorized().json(
            ErrorResponse::new("invalid_credentials", "Invalid username/email or password"),
        ),
        DomainError::Auth(AuthError::Unauthorized) | DomainError::Token(TokenError::Invalid) => {
            HttpResponse::Unauthorized()
                .json(ErrorResponse::new("unauthorized", "Invalid or expired token"))
        }
        DomainError::Auth(AuthError::UserAlreadyExists) => HttpResponse::Conflict().json(
            ErrorResponse::new("user_exists", "Username or email already registered"),
        ),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::ValidationErr(e) => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", e.to_string()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),
        DomainError::Token(TokenError::CreationFailed)
        | DomainError::Database(_)
        | DomainError::Internal { .. } => HttpResponse::InternalServerError().json(
            ErrorResponse::new("internal_error", "An internal error occurred"),
        ),
    }
}
