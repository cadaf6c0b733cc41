use actix_web::{web, HttpResponse};
use validator::Validate;

use calc_core::repositories::UserRepository;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /auth/login
///
/// Verifies credentials and returns a signed bearer token. Unknown
/// identifiers and wrong passwords produce the same 401 response.
///
/// # Responses
/// - 200 OK: `{access_token, token_type, expires_in, user}`
/// - 400 Bad Request: validation failure
/// - 401 Unauthorized: invalid credentials
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", errors.to_string()));
    }

    match state
        .auth_service
        .login(&request.identifier, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(TokenResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
