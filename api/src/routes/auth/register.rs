use actix_web::{web, HttpResponse};
use validator::Validate;

use calc_core::repositories::UserRepository;

use crate::dto::auth::RegisterRequest;
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /auth/register
///
/// Creates a new user account. The password is digested before it ever
/// reaches the persistence layer.
///
/// # Responses
/// - 201 Created: user view (no password digest)
/// - 400 Bad Request: validation failure
/// - 409 Conflict: username or email already registered
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(user.to_view()),
        Err(error) => handle_domain_error(error),
    }
}
