use actix_web::HttpResponse;

use crate::middleware::auth::AuthenticatedUser;

/// Handler for GET /auth/me
///
/// Returns the identity resolved for the presented bearer token. The
/// session was established by the auth middleware; this handler only
/// echoes the view.
pub async fn me(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
