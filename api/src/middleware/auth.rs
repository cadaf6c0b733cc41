//! Bearer-token authentication middleware for protected endpoints.
//!
//! Extracts the token from the Authorization header and resolves it to a
//! live identity through the core session resolver; the resolved view is
//! injected into request extensions for handlers to extract. Every failure
//! surfaces as the same generic unauthorized response.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;

use calc_core::domain::entities::user::UserView;
use calc_core::services::auth::SessionResolver;

/// Resolved identity attached to an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserView);

/// Authentication middleware factory.
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Authentication middleware service.
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(ErrorUnauthorized("Invalid or expired token")),
            };

            let resolver = match req.app_data::<web::Data<Arc<dyn SessionResolver>>>() {
                Some(resolver) => resolver.clone(),
                None => return Err(ErrorUnauthorized("Authentication not configured")),
            };

            match resolver.resolve_session(&token).await {
                Ok(view) => {
                    req.extensions_mut().insert(AuthenticatedUser(view));
                }
                // Internal cause is logged at the service layer; the
                // caller only ever sees the generic message.
                Err(_) => return Err(ErrorUnauthorized("Invalid or expired token")),
            }

            service.call(req).await
        })
    }
}

/// Extracts a Bearer token from the Authorization header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
