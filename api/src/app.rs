//! Application factory wiring routes, middleware and shared state.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use calc_core::repositories::UserRepository;
use calc_core::services::auth::SessionResolver;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, me::me, register::register, AppState};
use crate::routes::calculator;

/// Create and configure the application with all dependencies.
///
/// The session resolver is registered as separate app data so the auth
/// middleware can resolve tokens without knowing the concrete repository
/// type.
pub fn create_app<U>(
    state: web::Data<AppState<U>>,
    resolver: web::Data<Arc<dyn SessionResolver>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(state)
        .app_data(resolver)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<U>))
                .route("/login", web::post().to(login::<U>))
                .route("/me", web::get().to(me).wrap(JwtAuth::new())),
        )
        // Calculator routes
        .route("/add", web::post().to(calculator::add))
        .route("/subtract", web::post().to(calculator::subtract))
        .route("/multiply", web::post().to(calculator::multiply))
        .route("/divide", web::post().to(calculator::divide))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
