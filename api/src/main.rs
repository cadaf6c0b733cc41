use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use calc_api::app::create_app;
use calc_api::routes::auth::AppState;
use calc_core::services::auth::{AuthService, SessionResolver};
use calc_core::services::password::PasswordService;
use calc_core::services::token::TokenService;
use calc_infra::config::AppConfig;
use calc_infra::database::{DatabasePool, PgUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting calculator API server");

    // Configuration is loaded once and stays immutable for the process
    // lifetime
    let config = AppConfig::from_env()?;
    let bind_address = format!("{}:{}", config.host, config.port);

    let pool = DatabasePool::new(&config.database).await?;
    pool.health_check().await?;

    let repository = Arc::new(PgUserRepository::new(pool.pool().clone()));
    let auth_service = Arc::new(AuthService::new(
        repository,
        PasswordService::new(),
        TokenService::new(config.jwt.to_token_config()?),
    ));
    let resolver: Arc<dyn SessionResolver> = auth_service.clone();

    let state = web::Data::new(AppState::new(auth_service));
    let resolver = web::Data::new(resolver);

    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone(), resolver.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
