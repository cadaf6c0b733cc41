//! # Calc Infra
//!
//! Infrastructure layer: Postgres implementations of the core repository
//! traits, connection pool management and environment-based configuration.

pub mod config;
pub mod database;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub use config::AppConfig;
pub use database::{DatabasePool, PgUserRepository};
