//! Postgres implementation of the UserRepository trait.
//!
//! Concrete user persistence using SQLx. Lookups report not-found in-band
//! as `Ok(None)`; only storage failures become errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use calc_core::domain::entities::user::User;
use calc_core::errors::{AuthError, DomainError};
use calc_core::repositories::UserRepository;

const UNIQUE_VIOLATION: &str = "23505";

/// Postgres implementation of `UserRepository`.
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new Postgres user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity.
    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {e}")))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Database(format!("Failed to get username: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {e}")))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::Database(format!("Failed to get is_active: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {e}")))?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE username = $1 OR email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, email, password_hash, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        // The unique indexes on username and email are the source of
        // truth for duplicates; a concurrent registration that wins the
        // race still surfaces as the duplicate error, not a storage
        // failure.
        sqlx::query(query)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    DomainError::Auth(AuthError::UserAlreadyExists)
                }
                _ => DomainError::Database(format!("Failed to create user: {e}")),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, is_active = $5, updated_at = $6
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        row.try_get::<bool, _>(0)
            .map_err(|e| DomainError::Database(format!("Failed to read exists flag: {e}")))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        row.try_get::<bool, _>(0)
            .map_err(|e| DomainError::Database(format!("Failed to read exists flag: {e}")))
    }
}
