//! User repository trait defining the interface for user persistence.
//!
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers. Lookups
//! are read-only and report "not found" in-band as `Ok(None)`; errors are
//! reserved for storage failures.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user whose username or email equals `identifier`.
    ///
    /// Both columns are unique, so at most one row can match.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username or email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Duplicate username/email or storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user.
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError)` - User not found or storage failure
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a username is already taken.
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether an email is already registered.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
