//! Credential store trait: durable home of the bearer token and the cached user.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Persistent storage for exactly two values: the token and the user.
///
/// Storage faults propagate as `DomainError::Storage`; nothing here retries.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn save_token(&self, token: &str) -> Result<(), DomainError>;

    /// `Ok(None)` when no token is stored
    async fn get_token(&self) -> Result<Option<String>, DomainError>;

    async fn remove_token(&self) -> Result<(), DomainError>;

    async fn save_user(&self, user: &User) -> Result<(), DomainError>;

    /// `Ok(None)` when no user is stored; a corrupted value is an error
    async fn get_user(&self) -> Result<Option<User>, DomainError>;

    async fn remove_user(&self) -> Result<(), DomainError>;

    /// Remove both keys in one write
    async fn clear_all(&self) -> Result<(), DomainError>;

    /// Token and user, only when both are present
    async fn load_session(&self) -> Result<Option<(String, User)>, DomainError> {
        let token = self.get_token().await?;
        let user = self.get_user().await?;
        Ok(token.zip(user))
    }
}
