//! Durable string key-value storage, the backend of the credential store.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Minimal async key-value storage
///
/// Implementations must make `remove_items` all-or-nothing: after it
/// returns `Ok`, none of the keys are present; after it returns `Err`, the
/// caller may retry the whole call.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn set_item(&self, key: &str, value: String) -> Result<(), DomainError>;

    async fn remove_item(&self, key: &str) -> Result<(), DomainError>;

    /// Remove several keys in one write
    async fn remove_items(&self, keys: &[&str]) -> Result<(), DomainError>;
}
