//! Credential store over any key-value backend, with every key under one
//! namespace prefix.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::storage::{KeyValueStore, MemoryKeyValueStore};

use super::r#trait::CredentialStore;

pub const DEFAULT_NAMESPACE: &str = "@bengkel_app";

/// Stores the token as-is and the user as a JSON string
pub struct NamespacedCredentialStore<K: KeyValueStore> {
    backend: K,
    token_key: String,
    user_key: String,
}

/// Credential store that forgets everything when dropped
pub type MemoryCredentialStore = NamespacedCredentialStore<MemoryKeyValueStore>;

impl<K: KeyValueStore> NamespacedCredentialStore<K> {
    pub fn new(backend: K, namespace: &str) -> Self {
        Self {
            backend,
            token_key: format!("{}:token", namespace),
            user_key: format!("{}:user", namespace),
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }
}

impl MemoryCredentialStore {
    pub fn in_memory() -> Self {
        Self::new(MemoryKeyValueStore::new(), DEFAULT_NAMESPACE)
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[async_trait]
impl<K: KeyValueStore> CredentialStore for NamespacedCredentialStore<K> {
    async fn save_token(&self, token: &str) -> Result<(), DomainError> {
        self.backend.set_item(&self.token_key, token.to_string()).await?;
        debug!(key = %self.token_key, "Token saved");
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, DomainError> {
        self.backend.get_item(&self.token_key).await
    }

    async fn remove_token(&self) -> Result<(), DomainError> {
        self.backend.remove_item(&self.token_key).await
    }

    async fn save_user(&self, user: &User) -> Result<(), DomainError> {
        let serialized = serde_json::to_string(user)?;
        self.backend.set_item(&self.user_key, serialized).await?;
        debug!(key = %self.user_key, user_id = user.id, "User saved");
        Ok(())
    }

    async fn get_user(&self) -> Result<Option<User>, DomainError> {
        match self.backend.get_item(&self.user_key).await? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                warn!(key = %self.user_key, "Stored user could not be decoded: {}", e);
                DomainError::from(e)
            }),
            None => Ok(None),
        }
    }

    async fn remove_user(&self) -> Result<(), DomainError> {
        self.backend.remove_item(&self.user_key).await
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        self.backend
            .remove_items(&[self.token_key.as_str(), self.user_key.as_str()])
            .await?;
        debug!("Credential store cleared");
        Ok(())
    }
}
