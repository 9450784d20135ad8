//! Durable credential storage

mod file_store;

pub use file_store::FileKeyValueStore;

use bk_core::repositories::NamespacedCredentialStore;
use bk_shared::config::StorageConfig;

/// Credential store persisted in the namespace document on disk
pub type FileCredentialStore = NamespacedCredentialStore<FileKeyValueStore>;

/// Credential store for `config`'s namespace and directory
pub fn open_credential_store(config: &StorageConfig) -> FileCredentialStore {
    NamespacedCredentialStore::new(FileKeyValueStore::from_config(config), &config.namespace)
}
