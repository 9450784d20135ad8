//! Tests for the namespaced credential store

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;
use crate::repositories::storage::{KeyValueStore, MemoryKeyValueStore};

use super::{CredentialStore, MemoryCredentialStore, NamespacedCredentialStore};

fn sample_user() -> User {
    serde_json::from_value(json!({
        "id": 1,
        "nama": "Budi",
        "alamat": "Jl. Merdeka 1",
        "email": "a@b.com",
        "no_telp": "081234567890",
        "role": "pelanggan",
        "poin": 120
    }))
    .unwrap()
}

#[tokio::test]
async fn test_token_lifecycle() {
    let store = MemoryCredentialStore::in_memory();
    assert_eq!(store.get_token().await.unwrap(), None);

    store.save_token("abc").await.unwrap();
    assert_eq!(store.get_token().await.unwrap(), Some("abc".to_string()));

    store.remove_token().await.unwrap();
    assert_eq!(store.get_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_user_round_trip() {
    let store = MemoryCredentialStore::in_memory();
    let user = sample_user();

    store.save_user(&user).await.unwrap();
    assert_eq!(store.get_user().await.unwrap(), Some(user));

    store.remove_user().await.unwrap();
    assert_eq!(store.get_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_clear_all_removes_both_keys() {
    let store = MemoryCredentialStore::in_memory();
    store.save_token("abc").await.unwrap();
    store.save_user(&sample_user()).await.unwrap();

    store.clear_all().await.unwrap();

    assert_eq!(store.get_token().await.unwrap(), None);
    assert_eq!(store.get_user().await.unwrap(), None);
    assert!(store.backend().is_empty().await);
}

#[tokio::test]
async fn test_load_session_requires_both_values() {
    let store = MemoryCredentialStore::in_memory();
    store.save_token("abc").await.unwrap();
    assert_eq!(store.load_session().await.unwrap(), None);

    let user = User::new(5, "Sari", "sari@mail.com", Role::Bengkel);
    store.save_user(&user).await.unwrap();
    assert_eq!(
        store.load_session().await.unwrap(),
        Some(("abc".to_string(), user))
    );
}

#[tokio::test]
async fn test_keys_are_namespaced() {
    let backend = MemoryKeyValueStore::new();
    let store = NamespacedCredentialStore::new(backend.clone(), "@test");
    store.save_token("t").await.unwrap();

    assert_eq!(store.token_key(), "@test:token");
    assert_eq!(backend.get_item("@test:token").await.unwrap(), Some("t".to_string()));
}

#[tokio::test]
async fn test_corrupted_user_is_an_error() {
    let backend = MemoryKeyValueStore::new();
    backend
        .set_item("@bengkel_app:user", "{not json".to_string())
        .await
        .unwrap();
    let store = NamespacedCredentialStore::new(backend, "@bengkel_app");

    assert!(matches!(store.get_user().await, Err(DomainError::Serialization(_))));
}

struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::storage("read failed"))
    }

    async fn set_item(&self, _key: &str, _value: String) -> Result<(), DomainError> {
        Err(DomainError::storage("write failed"))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::storage("write failed"))
    }

    async fn remove_items(&self, _keys: &[&str]) -> Result<(), DomainError> {
        Err(DomainError::storage("write failed"))
    }
}

#[tokio::test]
async fn test_storage_faults_propagate() {
    let store = NamespacedCredentialStore::new(BrokenStore, "@bengkel_app");
    assert!(matches!(store.save_token("abc").await, Err(DomainError::Storage { .. })));
    assert!(matches!(store.get_user().await, Err(DomainError::Storage { .. })));
    assert!(matches!(store.clear_all().await, Err(DomainError::Storage { .. })));
}
