//! File-backed credential store

use bk_core::domain::entities::user::{Role, User};
use bk_core::repositories::{CredentialStore, KeyValueStore};
use bk_core::DomainError;
use bk_infra::{open_credential_store, FileKeyValueStore};
use bk_shared::config::StorageConfig;
use serde_json::{json, Value};

fn sample_user() -> User {
    serde_json::from_value(json!({
        "id": 5,
        "nama": "Sari",
        "alamat": "Jl. Melati 3",
        "email": "sari@mail.com",
        "no_telp": "081311112222",
        "role": "bengkel",
        "foto": "https://cdn.example.id/sari.png",
        "bengkel": { "id": 7, "nama": "Bengkel Sari", "verifikasi": 1 },
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let user = sample_user();

    {
        let store = open_credential_store(&config);
        store.save_token("abc").await.unwrap();
        store.save_user(&user).await.unwrap();
    }

    let reopened = open_credential_store(&config);
    assert_eq!(reopened.get_token().await.unwrap(), Some("abc".to_string()));
    assert_eq!(reopened.get_user().await.unwrap(), Some(user.clone()));
    assert_eq!(
        reopened.load_session().await.unwrap(),
        Some(("abc".to_string(), user))
    );
}

#[tokio::test]
async fn test_document_layout() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let store = open_credential_store(&config);

    store.save_token("abc").await.unwrap();
    store.save_user(&User::new(1, "Budi", "a@b.com", Role::Pelanggan)).await.unwrap();

    let raw = std::fs::read_to_string(config.document_path()).unwrap();
    let document: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["@bengkel_app:token"], json!("abc"));
    let user: Value = serde_json::from_str(document["@bengkel_app:user"].as_str().unwrap()).unwrap();
    assert_eq!(user["nama"], json!("Budi"));
}

#[tokio::test]
async fn test_clear_all_removes_both_keys() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let store = open_credential_store(&config);
    store.save_token("abc").await.unwrap();
    store.save_user(&sample_user()).await.unwrap();

    store.clear_all().await.unwrap();

    assert_eq!(store.get_token().await.unwrap(), None);
    assert_eq!(store.get_user().await.unwrap(), None);
    let raw = std::fs::read_to_string(config.document_path()).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&raw).unwrap(), json!({}));
}

#[tokio::test]
async fn test_namespaces_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let first = StorageConfig::new(dir.path());
    let second = StorageConfig {
        namespace: "@other".to_string(),
        ..StorageConfig::new(dir.path())
    };

    open_credential_store(&first).save_token("one").await.unwrap();
    open_credential_store(&second).save_token("two").await.unwrap();

    assert_eq!(open_credential_store(&first).get_token().await.unwrap(), Some("one".to_string()));
    assert_eq!(open_credential_store(&second).get_token().await.unwrap(), Some("two".to_string()));
}

#[tokio::test]
async fn test_missing_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path().join("nested").join("store.json"));

    store.set_item("k", "v".to_string()).await.unwrap();

    assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
    assert!(store.path().exists());
}

#[tokio::test]
async fn test_corrupted_document_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = FileKeyValueStore::new(&path);

    assert!(matches!(store.get_item("k").await, Err(DomainError::Storage { .. })));
}

#[tokio::test]
async fn test_concurrent_writes_are_serialized() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(FileKeyValueStore::new(dir.path().join("store.json")));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.set_item(&format!("key{}", i), i.to_string()).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for i in 0..10 {
        assert_eq!(store.get_item(&format!("key{}", i)).await.unwrap(), Some(i.to_string()));
    }
}
