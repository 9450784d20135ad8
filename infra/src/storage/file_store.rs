//! Key-value store backed by one JSON document.
//!
//! The document is a flat string map. Every mutation rewrites it through a
//! temporary file and a rename, so a multi-key removal lands in one write and
//! a crash never leaves a half-written document behind.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bk_core::errors::DomainError;
use bk_core::repositories::KeyValueStore;
use bk_shared::config::StorageConfig;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Document = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.document_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, DomainError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(io_error("read", &self.path, e)),
        };
        if raw.is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_slice(&raw).map_err(|e| {
            warn!(path = %self.path.display(), "Credential document is corrupted: {}", e);
            DomainError::storage(format!("corrupted document {}: {}", self.path.display(), e))
        })
    }

    async fn write_document(&self, document: &Document) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", &self.path, e))?;
        }

        let serialized = serde_json::to_vec_pretty(document)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, serialized)
            .await
            .map_err(|e| io_error("write", &temp_path, e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, e))?;

        debug!(path = %self.path.display(), keys = document.len(), "Credential document written");
        Ok(())
    }

    /// Apply `mutate` under the lock; writes only when it reports a change
    async fn update<F>(&self, mutate: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut Document) -> bool + Send,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if mutate(&mut document) {
            self.write_document(&document).await?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(action: &str, path: &Path, error: std::io::Error) -> DomainError {
    DomainError::storage(format!("failed to {} {}: {}", action, path.display(), error))
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), DomainError> {
        self.update(|document| {
            document.insert(key.to_string(), value);
            true
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<(), DomainError> {
        self.update(|document| document.remove(key).is_some()).await
    }

    async fn remove_items(&self, keys: &[&str]) -> Result<(), DomainError> {
        self.update(|document| {
            let before = document.len();
            for key in keys {
                document.remove(*key);
            }
            document.len() != before
        })
        .await
    }
}
