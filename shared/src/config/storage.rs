//! Credential store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and under which namespace the session token and user are persisted
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Key prefix shared by every persisted value
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Directory holding the namespace document
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            directory: default_directory(),
        }
    }
}

impl StorageConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Key under which the bearer token is stored
    pub fn token_key(&self) -> String {
        format!("{}:token", self.namespace)
    }

    /// Key under which the serialized user is stored
    pub fn user_key(&self) -> String {
        format!("{}:user", self.namespace)
    }

    /// Path of the document backing this namespace
    pub fn document_path(&self) -> PathBuf {
        let file_name: String = self
            .namespace
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.directory.join(format!("{}.json", file_name))
    }
}

fn default_namespace() -> String {
    String::from("@bengkel_app")
}

fn default_directory() -> PathBuf {
    PathBuf::from(".bengkel")
}
