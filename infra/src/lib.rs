//! # Infrastructure Layer
//!
//! Concrete implementations behind the seams defined in `bk_core`:
//!
//! - **HTTP**: [`HttpApiClient`], the reqwest-based access layer with bearer
//!   auth, error normalization and the 401 session teardown
//! - **Storage**: [`FileKeyValueStore`], a single JSON document per namespace
//!   written atomically
//! - **Configuration**: layered loading of [`bk_shared::AppConfig`]
//! - **Telemetry**: tracing subscriber installation
//! - **Context**: [`ClientContext`], built once at startup and passed by
//!   reference to every consumer

pub use bk_core::errors::*;

pub mod config;
pub mod context;
pub mod http;
pub mod storage;
pub mod telemetry;

pub use context::{ClientContext, Services};
pub use http::HttpApiClient;
pub use storage::{open_credential_store, FileCredentialStore, FileKeyValueStore};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber error
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::storage(error.to_string())
    }
}
