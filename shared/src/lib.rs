//! Shared utilities and common types for the Bengkel Connect client
//!
//! This crate provides common functionality used across the client crates:
//! - Configuration types
//! - The normalized API error and the canonical response envelope
//! - Utility functions (phone, validation, MIME inference, masking)
//! - Common type definitions (coordinates, money, lenient numbers)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, Environment, LogFormat, LoggingConfig, PaymentConfig, StorageConfig,
};
pub use errors::{ApiError, ApiErrorKind, FieldErrors, FALLBACK_MESSAGE};
pub use types::{Coordinate, Envelope, Rupiah};
pub use utils::{mime, phone, validation};
