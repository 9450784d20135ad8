//! Error type returned by every service call

use bk_shared::utils::validation::ValidationErrors;
use bk_shared::{ApiError, FALLBACK_MESSAGE};
use thiserror::Error;

/// Shown when a protected action runs without a session
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesi Anda telah berakhir. Silakan login kembali.";

#[derive(Error, Debug)]
pub enum DomainError {
    /// Normalized failure from the HTTP access layer
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 2xx response whose status flag was false
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Success envelope without the payload the operation needs
    #[error("Response missing {context}")]
    MissingData { context: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not authenticated")]
    NotAuthenticated,
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    pub fn missing(context: impl Into<String>) -> Self {
        DomainError::MissingData {
            context: context.into(),
        }
    }

    pub fn rejected(message: Option<String>) -> Self {
        DomainError::Rejected {
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        }
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            DomainError::Api(error) => Some(error),
            _ => None,
        }
    }

    /// True when the server answered 401
    pub fn is_unauthorized(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_unauthorized)
    }

    /// Best message for the single alert shown to the user
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Api(error) => error.message.clone(),
            DomainError::Rejected { message } => message.clone(),
            DomainError::Validation(errors) => errors.to_string(),
            DomainError::NotAuthenticated => SESSION_EXPIRED_MESSAGE.to_string(),
            DomainError::MissingData { .. }
            | DomainError::Storage { .. }
            | DomainError::Serialization(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}
