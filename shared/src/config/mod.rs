//! Configuration module with concern-specific sub-modules
//!
//! - `api` - Remote API address, timeout and 401 policy
//! - `environment` - Environment detection and logging configuration
//! - `payment` - Hosted checkout URL and completion detection
//! - `storage` - Credential store namespace and location

pub mod api;
pub mod environment;
pub mod payment;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::ApiConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use payment::PaymentConfig;
pub use storage::StorageConfig;

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Remote API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Credential store configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Hosted payment configuration
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            payment: PaymentConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            payment: PaymentConfig::sandbox(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::new("https://api.bengkelconnect.id/api"),
            storage: StorageConfig::default(),
            payment: PaymentConfig::production(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load configuration defaults for the environment named in the process environment
    pub fn from_env() -> Self {
        Self::for_environment(Environment::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_uses_production_checkout() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert!(!config.payment.checkout_base_url.contains("sandbox"));
        assert!(config.api.base_url.starts_with("https://"));
    }

    #[test]
    fn test_staging_keeps_development_endpoints() {
        let config = AppConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = serde_json::from_str(r#"{"api": {"base_url": "http://localhost:9000/api"}}"#)
            .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.namespace, "@bengkel_app");
    }
}
