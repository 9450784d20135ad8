//! Tracing subscriber installation

use bk_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::InfrastructureError;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a subscriber was already installed; that is not an error.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, InfrastructureError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| InfrastructureError::Telemetry(format!("invalid log level {:?}: {}", config.level, e)))?,
    };

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Compact,
        };
        let _ = init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }

    #[test]
    fn test_invalid_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "bengkel=loud".to_string(),
            format: LogFormat::Json,
        };
        assert!(matches!(init_tracing(&config), Err(InfrastructureError::Telemetry(_))));
    }
}
