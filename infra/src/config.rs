//! Layered configuration loading.
//!
//! Sources, later ones winning:
//! 1. defaults for the detected [`Environment`]
//! 2. a TOML file (the given path, else `bengkel.<env>.toml` when present)
//! 3. `BENGKEL_*` environment variables, `__` separating nested keys
//!    (`BENGKEL_API__BASE_URL`, `BENGKEL_STORAGE__DIRECTORY`)
//!
//! `.env` is read first so its values take part in step 3.

use std::path::Path;

use ::config::{Config, Environment as EnvSource, File, FileFormat};
use bk_shared::config::{AppConfig, Environment};
use tracing::debug;

use crate::InfrastructureError;

pub const ENV_PREFIX: &str = "BENGKEL";

pub fn load_config(path: Option<&Path>) -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let defaults = AppConfig::for_environment(environment);

    let file = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::from(Path::new(environment.config_file()))
            .format(FileFormat::Toml)
            .required(false),
    };

    let config: AppConfig = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(file)
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    debug!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        "Configuration loaded"
    );
    Ok(config)
}
