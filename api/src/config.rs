//! Configuration loading
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults for the environment
//! 2. `config/{environment}.toml`, if present
//! 3. `GK__`-prefixed environment variables, e.g. `GK__SERVER__PORT=9000`
//!    or `GK__ABUSE__SIGN_IN__MAX_WRONG_RETRY=3`

use anyhow::Context;
use config::{Config, File};
use gk_shared::{AppConfig, Environment, LoggingConfig};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "GK";

/// Load, merge and validate the application configuration
pub fn load() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    load_for(Environment::from_env())
}

/// Load the configuration for an explicit environment
pub fn load_for(environment: Environment) -> anyhow::Result<AppConfig> {
    let defaults = match environment {
        Environment::Production => AppConfig::production(),
        _ => AppConfig {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..AppConfig::development()
        },
    };

    let merged = Config::builder()
        .add_source(Config::try_from(&defaults).context("Failed to serialize default configuration")?)
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    let app_config: AppConfig = merged
        .try_deserialize()
        .context("Failed to parse configuration")?;

    app_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    Ok(app_config)
}
