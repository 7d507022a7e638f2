//! Configuration loading
//!
//! Sources, lowest precedence first:
//! 1. Built-in preset for the detected environment
//! 2. `lightbnb.{toml,json,yaml}` in the working directory (optional)
//! 3. The per-environment file, e.g. `lightbnb.production.toml` (optional)
//! 4. `LIGHTBNB__SECTION__KEY` environment variables
//! 5. `DATABASE_URL`

use config::{Config, File};
use lb_shared::{AppConfig, Environment};

use crate::InfrastructureError;

const ENV_PREFIX: &str = "LIGHTBNB";

/// Load configuration for the environment named by `LIGHTBNB_ENV`
///
/// Reads a `.env` file first when one is present.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    load_config_for(environment, std::env::var("DATABASE_URL").ok())
}

/// Load configuration for an explicit environment
pub fn load_config_for(
    environment: Environment,
    database_url: Option<String>,
) -> Result<AppConfig, InfrastructureError> {
    let defaults = AppConfig::for_environment(environment);

    let mut builder = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name("lightbnb").required(false))
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    let mut config: AppConfig = builder.build()?.try_deserialize()?;
    config.environment = environment;

    tracing::debug!(environment = %config.environment, "Configuration loaded");
    Ok(config)
}
