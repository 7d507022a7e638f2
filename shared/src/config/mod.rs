//! Configuration module
//!
//! Configuration is split by concern:
//! - `database` - PostgreSQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `fixtures` - In-memory property fixture source

pub mod database;
pub mod environment;
pub mod fixtures;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use fixtures::FixtureConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Property fixture configuration
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Configuration preset for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        let database = match environment {
            Environment::Development => DatabaseConfig::default().with_logging(true),
            Environment::Staging => DatabaseConfig::default(),
            Environment::Production => DatabaseConfig::default().with_max_connections(50),
        };

        Self {
            environment,
            database,
            logging: LoggingConfig::for_environment(environment),
            fixtures: FixtureConfig::default(),
        }
    }
}
