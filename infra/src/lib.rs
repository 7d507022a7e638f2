//! # Infrastructure Layer
//!
//! Concrete implementations behind the LightBnB repository interfaces.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: PostgreSQL connection pool and repositories using SQLx
//! - **Fixtures**: Loader for the JSON property fixture mapping
//! - **Settings**: Layered configuration from defaults, files and environment
//! - **Telemetry**: `tracing` subscriber installation

// Re-export core types for convenience
pub use lb_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Property fixture loading
pub mod fixtures;

/// Configuration loading
pub mod settings;

/// Tracing subscriber setup
pub mod telemetry;

use lb_core::repositories::InMemoryPropertyRepository;
use lb_core::services::BookingService;
use lb_shared::AppConfig;
use std::sync::Arc;

use database::postgres::{
    PostgresPropertyRepository, PostgresReservationRepository, PostgresUserRepository,
};
use database::DatabasePool;

pub use settings::{load_config, load_config_for};
pub use telemetry::init_tracing;

/// Booking service wired to PostgreSQL and the property fixture mapping
pub type PgBookingService = BookingService<
    PostgresUserRepository,
    PostgresReservationRepository,
    PostgresPropertyRepository,
>;

/// Infrastructure service container
///
/// Owns the connection pool for the lifetime of the process; call
/// [`InfrastructureServices::shutdown`] before exiting.
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Shared PostgreSQL pool
    pub pool: DatabasePool,
    /// In-memory property fixture mapping
    pub fixtures: InMemoryPropertyRepository,
    /// The data access operations
    pub booking: PgBookingService,
}

impl InfrastructureServices {
    /// Wire repositories around an existing pool and fixture mapping
    pub fn new(pool: DatabasePool, fixtures: InMemoryPropertyRepository) -> Self {
        let pg = pool.get_pool().clone();
        let booking = BookingService::new(
            Arc::new(PostgresUserRepository::new(pg.clone())),
            Arc::new(PostgresReservationRepository::new(pg.clone())),
            Arc::new(PostgresPropertyRepository::new(pg, fixtures.clone())),
        );

        Self {
            pool,
            fixtures,
            booking,
        }
    }

    /// Close every pooled connection
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - The PostgreSQL connection pool
/// - The property fixture mapping
/// - The booking service on top of both
pub async fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!(environment = %config.environment, "Initializing infrastructure services...");

    let fixtures = fixtures::load_property_fixtures(&config.fixtures).await?;
    let pool = DatabasePool::new(config.database.clone()).await?;

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices::new(pool, fixtures))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Layered configuration could not be built or deserialized
    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Fixture file could not be read
    #[error("Fixture I/O error: {0}")]
    FixtureIo(#[from] std::io::Error),

    /// Fixture file is not valid JSON in the expected shape
    #[error("Fixture format error: {0}")]
    FixtureFormat(#[from] serde_json::Error),
}
