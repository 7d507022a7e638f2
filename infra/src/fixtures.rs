//! Property fixture loading
//!
//! The fixture file is a JSON object keyed by property id, the same shape as
//! the static `properties.json` seed data.

use std::path::Path;

use lb_core::repositories::InMemoryPropertyRepository;
use lb_shared::FixtureConfig;

use crate::InfrastructureError;

/// Build the fixture mapping described by `config`
///
/// Without a configured path the mapping starts empty.
pub async fn load_property_fixtures(
    config: &FixtureConfig,
) -> Result<InMemoryPropertyRepository, InfrastructureError> {
    match &config.properties_path {
        Some(path) => load_property_file(path).await,
        None => {
            tracing::info!("No property fixture file configured, starting with an empty mapping");
            Ok(InMemoryPropertyRepository::new())
        }
    }
}

/// Read and parse a property fixture file
pub async fn load_property_file(
    path: &Path,
) -> Result<InMemoryPropertyRepository, InfrastructureError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), "Failed to read property fixtures: {}", e);
        InfrastructureError::FixtureIo(e)
    })?;

    let fixtures = InMemoryPropertyRepository::from_json_str(&json).map_err(|e| {
        tracing::error!(path = %path.display(), "Invalid property fixtures: {}", e);
        InfrastructureError::FixtureFormat(e)
    })?;

    tracing::info!(
        path = %path.display(),
        count = fixtures.len().await,
        "Loaded property fixtures"
    );
    Ok(fixtures)
}
