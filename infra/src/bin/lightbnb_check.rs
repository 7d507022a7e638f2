//! Startup check for the LightBnB data layer
//!
//! Loads configuration, opens the pool, lists a few property titles and
//! reports pool statistics.

use anyhow::Context;
use tracing::info;

use lb_infra::{init_tracing, initialize, load_config};

const SAMPLE_TITLES: &str = "SELECT title FROM properties LIMIT 10";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting LightBnB data layer check");

    let services = initialize(&config)
        .await
        .context("failed to initialize infrastructure")?;

    let titles: Vec<String> = sqlx::query_scalar(SAMPLE_TITLES)
        .fetch_all(services.pool.get_pool())
        .await
        .context("sample property query failed")?;
    for title in &titles {
        info!(title = %title, "Property");
    }

    info!(fixtures = services.fixtures.len().await, "Fixture mapping ready");
    info!("{}", services.pool.get_statistics());

    services.shutdown().await;
    Ok(())
}
