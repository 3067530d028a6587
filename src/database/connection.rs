use crate::{config::DatabaseConfig, error::Result};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connects and runs migrations when a URL is configured. `None` puts the
/// application into mock/degraded mode instead of failing startup.
pub async fn create_pool(config: &DatabaseConfig) -> Result<Option<PgPool>> {
    let Some(url) = &config.url else {
        tracing::warn!("No database configured; serving mock data and discarding writes");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(Some(pool))
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
