use crate::core::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgConnection, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url())
        .await
}

/// Wait for the database server with a bounded retry loop, then make sure
/// the target database exists. Must complete before the pool is created and
/// any traffic is served.
///
/// Connection failures are logged with the password redacted.
pub async fn wait_for_database(config: &DatabaseConfig) -> anyhow::Result<()> {
    let max_retries = config.connect_max_retries;
    let delay = Duration::from_secs(config.connect_retry_delay_secs);

    for attempt in 1..=max_retries {
        tracing::info!(
            "Attempt {}/{}: connecting to {}",
            attempt,
            max_retries,
            config.redacted_target()
        );

        match ensure_database_exists(config).await {
            Ok(()) => {
                tracing::info!("Database server is ready");
                return Ok(());
            }
            Err(e) => {
                let message = e.to_string().replace(&config.password, "********");
                tracing::warn!(
                    "Attempt {}/{} failed: {}",
                    attempt,
                    max_retries,
                    message
                );
                if attempt < max_retries {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    anyhow::bail!(
        "Could not connect to the database after {} attempts",
        max_retries
    )
}

/// Create the target database if it does not exist yet, via the
/// maintenance database. CREATE DATABASE cannot take bind parameters,
/// so the name is quoted as an identifier.
async fn ensure_database_exists(config: &DatabaseConfig) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(&config.admin_url()).await?;

    let exists: Option<(i32,)> =
        sqlx::query_as("SELECT 1 FROM pg_database WHERE datname = $1")
            .bind(&config.name)
            .fetch_optional(&mut conn)
            .await?;

    if exists.is_none() {
        tracing::info!("Database '{}' not found, creating it", config.name);
        let quoted = config.name.replace('"', "\"\"");
        sqlx::query(&format!("CREATE DATABASE \"{}\"", quoted))
            .execute(&mut conn)
            .await?;
    }

    conn.close().await?;
    Ok(())
}
