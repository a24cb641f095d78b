//! Database Connection Management
//!
//! Utilities for creating and managing database connections.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the initial connections can't be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to prove the store is reachable
///
/// # Errors
///
/// Returns `sqlx::Error` if no connection can be acquired or the query fails.
pub async fn check_connectivity(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    tracing::info!("Database connectivity verified");
    Ok(())
}

/// Apply the embedded migrations
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}

/// Create the pool, verify it and bring the schema up to date
///
/// # Errors
///
/// Returns an error if any of the three steps fails.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_pool(config).await?;
    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    check_connectivity(&pool).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
