//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is the only
//! state shared between requests; it bounds concurrent store operations.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DbConfig;

/// Default maximum connections for the pool.
/// Kept low for a reference deployment.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Build connection options from config.
///
/// When the managed-database socket override is set, the connection goes
/// over the Unix socket directory instead of TCP.
fn connect_options(config: &DbConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    match &config.socket {
        Some(socket) => options.socket(socket),
        None => options.host(&config.host).port(config.port),
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection bound.
pub async fn create_pool_with_options(
    config: &DbConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(config))
        .await
}
