//! Read-replica pool construction.
//!
//! The pool is the crate's scoped read-session factory: callers borrow a
//! connection per query and the pool bounds concurrency, connection age, and
//! statement runtime.

use crate::config::Config;
use crate::errors::DiscoveryError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

/// Connect to the read-replica database with a bounded pool.
///
/// A `statement_timeout` is appended to the URL so reads cannot hang
/// indefinitely.
///
/// # Errors
///
/// Returns `DiscoveryError::Database` if the pool cannot be established.
pub async fn connect_read_replica(config: &Config) -> Result<PgPool, DiscoveryError> {
    let url = add_statement_timeout(
        &config.database_read_url,
        config.db_statement_timeout_seconds,
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(2.min(config.db_max_connections))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&url)
        .await?;

    info!(
        max_connections = config.db_max_connections,
        statement_timeout_seconds = config.db_statement_timeout_seconds,
        "Read-replica pool established"
    );

    Ok(pool)
}

/// Appends a Postgres `statement_timeout` option to the connection URL,
/// bounding how long any single read can run server-side.
fn add_statement_timeout(url: &str, timeout_secs: u32) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}options=-c%20statement_timeout%3D{}s",
        url, separator, timeout_secs
    )
}
