// src/config/db.rs
// DOCUMENTATION: Database connection manager
// PURPOSE: Open the bounded PostgreSQL pool and verify it before use

use crate::config::DatabaseConfig;
use crate::errors::ReportError;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use std::time::Duration;

/// Ceiling on open connections held by the pool
pub const MAX_OPEN_CONNECTIONS: u32 = 25;

/// Ceiling on idle connections; the pool never holds more idle
/// connections than open ones, so this equals MAX_OPEN_CONNECTIONS
pub const MAX_IDLE_CONNECTIONS: u32 = 25;

/// Pool occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub open: u32,
    pub idle: usize,
}

/// Connection manager
/// DOCUMENTATION: Holds the pool privately and exposes only what the
/// reporting routine and the count repositories need
#[derive(Debug)]
pub struct Database {
    pool: PgPool,
    options: PgConnectOptions,
}

/// Pool limits: 25 open, no idle timeout, no max lifetime
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_OPEN_CONNECTIONS)
        .min_connections(0)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        // Connections never expire
        .idle_timeout(None)
        .max_lifetime(None)
}

impl Database {
    /// Open the pool and ping the server
    /// DOCUMENTATION: Called once from main.rs; both failure kinds are fatal
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ReportError> {
        log::info!("Connecting to database: {}", config.redacted());

        let options = config.connect_options()?;
        let pool = pool_options(config).connect_lazy_with(options.clone());
        let db = Database { pool, options };
        log::debug!(
            "Pool limits: {} open, {} idle, no expiry",
            MAX_OPEN_CONNECTIONS,
            MAX_IDLE_CONNECTIONS
        );

        db.ping().await?;

        log::info!("Database connection established");
        Ok(db)
    }

    /// Round-trip to the server on a dedicated connection
    /// DOCUMENTATION: Bypasses the pool so a refused or rejected connection
    /// fails on the first attempt with the driver's own error
    pub async fn ping(&self) -> Result<(), ReportError> {
        let mut conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(ReportError::PingFailed)?;
        conn.ping().await.map_err(ReportError::PingFailed)?;
        conn.close().await.map_err(ReportError::PingFailed)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn pool_status(&self) -> PoolStatus {
        PoolStatus {
            open: self.pool.size(),
            idle: self.pool.num_idle(),
        }
    }

    /// Close every connection and wait for them to be released
    pub async fn close(self) {
        let status = self.pool_status();
        log::debug!(
            "Closing database pool: {} open, {} idle",
            status.open,
            status.idle
        );
        self.pool.close().await;
        log::debug!("Database connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Instant;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: "1".to_string(),
            user: "nobody".to_string(),
            password: "nothing".to_string(),
            name: "missing".to_string(),
            connect_timeout: 2,
        }
    }

    #[test]
    fn test_pool_limits() {
        let options = pool_options(&unreachable_config());

        assert_eq!(options.get_max_connections(), MAX_OPEN_CONNECTIONS);
        assert_eq!(options.get_min_connections(), 0);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(2));
        assert!(MAX_IDLE_CONNECTIONS <= MAX_OPEN_CONNECTIONS);
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_ping() {
        let mut config = unreachable_config();
        config.connect_timeout = 5;

        let started = Instant::now();
        let err = Database::connect(&config).await.unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, ReportError::PingFailed(sqlx::Error::Io(_))));
        let message = err.to_string().to_lowercase();
        assert!(message.starts_with("ping failed"));
        assert!(message.contains("refused"), "cause missing: {}", message);
        assert!(elapsed < Duration::from_secs(2), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_malformed_port_fails_connection() {
        let mut config = unreachable_config();
        config.port = "not-a-port".to_string();

        let err = Database::connect(&config).await.unwrap_err();
        assert!(matches!(err, ReportError::ConnectionFailed { .. }));
    }

    // Run with: DATABASE_HOST=... DATABASE_PORT=... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_pool_stays_bounded() {
        let config = Config::from_env();
        let db = Database::connect(&config.database).await.expect("connect failed");

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let pool = db.pool().clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.expect("task panicked"), i as i32);
            let status = db.pool_status();
            assert!(status.open <= MAX_OPEN_CONNECTIONS);
            assert!(status.idle <= MAX_IDLE_CONNECTIONS as usize);
        }

        db.close().await;
    }
}
