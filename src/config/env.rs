// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Build the explicit configuration struct once at startup

use crate::errors::ReportError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;

/// Database credentials read from DATABASE_* variables
/// DOCUMENTATION: Values are kept exactly as read; the driver is the judge
/// of whether they are usable
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,

    /// Kept as text so a malformed value surfaces as a connection error
    pub port: String,

    pub user: String,

    pub password: String,

    pub name: String,

    /// Seconds to wait for a pooled connection during the health check
    pub connect_timeout: u64,
}

impl DatabaseConfig {
    /// Assemble driver connection options
    /// DOCUMENTATION: TLS is always disabled
    pub fn connect_options(&self) -> Result<PgConnectOptions, ReportError> {
        let port: u16 = self
            .port
            .trim()
            .parse()
            .map_err(|source| ReportError::ConnectionFailed {
                value: self.port.clone(),
                source,
            })?;

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }

    /// Connection string with the password masked, safe for logs
    pub fn redacted(&self) -> String {
        format!(
            "host={} port={} user={} password=*** dbname={} sslmode=disable",
            self.host, self.port, self.user, self.name
        )
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    /// DOCUMENTATION: The .env file is loaded by main.rs before this runs
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        Config {
            database: DatabaseConfig {
                host: var("DATABASE_HOST"),
                port: var("DATABASE_PORT"),
                user: var("DATABASE_USER"),
                password: var("DATABASE_PASSWORD"),
                name: var("DATABASE_NAME"),
                connect_timeout: lookup("DB_CONNECTION_TIMEOUT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info,sqlx=warn".to_string()),
        }
    }

    /// Report unset credentials
    /// DOCUMENTATION: Never fatal, the connection attempt decides
    pub fn validate(&self) -> Vec<&'static str> {
        let db = &self.database;
        let missing: Vec<&'static str> = [
            ("DATABASE_HOST", &db.host),
            ("DATABASE_PORT", &db.port),
            ("DATABASE_USER", &db.user),
            ("DATABASE_NAME", &db.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect();

        for key in &missing {
            log::warn!("{} not configured", key);
        }

        missing
    }
}
