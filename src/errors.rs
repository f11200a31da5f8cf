// src/errors.rs
// DOCUMENTATION: Custom error types for the reporting utility
// PURPOSE: Centralized error handling, every variant is fatal in main.rs

use std::num::ParseIntError;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant wraps the underlying cause so the fatal log
/// line in main.rs carries the driver's own message
#[derive(Error, Debug)]
pub enum ReportError {
    /// Connection parameters could not be turned into driver options
    #[error("connection failed: invalid DATABASE_PORT {value:?}: {source}")]
    ConnectionFailed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Server unreachable, handshake rejected or pool timed out
    #[error("ping failed: {0}")]
    PingFailed(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
