// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration and connection components

pub mod db;
pub mod env;

pub use db::Database;
pub use env::{Config, DatabaseConfig};
