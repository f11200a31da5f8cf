// src/main.rs
// DOCUMENTATION: Reporting entry point
// PURPOSE: Connect, run one aggregate query, print it, close

mod cli;
mod config;
mod db;
mod errors;
mod models;
mod services;

use clap::Parser;
use cli::Cli;
use config::{Config, Database};
use dotenv::dotenv;
use errors::ReportError;
use models::Report;
use services::ReportService;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 1. Load .env if present; logging is not up yet, report below
    let env_file = dotenv();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    if let Some(warning) = env_file_warning(&env_file) {
        log::warn!("{}", warning);
    }
    config.validate();

    // 4. Connect, query, print
    let result = run(&cli, &config).await;
    if let Ok(report) = &result {
        print_report(report, cli.json);
    }

    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// A missing or unreadable .env is reported, never fatal
fn env_file_warning(result: &Result<PathBuf, dotenv::Error>) -> Option<String> {
    match result {
        Ok(path) => {
            log::debug!("Loaded environment from {}", path.display());
            None
        }
        Err(e) => Some(format!("Could not load .env file: {}", e)),
    }
}

/// Log a fatal error and map it to the process status
fn exit_code(result: &Result<Report, ReportError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<Report, ReportError> {
    ReportService::check_scope(cli.report, cli.bike_rack_id)?;

    let db = Database::connect(&config.database).await?;
    let result = ReportService::run(&db, cli.report, cli.bike_rack_id).await;
    db.close().await;

    result
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                log::error!("Failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::ReportKind;
    use std::io;

    #[test]
    fn test_missing_env_file_is_a_warning() {
        let missing = Err(dotenv::Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "path not found",
        )));

        let warning = env_file_warning(&missing).unwrap();
        assert!(warning.starts_with("Could not load .env file"));
        assert!(warning.contains("path not found"));

        assert_eq!(env_file_warning(&Ok(PathBuf::from(".env"))), None);
    }

    #[test]
    fn test_exit_code() {
        let ok = Ok(Report::new(ReportKind::BikeRacks, None, 3));
        assert_eq!(exit_code(&ok), 0);

        let failed = Err(ReportError::PingFailed(sqlx::Error::PoolClosed));
        assert_eq!(exit_code(&failed), 1);

        let invalid = Err(ReportError::InvalidInput("bad".to_string()));
        assert_eq!(exit_code(&invalid), 1);
    }
}
