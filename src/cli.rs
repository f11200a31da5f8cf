// src/cli.rs
// DOCUMENTATION: Command line arguments for the relatorios binary

use crate::models::ReportKind;
use clap::Parser;

/// Print one aggregate figure from the bike rack database
#[derive(Parser, Debug)]
#[command(name = "relatorios", version)]
pub struct Cli {
    /// Aggregate to run
    #[arg(long, value_enum, default_value_t = ReportKind::BikeRacks)]
    pub report: ReportKind,

    /// Scope the report to one bike rack
    #[arg(long)]
    pub bike_rack_id: Option<i32>,

    /// Print the report as a JSON line
    #[arg(long)]
    pub json: bool,
}
