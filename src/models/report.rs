// src/models/report.rs
// DOCUMENTATION: Report selection and result structures
// PURPOSE: Shared between the command line, the report service and output

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

/// Which scalar aggregate to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Number of registered bike racks
    BikeRacks,
    /// Number of bikes in one rack (requires --bike-rack-id)
    Bikes,
    /// Number of clients, optionally scoped to one rack
    Clients,
    /// Number of users
    Users,
    /// Number of customers in one rack (requires --bike-rack-id)
    Customers,
    /// Number of rentals, optionally scoped to one rack
    Rents,
}

impl ReportKind {
    /// Human label printed before the value
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::BikeRacks => "Bike racks",
            ReportKind::Bikes => "Bikes",
            ReportKind::Clients => "Clients",
            ReportKind::Users => "Users",
            ReportKind::Customers => "Customers",
            ReportKind::Rents => "Rentals",
        }
    }

    pub fn requires_bike_rack(&self) -> bool {
        matches!(self, ReportKind::Bikes | ReportKind::Customers)
    }

    pub fn accepts_bike_rack(&self) -> bool {
        !matches!(self, ReportKind::BikeRacks | ReportKind::Users)
    }
}

/// Result of one reporting run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub report: ReportKind,
    pub label: &'static str,
    pub value: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_rack_id: Option<i32>,

    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(report: ReportKind, bike_rack_id: Option<i32>, value: i64) -> Self {
        Report {
            report,
            label: report.label(),
            value,
            bike_rack_id,
            generated_at: Utc::now(),
        }
    }

    /// Single human-readable output line
    pub fn line(&self) -> String {
        match self.bike_rack_id {
            Some(id) => format!("{} (bike rack {}): {}", self.label, id, self.value),
            None => format!("{}: {}", self.label, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_scoping_rules() {
        assert!(ReportKind::Bikes.requires_bike_rack());
        assert!(ReportKind::Customers.requires_bike_rack());
        assert!(!ReportKind::Clients.requires_bike_rack());
        assert!(ReportKind::Clients.accepts_bike_rack());
        assert!(!ReportKind::BikeRacks.accepts_bike_rack());
        assert!(!ReportKind::Users.accepts_bike_rack());
    }

    #[test]
    fn test_line_contains_value() {
        let report = Report::new(ReportKind::BikeRacks, None, 42);
        assert_eq!(report.line(), "Bike racks: 42");

        let report = Report::new(ReportKind::Bikes, Some(3), 7);
        assert_eq!(report.line(), "Bikes (bike rack 3): 7");
    }

    #[test]
    fn test_json_shape() {
        let report = Report::new(ReportKind::BikeRacks, None, 5);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["report"], "bike-racks");
        assert_eq!(value["label"], "Bike racks");
        assert_eq!(value["value"], 5);
        assert!(value.get("bike_rack_id").is_none());
        assert!(value["generated_at"].is_string());
    }
}
