// src/services/report_service.rs
// DOCUMENTATION: Report dispatch
// PURPOSE: Map a ReportKind to exactly one aggregate query

use crate::config::Database;
use crate::db::{BikeRackRepository, ClientRepository, RentRepository, UserRepository};
use crate::errors::ReportError;
use crate::models::{Report, ReportKind};

pub struct ReportService;

impl ReportService {
    /// Check --bike-rack-id against the chosen report before any query runs
    pub fn check_scope(kind: ReportKind, bike_rack_id: Option<i32>) -> Result<(), ReportError> {
        match bike_rack_id {
            None if kind.requires_bike_rack() => Err(ReportError::InvalidInput(format!(
                "report {:?} requires --bike-rack-id",
                kind
            ))),
            Some(_) if !kind.accepts_bike_rack() => Err(ReportError::InvalidInput(format!(
                "report {:?} does not take --bike-rack-id",
                kind
            ))),
            _ => Ok(()),
        }
    }

    fn required(kind: ReportKind, bike_rack_id: Option<i32>) -> Result<i32, ReportError> {
        bike_rack_id.ok_or_else(|| {
            ReportError::InvalidInput(format!("report {:?} requires --bike-rack-id", kind))
        })
    }

    /// Run one report
    pub async fn run(
        db: &Database,
        kind: ReportKind,
        bike_rack_id: Option<i32>,
    ) -> Result<Report, ReportError> {
        Self::check_scope(kind, bike_rack_id)?;

        let pool = db.pool();
        let value = match (kind, bike_rack_id) {
            (ReportKind::BikeRacks, _) => BikeRackRepository::count(pool).await?,
            (ReportKind::Bikes, id) => {
                BikeRackRepository::count_bikes(pool, Self::required(kind, id)?).await?
            }
            (ReportKind::Clients, Some(id)) => ClientRepository::count_for_rack(pool, id).await?,
            (ReportKind::Clients, None) => ClientRepository::count(pool).await?,
            (ReportKind::Users, _) => UserRepository::count(pool).await?,
            (ReportKind::Customers, id) => {
                UserRepository::count_customers(pool, Self::required(kind, id)?).await?
            }
            (ReportKind::Rents, Some(id)) => RentRepository::count_for_rack(pool, id).await?,
            (ReportKind::Rents, None) => RentRepository::count(pool).await?,
        };

        log::debug!("Report {:?} returned {}", kind, value);
        Ok(Report::new(kind, bike_rack_id, value))
    }
}
