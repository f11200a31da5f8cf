// src/db/bike_rack_repository.rs
// DOCUMENTATION: Bike rack aggregate queries
// PURPOSE: Scalar counts over the BikeRack and Bike tables

use crate::errors::ReportError;
use sqlx::PgPool;

pub struct BikeRackRepository;

impl BikeRackRepository {
    /// Number of registered bike racks
    /// DOCUMENTATION: The default report of the relatorios binary
    pub async fn count(pool: &PgPool) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM BikeRack")
            .fetch_one(pool)
            .await
            .map_err(ReportError::QueryFailed)
    }

    /// Number of bikes held by one rack
    pub async fn count_bikes(pool: &PgPool, bike_rack_id: i32) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Bike WHERE bike_rack_id = $1")
            .bind(bike_rack_id)
            .fetch_one(pool)
            .await
            .map_err(ReportError::QueryFailed)
    }
}
