// src/db/rent_repository.rs
// DOCUMENTATION: Rental aggregate queries

use crate::errors::ReportError;
use sqlx::PgPool;

pub struct RentRepository;

impl RentRepository {
    pub async fn count(pool: &PgPool) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Rent")
            .fetch_one(pool)
            .await
            .map_err(ReportError::QueryFailed)
    }

    pub async fn count_for_rack(pool: &PgPool, bike_rack_id: i32) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Rent WHERE bike_rack_id = $1")
            .bind(bike_rack_id)
            .fetch_one(pool)
            .await
            .map_err(ReportError::QueryFailed)
    }
}
