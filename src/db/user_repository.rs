// src/db/user_repository.rs
// DOCUMENTATION: User aggregate queries
// PURPOSE: Counts over Users and the per-rack UsersRole assignments

use crate::errors::ReportError;
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    pub async fn count(pool: &PgPool) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Users")
            .fetch_one(pool)
            .await
            .map_err(ReportError::QueryFailed)
    }

    /// Users holding the customer role in one rack
    pub async fn count_customers(pool: &PgPool, bike_rack_id: i32) -> Result<i64, ReportError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM UsersRole
            WHERE bike_rack_id = $1 AND role = 'customer'
            "#,
        )
        .bind(bike_rack_id)
        .fetch_one(pool)
        .await
        .map_err(ReportError::QueryFailed)
    }
}
