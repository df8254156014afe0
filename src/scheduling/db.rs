//! Scheduled Transfer Database Layer
//!
//! PostgreSQL-backed [`ScheduleRepository`]. Ids come from a BIGSERIAL column.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::error::RepositoryError;
use super::repository::ScheduleRepository;
use super::types::{NewScheduledTransfer, ScheduledTransfer};

/// Table DDL, applied by `Database::init_schema`
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS scheduled_transfers_tb (
    id                    BIGSERIAL PRIMARY KEY,
    origin_account        VARCHAR(10) NOT NULL,
    destination_account   VARCHAR(10) NOT NULL,
    transfer_value        NUMERIC NOT NULL,
    applied_fee           NUMERIC NOT NULL,
    total_value_with_fee  NUMERIC NOT NULL,
    transfer_date         DATE NOT NULL,
    scheduling_date       DATE NOT NULL
)
"#;

/// Upper bound for a liveness ping
pub const PING_TIMEOUT: Duration = Duration::from_secs(2);

pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    async fn save(
        &self,
        record: NewScheduledTransfer,
    ) -> Result<ScheduledTransfer, RepositoryError> {
        let stored: ScheduledTransfer = sqlx::query_as(
            r#"
            INSERT INTO scheduled_transfers_tb
                (origin_account, destination_account, transfer_value, applied_fee,
                 total_value_with_fee, transfer_date, scheduling_date)
            VALUES
                ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, origin_account, destination_account, transfer_value, applied_fee,
                      total_value_with_fee, transfer_date, scheduling_date
            "#,
        )
        .bind(&record.origin_account)
        .bind(&record.destination_account)
        .bind(record.transfer_value)
        .bind(record.applied_fee)
        .bind(record.total_value_with_fee)
        .bind(record.transfer_date)
        .bind(record.scheduling_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<ScheduledTransfer>, RepositoryError> {
        let rows: Vec<ScheduledTransfer> = sqlx::query_as(
            r#"SELECT id, origin_account, destination_account, transfer_value, applied_fee,
                      total_value_with_fee, transfer_date, scheduling_date
               FROM scheduled_transfers_tb ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        tokio::time::timeout(PING_TIMEOUT, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| {
                RepositoryError::Unavailable(format!(
                    "no answer within {}ms",
                    PING_TIMEOUT.as_millis()
                ))
            })??;
        Ok(())
    }
}
