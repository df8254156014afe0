//! Database connection management
//!
//! Liveness checks go through `ScheduleRepository::ping`.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::scheduling::db::SCHEMA;

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the scheduled transfer table if it does not exist
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        tracing::info!("Schema ready: scheduled_transfers_tb");
        Ok(())
    }
}
