//! Scheduling Service
//!
//! Wires the engine to the Persistence Gateway. "Today" is read once per
//! request and used both for the past-date check and for pricing.

use std::sync::Arc;

use chrono::NaiveDate;

use super::engine;
use super::error::SchedulingError;
use super::repository::ScheduleRepository;
use super::types::{ScheduledTransfer, TransferOrder};
use crate::clock::Clock;

#[derive(Clone)]
pub struct SchedulingService {
    repository: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
}

impl SchedulingService {
    pub fn new(repository: Arc<dyn ScheduleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Current date according to the service clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Schedule `order` as of the clock's current date
    pub async fn schedule(&self, order: TransferOrder) -> Result<ScheduledTransfer, SchedulingError> {
        let today = self.clock.today();
        self.schedule_on(order, today).await
    }

    /// Schedule `order` as of a date the caller already captured.
    ///
    /// All-or-nothing: nothing reaches the repository unless pricing succeeds.
    pub async fn schedule_on(
        &self,
        order: TransferOrder,
        today: NaiveDate,
    ) -> Result<ScheduledTransfer, SchedulingError> {
        if order.transfer_date < today {
            return Err(SchedulingError::TransferDateInPast {
                transfer_date: order.transfer_date,
                today,
            });
        }

        let priced = engine::schedule(order, today).inspect_err(|e| {
            tracing::warn!(today = %today, "Scheduling rejected: {}", e);
        })?;

        let stored = self.repository.save(priced).await?;

        tracing::info!(
            id = stored.id,
            day_offset = engine::days_between(stored.scheduling_date, stored.transfer_date),
            origin = %stored.origin_account,
            destination = %stored.destination_account,
            transfer_date = %stored.transfer_date,
            fee = %stored.applied_fee,
            total = %stored.total_value_with_fee,
            "Transfer scheduled"
        );

        Ok(stored)
    }

    /// Every stored transfer, as returned by the repository
    pub async fn list_all(&self) -> Result<Vec<ScheduledTransfer>, SchedulingError> {
        Ok(self.repository.find_all().await?)
    }

    /// Liveness of the backing repository
    pub async fn ping(&self) -> Result<(), SchedulingError> {
        Ok(self.repository.ping().await?)
    }
}
