//! Persistence Gateway
//!
//! Stores priced transfers and hands back the identifier it assigned. The
//! engine never talks to storage directly.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::RepositoryError;
use super::types::{NewScheduledTransfer, ScheduledTransfer};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Store a new record and return it with its assigned id
    async fn save(&self, record: NewScheduledTransfer)
    -> Result<ScheduledTransfer, RepositoryError>;

    /// All stored records, in implementation-defined order
    async fn find_all(&self) -> Result<Vec<ScheduledTransfer>, RepositoryError>;

    /// Backend liveness probe
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Process-local repository (no durability). Ids start at 1.
pub struct InMemoryScheduleRepository {
    records: RwLock<Vec<ScheduledTransfer>>,
    next_id: AtomicI64,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryScheduleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn save(
        &self,
        record: NewScheduledTransfer,
    ) -> Result<ScheduledTransfer, RepositoryError> {
        // Hold the write lock while allocating so storage order matches id order
        let mut records = self.records.write().await;
        let stored = record.with_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<ScheduledTransfer>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }
}
