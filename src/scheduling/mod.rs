//! Transfer Scheduling
//!
//! Accepts an order to move funds on a future date, prices it against the
//! advance-notice fee table and stores the result.
//!
//! # Flow
//!
//! ```text
//! TransferOrder ──▶ engine::schedule(today) ──▶ NewScheduledTransfer
//!                        │                              │
//!                  fee::resolve_tier             ScheduleRepository::save
//!                  fee::calculate_fee                   │
//!                                                       ▼
//!                                               ScheduledTransfer (id)
//! ```
//!
//! The engine is pure; only [`SchedulingService`] touches the repository.

pub mod db;
pub mod engine;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use db::PgScheduleRepository;
pub use engine::{days_between, schedule};
pub use error::{RepositoryError, SchedulingError};
pub use repository::{InMemoryScheduleRepository, ScheduleRepository};
pub use service::SchedulingService;
pub use types::{NewScheduledTransfer, ScheduledTransfer, TransferOrder};
