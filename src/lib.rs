//! Transfer Scheduler
//!
//! Schedules bank transfers between two accounts for a future date and
//! charges a fee that depends on how far ahead the transfer is booked.
//!
//! # Modules
//!
//! - [`money`] - Currency rounding (2 decimals, half-up)
//! - [`fee`] - Advance-notice fee tiers
//! - [`clock`] - Source of "today"
//! - [`scheduling`] - Engine, service and repositories
//! - [`db`] - PostgreSQL connection pool
//! - [`gateway`] - HTTP API (axum) and OpenAPI docs
//! - [`config`] / [`logging`] - Runtime setup

pub mod clock;
pub mod config;
pub mod db;
pub mod fee;
pub mod gateway;
pub mod logging;
pub mod money;
pub mod scheduling;

// Convenient re-exports at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use fee::{FEE_TIERS, FeeTier, NoTierFound, TierCode, calculate_fee, resolve_tier};
pub use money::round_currency;
pub use scheduling::{
    InMemoryScheduleRepository, PgScheduleRepository, ScheduleRepository, ScheduledTransfer,
    SchedulingError, SchedulingService, TransferOrder,
};
