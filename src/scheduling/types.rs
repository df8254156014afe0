//! Scheduled Transfer Types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validated scheduling input
///
/// Account format, positive value and transfer date are enforced at the API
/// boundary before one of these is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOrder {
    pub origin_account: String,
    pub destination_account: String,
    pub value: Decimal,
    pub transfer_date: NaiveDate,
}

/// Fully priced transfer, not yet stored (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduledTransfer {
    pub origin_account: String,
    pub destination_account: String,
    pub transfer_value: Decimal,
    pub applied_fee: Decimal,
    pub total_value_with_fee: Decimal,
    pub transfer_date: NaiveDate,
    pub scheduling_date: NaiveDate,
}

impl NewScheduledTransfer {
    /// Attach the identifier assigned by the repository
    pub fn with_id(self, id: i64) -> ScheduledTransfer {
        ScheduledTransfer {
            id,
            origin_account: self.origin_account,
            destination_account: self.destination_account,
            transfer_value: self.transfer_value,
            applied_fee: self.applied_fee,
            total_value_with_fee: self.total_value_with_fee,
            transfer_date: self.transfer_date,
            scheduling_date: self.scheduling_date,
        }
    }
}

/// Persisted scheduled transfer. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTransfer {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "1234567890")]
    pub origin_account: String,
    #[schema(example = "0987654321")]
    pub destination_account: String,
    #[schema(value_type = String, example = "500.00")]
    pub transfer_value: Decimal,
    #[schema(value_type = String, example = "15.50")]
    pub applied_fee: Decimal,
    #[schema(value_type = String, example = "515.50")]
    pub total_value_with_fee: Decimal,
    #[schema(value_type = String, format = Date, example = "2026-10-19")]
    pub transfer_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-10-19")]
    pub scheduling_date: NaiveDate,
}
