//! Scheduling Error Types

use chrono::NaiveDate;
use thiserror::Error;

use crate::fee::NoTierFound;

/// Persistence Gateway errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Scheduling error types
#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("No applicable tax rule found for transfers scheduled with {day_offset} days advance.")]
    NoTaxRuleFound { day_offset: i64 },

    #[error("The transfer date cannot be in the past.")]
    TransferDateInPast {
        transfer_date: NaiveDate,
        today: NaiveDate,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SchedulingError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            SchedulingError::NoTaxRuleFound { .. } => "NO_TAX_RULE_FOUND",
            SchedulingError::TransferDateInPast { .. } => "TRANSFER_DATE_IN_PAST",
            SchedulingError::Repository(_) => "REPOSITORY_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            SchedulingError::NoTaxRuleFound { .. } | SchedulingError::TransferDateInPast { .. } => {
                400
            }
            SchedulingError::Repository(_) => 500,
        }
    }
}

impl From<NoTierFound> for SchedulingError {
    fn from(e: NoTierFound) -> Self {
        SchedulingError::NoTaxRuleFound {
            day_offset: e.day_offset,
        }
    }
}
