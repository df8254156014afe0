//! Advance-notice fee tiers
//!
//! The fee charged for a scheduled transfer depends on how many calendar days
//! ahead of the transfer date it was scheduled (the day offset). Offsets map to
//! one of six static tiers; anything outside `0..=50` has no tier.
//!
//! Fixed fees use 10^2 precision (cents) and rates use 10^3 precision:
//! `rate_milli = 25` means 0.025 = 2.5%.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::{CURRENCY_DECIMALS, round_currency};

/// Rate precision (10^3): `rate_milli` 1000 = 100%
pub const RATE_DECIMALS: u32 = 3;

/// Tier tag, in ascending offset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierCode {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl TierCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierCode::A => "A",
            TierCode::B => "B",
            TierCode::C => "C",
            TierCode::D => "D",
            TierCode::E => "E",
            TierCode::F => "F",
        }
    }
}

impl fmt::Display for TierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fee tier: an inclusive day-offset range with a fixed fee and a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTier {
    pub code: TierCode,
    /// Inclusive lower bound (>= 0)
    pub min_days: i64,
    /// Inclusive upper bound (>= min_days)
    pub max_days: i64,
    /// Fixed fee in cents
    pub fixed_fee_cents: i64,
    /// Percentage rate in thousandths
    pub rate_milli: i64,
}

impl FeeTier {
    /// Does this tier cover `day_offset` (inclusive on both ends)?
    #[inline]
    pub fn covers(&self, day_offset: i64) -> bool {
        self.min_days <= day_offset && day_offset <= self.max_days
    }

    /// Fixed fee as a 2-fraction-digit currency amount
    pub fn fixed_fee(&self) -> Decimal {
        Decimal::new(self.fixed_fee_cents, CURRENCY_DECIMALS)
    }

    /// Percentage rate as a fraction (0.025 = 2.5%)
    pub fn percentage_rate(&self) -> Decimal {
        Decimal::new(self.rate_milli, RATE_DECIMALS)
    }
}

/// The fee schedule. Ascending, non-overlapping, contiguous over 0..=50.
pub static FEE_TIERS: [FeeTier; 6] = [
    // same-day: 3.00 + 2.5%
    FeeTier {
        code: TierCode::A,
        min_days: 0,
        max_days: 0,
        fixed_fee_cents: 300,
        rate_milli: 25,
    },
    // 1-10 days: 12.00 flat
    FeeTier {
        code: TierCode::B,
        min_days: 1,
        max_days: 10,
        fixed_fee_cents: 1200,
        rate_milli: 0,
    },
    FeeTier {
        code: TierCode::C,
        min_days: 11,
        max_days: 20,
        fixed_fee_cents: 0,
        rate_milli: 82,
    },
    FeeTier {
        code: TierCode::D,
        min_days: 21,
        max_days: 30,
        fixed_fee_cents: 0,
        rate_milli: 69,
    },
    FeeTier {
        code: TierCode::E,
        min_days: 31,
        max_days: 40,
        fixed_fee_cents: 0,
        rate_milli: 47,
    },
    FeeTier {
        code: TierCode::F,
        min_days: 41,
        max_days: 50,
        fixed_fee_cents: 0,
        rate_milli: 17,
    },
];

/// No tier covers the requested day offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no fee tier covers a day offset of {day_offset}")]
pub struct NoTierFound {
    pub day_offset: i64,
}

/// Find the tier covering `day_offset`.
///
/// Linear scan in ascending order; the first covering tier wins. Negative
/// offsets are not special-cased: no tier covers them.
///
/// # Example
/// ```
/// use transfer_scheduler::fee::{TierCode, resolve_tier};
///
/// assert_eq!(resolve_tier(10).unwrap().code, TierCode::B);
/// assert_eq!(resolve_tier(51).unwrap_err().day_offset, 51);
/// ```
pub fn resolve_tier(day_offset: i64) -> Result<&'static FeeTier, NoTierFound> {
    FEE_TIERS
        .iter()
        .find(|tier| tier.covers(day_offset))
        .ok_or(NoTierFound { day_offset })
}

/// Fee charged for `principal` under `tier`.
///
/// `fixed_fee + principal * percentage_rate`, rounded half-up to exactly two
/// fraction digits. `principal` is assumed positive (checked at the API
/// boundary).
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use transfer_scheduler::fee::{FEE_TIERS, calculate_fee};
///
/// // 100.00 same-day: 3.00 + 2.50
/// let fee = calculate_fee(&FEE_TIERS[0], Decimal::new(10000, 2));
/// assert_eq!(fee.to_string(), "5.50");
/// ```
#[inline]
pub fn calculate_fee(tier: &FeeTier, principal: Decimal) -> Decimal {
    round_currency(tier.fixed_fee() + principal * tier.percentage_rate())
}
