//! Money Module
//!
//! Currency arithmetic helpers. All amounts are `rust_decimal::Decimal`,
//! never floats.
//!
//! ## Rounding Contract
//! Charged amounts (fee, total debit) are always rounded to
//! [`CURRENCY_DECIMALS`] fraction digits with round-half-up semantics: a
//! midpoint digit rounds away from zero (`0.005 -> 0.01`, `2.345 -> 2.35`).
//! The result always carries exactly two fraction digits (`12 -> 12.00`).
//!
//! Principal amounts supplied by callers are NOT pre-rounded.

use rust_decimal::prelude::*;

/// Fraction digits of every charged currency amount
pub const CURRENCY_DECIMALS: u32 = 2;

/// Round to [`CURRENCY_DECIMALS`] using round-half-up (away from zero).
///
/// The returned value always has scale 2, so it serializes as `"5.50"`
/// rather than `"5.5"` or `"5.500"`.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use transfer_scheduler::money::round_currency;
///
/// let fee = round_currency(Decimal::from_str("2.345").unwrap());
/// assert_eq!(fee.to_string(), "2.35");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never widens the scale; pad "12" to "12.00"
    rounded.rescale(CURRENCY_DECIMALS);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_up_midpoints() {
        assert_eq!(round_currency(d("0.005")), d("0.01"));
        assert_eq!(round_currency(d("2.345")), d("2.35"));
        assert_eq!(round_currency(d("2.344999")), d("2.34"));
        assert_eq!(round_currency(d("1.115")), d("1.12"));
    }

    #[test]
    fn test_round_is_not_bankers() {
        // Banker's rounding would give 0.02 and 0.00
        assert_eq!(round_currency(d("0.025")), d("0.03"));
        assert_eq!(round_currency(d("0.005")).to_string(), "0.01");
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(d("-0.005")), d("-0.01"));
    }

    #[test]
    fn test_always_two_fraction_digits() {
        assert_eq!(round_currency(d("12")).to_string(), "12.00");
        assert_eq!(round_currency(d("5.5")).to_string(), "5.50");
        assert_eq!(round_currency(d("82.00000")).to_string(), "82.00");
        assert_eq!(round_currency(d("0")).scale(), CURRENCY_DECIMALS);
    }
}
