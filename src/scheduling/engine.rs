//! Scheduling Engine
//!
//! Prices a transfer order against the static fee table. Pure: the result
//! depends only on the order and the supplied `today`; nothing is stored.

use chrono::NaiveDate;

use super::error::SchedulingError;
use super::types::{NewScheduledTransfer, TransferOrder};
use crate::fee::{calculate_fee, resolve_tier};
use crate::money::round_currency;

/// Signed number of calendar days from `from` to `to`
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Build the priced record for `order`, scheduled on `today`.
///
/// Fails with [`SchedulingError::NoTaxRuleFound`] when the offset between
/// `today` and the transfer date is outside every fee tier (including
/// negative offsets).
pub fn schedule(
    order: TransferOrder,
    today: NaiveDate,
) -> Result<NewScheduledTransfer, SchedulingError> {
    let day_offset = days_between(today, order.transfer_date);
    let tier = resolve_tier(day_offset)?;

    let applied_fee = calculate_fee(tier, order.value);
    let total_value_with_fee = round_currency(order.value + applied_fee);

    tracing::debug!(
        day_offset,
        tier = %tier.code,
        fee = %applied_fee,
        total = %total_value_with_fee,
        "Transfer priced"
    );

    Ok(NewScheduledTransfer {
        origin_account: order.origin_account,
        destination_account: order.destination_account,
        transfer_value: order.value,
        applied_fee,
        total_value_with_fee,
        transfer_date: order.transfer_date,
        scheduling_date: today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn order(value: &str, transfer_date: NaiveDate) -> TransferOrder {
        TransferOrder {
            origin_account: "1234567890".to_string(),
            destination_account: "0987654321".to_string(),
            value: d(value),
            transfer_date,
        }
    }

    #[test]
    fn test_days_between() {
        let t = today();
        assert_eq!(days_between(t, t), 0);
        assert_eq!(days_between(t, t + Days::new(10)), 10);
        assert_eq!(days_between(t, t - Days::new(3)), -3);
        // crosses a month and a year boundary
        let dec31 = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let jan1 = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert_eq!(days_between(dec31, jan1), 1);
    }

    #[test]
    fn test_same_day_end_to_end() {
        let record = schedule(order("500.00", today()), today()).unwrap();
        assert_eq!(record.applied_fee, d("15.50"));
        assert_eq!(record.total_value_with_fee, d("515.50"));
        assert_eq!(record.scheduling_date, today());
        assert_eq!(record.transfer_date, today());
        assert_eq!(record.origin_account, "1234567890");
        assert_eq!(record.destination_account, "0987654321");
        assert_eq!(record.transfer_value, d("500.00"));
    }

    #[test]
    fn test_ten_days_is_flat_fee() {
        let record = schedule(order("200.00", today() + Days::new(10)), today()).unwrap();
        assert_eq!(record.applied_fee, d("12.00"));
        assert_eq!(record.total_value_with_fee, d("212.00"));
    }

    #[test]
    fn test_fifty_one_days_has_no_rule() {
        let err = schedule(order("200.00", today() + Days::new(51)), today()).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::NoTaxRuleFound { day_offset: 51 }
        ));
        assert!(err.to_string().contains("51 days advance"));
    }

    #[test]
    fn test_past_date_falls_through_to_no_rule() {
        let err = schedule(order("200.00", today() - Days::new(1)), today()).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::NoTaxRuleFound { day_offset: -1 }
        ));
    }

    #[test]
    fn test_total_invariant_with_high_precision_principal() {
        // principal keeps its 3 fraction digits; fee and total are rounded
        let record = schedule(order("100.005", today() + Days::new(15)), today()).unwrap();
        assert_eq!(record.transfer_value, d("100.005"));
        // 0.082 * 100.005 = 8.20041 -> 8.20
        assert_eq!(record.applied_fee, d("8.20"));
        // 100.005 + 8.20 = 108.205 -> 108.21
        assert_eq!(record.total_value_with_fee, d("108.21"));
        assert_eq!(
            record.total_value_with_fee,
            round_currency(record.transfer_value + record.applied_fee)
        );
    }

    #[test]
    fn test_deterministic_for_same_today() {
        let a = schedule(order("321.09", today() + Days::new(33)), today()).unwrap();
        let b = schedule(order("321.09", today() + Days::new(33)), today()).unwrap();
        assert_eq!(a, b);
    }
}
