//! Monetary rounding used across the engine.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Every derived quantity in the engine is rounded at the point of
/// computation (not only at the end) so that persisted component values sum
/// exactly to the persisted totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round2(Decimal::from_str("292.5").unwrap()), Decimal::from_str("292.5").unwrap());
/// assert_eq!(round2(Decimal::from_str("-1.005").unwrap()), Decimal::from_str("-1.01").unwrap());
/// ```
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round2_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("1.015")), dec("1.02"));
        assert_eq!(round2(dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn test_round2_below_midpoint_rounds_down() {
        assert_eq!(round2(dec("1.004")), dec("1.00"));
        assert_eq!(round2(dec("1.0049")), dec("1.00"));
    }

    #[test]
    fn test_round2_leaves_short_scales_untouched() {
        assert_eq!(round2(dec("2500")), dec("2500"));
        assert_eq!(round2(dec("150.5")), dec("150.5"));
    }
}
