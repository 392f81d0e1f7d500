//! Hourly rate derivation for overtime.

use rust_decimal::Decimal;

/// Default number of working days in a month for the hourly-rate base.
pub const DEFAULT_WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// Default number of working hours in a day.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Derives the hourly rate from the basic salary and a working-day model.
///
/// `rate = basic_salary / (working_days_per_month * hours_per_day)`.
///
/// No rounding is applied at this stage: the unrounded rate feeds the
/// overtime computation, which rounds only its final sum. A zero-hour model
/// yields a zero rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{
///     calculate_hourly_rate, DEFAULT_HOURS_PER_DAY, DEFAULT_WORKING_DAYS_PER_MONTH,
/// };
/// use rust_decimal::Decimal;
///
/// // 26 working days of 8 hours: 26000 / 208 = 125
/// let rate = calculate_hourly_rate(
///     Decimal::new(26000, 0),
///     DEFAULT_WORKING_DAYS_PER_MONTH,
///     DEFAULT_HOURS_PER_DAY,
/// );
/// assert_eq!(rate, Decimal::new(125, 0));
/// ```
pub fn calculate_hourly_rate(
    basic_salary: Decimal,
    working_days_per_month: Decimal,
    hours_per_day: Decimal,
) -> Decimal {
    let total_hours = working_days_per_month * hours_per_day;
    if total_hours.is_zero() {
        return Decimal::ZERO;
    }
    basic_salary / total_hours
}
