//! Overtime amount computation.
//!
//! India pays statutory overtime at a flat 2x of the hourly rate for every
//! day category. Qatar pays 1.25x on weekdays and 1.50x on weekends and
//! holidays, with the multipliers and working-day model configurable per
//! jurisdiction profile.

use rust_decimal::Decimal;

use crate::config::{OvertimeProfile, WorkingDayModel};
use crate::models::{OvertimeCategory, OvertimeRecord};

use super::hourly_rate::{
    calculate_hourly_rate, DEFAULT_HOURS_PER_DAY, DEFAULT_WORKING_DAYS_PER_MONTH,
};
use super::rounding::round2;

/// The Indian statutory overtime multiplier (2x).
pub const INDIA_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Calculates the total India overtime amount across all records.
///
/// Each record contributes `hourly_rate * hours * 2.0` independently;
/// records are never merged. Weekend and holiday overtime pay the same
/// statutory 2x rate as weekday overtime. Only the final sum is rounded
/// to 2 decimal places, not each record.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime;
/// use payroll_engine::models::{OvertimeCategory, OvertimeRecord};
/// use rust_decimal::Decimal;
///
/// // hourly rate 26000 / 208 = 125, so 10 hours at 2x pays 2500
/// let records = vec![OvertimeRecord {
///     category: OvertimeCategory::Weekday,
///     hours: Decimal::new(10, 0),
/// }];
/// assert_eq!(
///     calculate_overtime(Decimal::new(26000, 0), &records),
///     Decimal::new(2500, 0),
/// );
/// ```
pub fn calculate_overtime(basic_salary: Decimal, records: &[OvertimeRecord]) -> Decimal {
    let hourly_rate = calculate_hourly_rate(
        basic_salary,
        DEFAULT_WORKING_DAYS_PER_MONTH,
        DEFAULT_HOURS_PER_DAY,
    );

    let mut total = Decimal::ZERO;
    for record in records {
        // Same statutory rate for weekends and holidays as for weekdays.
        let multiplier = match record.category {
            OvertimeCategory::Weekday => INDIA_OVERTIME_MULTIPLIER,
            OvertimeCategory::Weekend | OvertimeCategory::Holiday => INDIA_OVERTIME_MULTIPLIER,
        };
        total += hourly_rate * record.hours * multiplier;
    }

    round2(total)
}

/// Calculates the total Qatar overtime amount across all records.
///
/// The multiplier per record comes from the jurisdiction's overtime
/// profile; the hourly rate uses the profile's working-day model. As with
/// the India flow, only the final sum is rounded.
pub fn calculate_qatar_overtime(
    basic_salary: Decimal,
    records: &[OvertimeRecord],
    profile: &OvertimeProfile,
    working_days: &WorkingDayModel,
) -> Decimal {
    let hourly_rate = calculate_hourly_rate(
        basic_salary,
        working_days.days_per_month,
        working_days.hours_per_day,
    );

    let mut total = Decimal::ZERO;
    for record in records {
        let multiplier = match record.category {
            OvertimeCategory::Weekday => profile.weekday_multiplier,
            OvertimeCategory::Weekend => profile.weekend_multiplier,
            OvertimeCategory::Holiday => profile.holiday_multiplier,
        };
        total += hourly_rate * record.hours * multiplier;
    }

    round2(total)
}
