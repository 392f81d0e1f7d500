//! Attendance/leave pro-ration and earned-component derivation.
//!
//! Pro-ration runs as a two-stage pipeline with an explicit intermediate
//! value between the stages:
//!
//! 1. [`scan_attendance`] walks every calendar day of the period once and
//!    classifies it, producing an [`AttendanceScan`] that carries the
//!    per-leave-type days-taken map.
//! 2. [`reconcile_leave_balances`] runs strictly after the full scan and
//!    converts paid leave taken beyond the closing balance back into
//!    loss-of-pay days.
//!
//! The stages must not be interleaved: reconciliation depends on the
//! complete days-taken totals for the month.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, LeaveBalance, LeaveRecord, LeaveType, PayPeriod,
    SalaryComponents,
};

use super::rounding::round2;

const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The intermediate output of the attendance scan (stage 1).
///
/// `leave_days_taken` holds full paid-leave days per leave-type code and is
/// the value reconciliation charges against closing balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceScan {
    /// Working days in the period (Sundays and holidays excluded).
    pub working_days: Decimal,
    /// Days tentatively counted as present, including paid leave days.
    pub days_present: Decimal,
    /// Loss-of-pay days accumulated so far.
    pub loss_of_pay_days: Decimal,
    /// Paid leave days consumed per leave-type code.
    pub leave_days_taken: BTreeMap<String, Decimal>,
}

/// The final attendance outcome for the period (stage 2 output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Working days in the period.
    pub working_days: Decimal,
    /// Final present-day count after balance reconciliation.
    pub days_present: Decimal,
    /// Final loss-of-pay day count after balance reconciliation.
    pub loss_of_pay_days: Decimal,
    /// Paid leave days consumed per leave-type code.
    pub leave_days_taken: BTreeMap<String, Decimal>,
    /// The pro-ration multiplier applied to fixed components.
    pub earned_factor: Decimal,
}

/// Classifies every calendar day of the period for one employee.
///
/// Per day: Sundays and organization holidays are skipped entirely; a
/// present-like attendance status (Present/Remote/Late) counts one present
/// day; a half day counts 0.5 present and 0.5 loss-of-pay; otherwise a
/// covering approved leave of a paid type tentatively counts one present
/// day and charges that type's days-taken total; anything else (unpaid
/// leave, unknown leave type, or nothing recorded) is loss-of-pay.
pub fn scan_attendance(
    period: &PayPeriod,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    leave_types: &[LeaveType],
) -> AttendanceScan {
    let status_by_date: HashMap<NaiveDate, AttendanceStatus> = attendance
        .iter()
        .map(|record| (record.date, record.status))
        .collect();
    let paid_types: HashMap<&str, bool> = leave_types
        .iter()
        .map(|lt| (lt.code.as_str(), lt.is_paid))
        .collect();

    let mut working_days = Decimal::ZERO;
    let mut days_present = Decimal::ZERO;
    let mut loss_of_pay_days = Decimal::ZERO;
    let mut leave_days_taken: BTreeMap<String, Decimal> = BTreeMap::new();

    for day in period.days() {
        if day.weekday() == Weekday::Sun || period.is_holiday(day) {
            continue;
        }
        working_days += Decimal::ONE;

        match status_by_date.get(&day) {
            Some(status) if status.is_present_like() => days_present += Decimal::ONE,
            Some(AttendanceStatus::HalfDay) => {
                days_present += HALF_DAY;
                loss_of_pay_days += HALF_DAY;
            }
            _ => {
                let covering = leaves.iter().find(|leave| leave.covers(day));
                match covering {
                    Some(leave)
                        if paid_types.get(leave.leave_type.as_str()).copied() == Some(true) =>
                    {
                        days_present += Decimal::ONE;
                        *leave_days_taken
                            .entry(leave.leave_type.clone())
                            .or_insert(Decimal::ZERO) += Decimal::ONE;
                    }
                    _ => loss_of_pay_days += Decimal::ONE,
                }
            }
        }
    }

    AttendanceScan {
        working_days,
        days_present,
        loss_of_pay_days,
        leave_days_taken,
    }
}

/// Converts paid leave taken beyond the closing balance into loss-of-pay.
///
/// For each paid leave type in the scan's days-taken map, days beyond the
/// type's available balance move from present to loss-of-pay. A type with
/// no balance row has a balance of zero, so every day taken converts.
pub fn reconcile_leave_balances(
    scan: AttendanceScan,
    balances: &[LeaveBalance],
) -> AttendanceSummary {
    let mut days_present = scan.days_present;
    let mut loss_of_pay_days = scan.loss_of_pay_days;

    for (leave_type, taken) in &scan.leave_days_taken {
        let available = balances
            .iter()
            .find(|balance| balance.leave_type == *leave_type)
            .map(|balance| balance.available)
            .unwrap_or(Decimal::ZERO);
        let excess = (*taken - available).max(Decimal::ZERO);
        if excess > Decimal::ZERO {
            days_present -= excess;
            loss_of_pay_days += excess;
        }
    }

    let earned_factor = calculate_earned_factor(scan.working_days, loss_of_pay_days);

    AttendanceSummary {
        working_days: scan.working_days,
        days_present,
        loss_of_pay_days,
        leave_days_taken: scan.leave_days_taken,
        earned_factor,
    }
}

/// Derives the pro-ration multiplier for the period.
///
/// `max(0, (working_days - loss_of_pay_days) / working_days)`; a period
/// with no working days earns nothing.
pub fn calculate_earned_factor(working_days: Decimal, loss_of_pay_days: Decimal) -> Decimal {
    if working_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    ((working_days - loss_of_pay_days) / working_days).max(Decimal::ZERO)
}

/// Scales every fixed salary component by the earned factor.
///
/// Each earned component is rounded to 2 decimal places individually, so
/// the persisted components always sum to the persisted gross.
pub fn apply_earned_factor(components: &SalaryComponents, factor: Decimal) -> SalaryComponents {
    SalaryComponents {
        basic_salary: round2(components.basic_salary * factor),
        dearness_allowance: round2(components.dearness_allowance * factor),
        house_rent_allowance: round2(components.house_rent_allowance * factor),
        conveyance_allowance: round2(components.conveyance_allowance * factor),
        medical_allowance: round2(components.medical_allowance * factor),
        special_allowance: round2(components.special_allowance * factor),
        other_allowances: round2(components.other_allowances * factor),
    }
}

/// Runs the full pro-ration pipeline and returns the earned components.
///
/// Scan, reconcile, derive the factor, scale the components. The returned
/// summary carries the attendance outcome for persistence alongside the
/// earned component set.
pub fn derive_earned_components(
    components: &SalaryComponents,
    period: &PayPeriod,
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    leave_types: &[LeaveType],
    balances: &[LeaveBalance],
) -> (SalaryComponents, AttendanceSummary) {
    let scan = scan_attendance(period, attendance, leaves, leave_types);
    let summary = reconcile_leave_balances(scan, balances);
    let earned = apply_earned_factor(components, summary.earned_factor);
    (earned, summary)
}
