//! Deduction totals, net salary, cost-to-company and absence deduction.

use rust_decimal::Decimal;

use crate::models::{Deductions, StatutoryDeductions};

use super::rounding::round2;

/// Sums all five employee-side statutory deduction fields.
pub fn calculate_total_statutory_deductions(statutory: &StatutoryDeductions) -> Decimal {
    statutory.pf_employee
        + statutory.esi_employee
        + statutory.professional_tax
        + statutory.tds
        + statutory.lwf
}

/// Sums all five non-statutory deduction fields.
pub fn calculate_total_other_deductions(deductions: &Deductions) -> Decimal {
    deductions.absence_deduction
        + deductions.loan_deduction
        + deductions.advance_deduction
        + deductions.penalty_deduction
        + deductions.other_deductions
}

/// Calculates net salary from earnings and deduction totals.
///
/// `net = round2((gross + overtime + bonus + incentive + arrears) -
/// (statutory_total + other_total))`.
pub fn calculate_net_salary(
    gross_salary: Decimal,
    overtime_amount: Decimal,
    statutory_deductions: Decimal,
    other_deductions: Decimal,
    bonus: Decimal,
    incentive: Decimal,
    arrears: Decimal,
) -> Decimal {
    let total_earnings = gross_salary + overtime_amount + bonus + incentive + arrears;
    let total_deductions = statutory_deductions + other_deductions;
    round2(total_earnings - total_deductions)
}

/// Calculates the annualized cost to company.
///
/// `ctc = round2(gross*12 + pf_employer*12 + esi_employer*12 + annual_bonus)`.
///
/// `annual_bonus` is an *annual* figure: callers holding a monthly bonus
/// must pass `bonus * 12`, as the India orchestrator does. Passing a
/// monthly figure here understates CTC; passing an already-annualized
/// figure to a caller that multiplies again overstates it.
pub fn calculate_ctc(
    gross_salary: Decimal,
    pf_employer: Decimal,
    esi_employer: Decimal,
    annual_bonus: Decimal,
) -> Decimal {
    let twelve = Decimal::from(12);
    let annual_gross = gross_salary * twelve;
    let annual_pf_employer = pf_employer * twelve;
    let annual_esi_employer = esi_employer * twelve;

    round2(annual_gross + annual_pf_employer + annual_esi_employer + annual_bonus)
}

/// Calculates the absence deduction from a daily rate.
///
/// `round2(gross / working_days * days_absent)`. Used by callers that track
/// absence as a day count instead of running the attendance pro-ration.
/// A zero working-day count yields a zero deduction.
pub fn calculate_absence_deduction(
    gross_salary: Decimal,
    days_absent: Decimal,
    working_days_per_month: Decimal,
) -> Decimal {
    if working_days_per_month.is_zero() {
        return Decimal::ZERO;
    }
    let daily_rate = gross_salary / working_days_per_month;
    round2(daily_rate * days_absent)
}
