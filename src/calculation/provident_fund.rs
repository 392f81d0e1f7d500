//! Provident Fund contribution computation.
//!
//! Both sides contribute 12% of the PF wage, where the PF wage is
//! `min(basic + dearness allowance, wage ceiling)`.

use rust_decimal::Decimal;

use super::rounding::round2;

/// Statutory PF wage ceiling (INR 15,000 per month).
pub const DEFAULT_PF_WAGE_CEILING: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);

/// PF contribution rate, 12% for each side.
const PF_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Calculates the employee Provident Fund contribution.
///
/// Returns zero when PF is not applicable for the employee. Otherwise the
/// contribution is 12% of `min(basic + da, wage_ceiling)`, rounded to
/// 2 decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_pf_employee, DEFAULT_PF_WAGE_CEILING};
/// use rust_decimal::Decimal;
///
/// // min(20000 + 2000, 15000) = 15000; 15000 * 0.12 = 1800
/// let pf = calculate_pf_employee(
///     Decimal::new(20000, 0),
///     Decimal::new(2000, 0),
///     true,
///     DEFAULT_PF_WAGE_CEILING,
/// );
/// assert_eq!(pf, Decimal::new(180000, 2));
/// ```
pub fn calculate_pf_employee(
    basic_salary: Decimal,
    dearness_allowance: Decimal,
    is_applicable: bool,
    wage_ceiling: Decimal,
) -> Decimal {
    if !is_applicable {
        return Decimal::ZERO;
    }

    let pf_wage = (basic_salary + dearness_allowance).min(wage_ceiling);
    round2(pf_wage * PF_RATE)
}

/// Calculates the employer Provident Fund contribution.
///
/// The formula is identical to the employee side: 12% of the capped PF
/// wage. The statutory EPF/EPS split (3.67% / 8.33%) of the employer share
/// is not modeled; both sides are charged the full nominal 12%, and
/// persisted payroll records depend on these numbers.
pub fn calculate_pf_employer(
    basic_salary: Decimal,
    dearness_allowance: Decimal,
    is_applicable: bool,
    wage_ceiling: Decimal,
) -> Decimal {
    if !is_applicable {
        return Decimal::ZERO;
    }

    let pf_wage = (basic_salary + dearness_allowance).min(wage_ceiling);
    round2(pf_wage * PF_RATE)
}
