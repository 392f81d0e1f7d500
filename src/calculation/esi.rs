//! Employee State Insurance contribution computation.
//!
//! ESI applies only while the monthly gross is at or below the ESI gross
//! ceiling. The employee contributes 0.75% of gross, the employer 3.25%.

use rust_decimal::Decimal;

use super::rounding::round2;

/// Statutory ESI gross ceiling (INR 21,000 per month).
pub const DEFAULT_ESI_CEILING: Decimal = Decimal::from_parts(21000, 0, 0, false, 0);

/// Employee-side ESI rate (0.75% of gross).
const ESI_EMPLOYEE_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// Employer-side ESI rate (3.25% of gross).
const ESI_EMPLOYER_RATE: Decimal = Decimal::from_parts(325, 0, 0, false, 4);

/// Calculates the employee ESI contribution.
///
/// Returns zero when ESI is not applicable or the gross salary exceeds the
/// ceiling; the gate is on gross strictly above the ceiling, so a gross of
/// exactly 21,000 still contributes.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_esi_employee, DEFAULT_ESI_CEILING};
/// use rust_decimal::Decimal;
///
/// // 20000 * 0.0075 = 150
/// assert_eq!(
///     calculate_esi_employee(Decimal::new(20000, 0), true, DEFAULT_ESI_CEILING),
///     Decimal::new(15000, 2),
/// );
/// // above the ceiling there is no contribution at all
/// assert_eq!(
///     calculate_esi_employee(Decimal::new(22000, 0), true, DEFAULT_ESI_CEILING),
///     Decimal::ZERO,
/// );
/// ```
pub fn calculate_esi_employee(
    gross_salary: Decimal,
    is_applicable: bool,
    esi_ceiling: Decimal,
) -> Decimal {
    if !is_applicable || gross_salary > esi_ceiling {
        return Decimal::ZERO;
    }
    round2(gross_salary * ESI_EMPLOYEE_RATE)
}

/// Calculates the employer ESI contribution.
///
/// Same applicability gate as the employee side at the 3.25% rate.
pub fn calculate_esi_employer(
    gross_salary: Decimal,
    is_applicable: bool,
    esi_ceiling: Decimal,
) -> Decimal {
    if !is_applicable || gross_salary > esi_ceiling {
        return Decimal::ZERO;
    }
    round2(gross_salary * ESI_EMPLOYER_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_esi_employee_below_ceiling() {
        assert_eq!(
            calculate_esi_employee(dec("20000"), true, DEFAULT_ESI_CEILING),
            dec("150.00")
        );
    }

    #[test]
    fn test_esi_employee_above_ceiling_returns_zero() {
        assert_eq!(
            calculate_esi_employee(dec("22000"), true, DEFAULT_ESI_CEILING),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_esi_employee_at_ceiling_still_contributes() {
        // 21000 * 0.0075 = 157.50
        assert_eq!(
            calculate_esi_employee(dec("21000"), true, DEFAULT_ESI_CEILING),
            dec("157.50")
        );
    }

    #[test]
    fn test_esi_employee_not_applicable_returns_zero() {
        assert_eq!(
            calculate_esi_employee(dec("15000"), false, DEFAULT_ESI_CEILING),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_esi_employer_rate() {
        // 20000 * 0.0325 = 650.00
        assert_eq!(
            calculate_esi_employer(dec("20000"), true, DEFAULT_ESI_CEILING),
            dec("650.00")
        );
    }

    #[test]
    fn test_esi_employer_shares_the_gate() {
        assert_eq!(
            calculate_esi_employer(dec("22000"), true, DEFAULT_ESI_CEILING),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_esi_employer(dec("20000"), false, DEFAULT_ESI_CEILING),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_esi_rounds_half_away_from_zero() {
        // 16700 * 0.0075 = 125.25, 16702 * 0.0075 = 125.265 -> 125.27
        assert_eq!(
            calculate_esi_employee(dec("16702"), true, DEFAULT_ESI_CEILING),
            dec("125.27")
        );
    }
}
