//! Gross salary computation.
//!
//! Gross salary is the plain sum of the fixed monthly components. No
//! rounding is applied here: the inputs are already currency amounts and
//! addition introduces no new precision.

use rust_decimal::Decimal;

use crate::models::{QatarSalaryComponents, SalaryComponents};

/// Sums the seven India salary components into the monthly gross figure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_salary;
/// use payroll_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = SalaryComponents {
///     basic_salary: Decimal::from_str("20000").unwrap(),
///     dearness_allowance: Decimal::ZERO,
///     house_rent_allowance: Decimal::from_str("8000").unwrap(),
///     conveyance_allowance: Decimal::from_str("1600").unwrap(),
///     medical_allowance: Decimal::from_str("1250").unwrap(),
///     special_allowance: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
/// };
/// assert_eq!(calculate_gross_salary(&components), Decimal::from_str("30850").unwrap());
/// ```
pub fn calculate_gross_salary(components: &SalaryComponents) -> Decimal {
    components.basic_salary
        + components.dearness_allowance
        + components.house_rent_allowance
        + components.conveyance_allowance
        + components.medical_allowance
        + components.special_allowance
        + components.other_allowances
}

/// Sums the seven Qatar salary components into the monthly gross figure.
pub fn calculate_qatar_gross_salary(components: &QatarSalaryComponents) -> Decimal {
    components.basic_salary
        + components.housing_allowance
        + components.food_allowance
        + components.transport_allowance
        + components.mobile_allowance
        + components.utility_allowance
        + components.other_allowances
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn india_components() -> SalaryComponents {
        SalaryComponents {
            basic_salary: dec("20000"),
            dearness_allowance: dec("2000"),
            house_rent_allowance: dec("8000"),
            conveyance_allowance: dec("1600"),
            medical_allowance: dec("1250"),
            special_allowance: dec("500"),
            other_allowances: dec("150"),
        }
    }

    #[test]
    fn test_gross_is_sum_of_all_seven_components() {
        assert_eq!(calculate_gross_salary(&india_components()), dec("33500"));
    }

    #[test]
    fn test_gross_of_zero_components_is_zero() {
        let components = SalaryComponents {
            basic_salary: Decimal::ZERO,
            dearness_allowance: Decimal::ZERO,
            house_rent_allowance: Decimal::ZERO,
            conveyance_allowance: Decimal::ZERO,
            medical_allowance: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
        };
        assert_eq!(calculate_gross_salary(&components), Decimal::ZERO);
    }

    #[test]
    fn test_qatar_gross_is_sum_of_all_seven_components() {
        let components = QatarSalaryComponents {
            basic_salary: dec("4000"),
            housing_allowance: dec("2000"),
            food_allowance: dec("500"),
            transport_allowance: dec("500"),
            mobile_allowance: dec("100"),
            utility_allowance: dec("200"),
            other_allowances: dec("0"),
        };
        assert_eq!(calculate_qatar_gross_salary(&components), dec("7300"));
    }
}
