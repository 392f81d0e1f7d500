//! Qatar end-of-service gratuity computation.
//!
//! Qatari labour law grants 21 days of basic salary per year of service.
//! The payable fraction depends on who ended the employment and how long
//! the employee served.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::round2;

/// Days of basic salary granted per year of service.
const GRATUITY_DAYS_PER_YEAR: Decimal = Decimal::from_parts(21, 0, 0, false, 0);

/// Days in a salary month for the gratuity daily rate.
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Who ended the employment relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationInitiator {
    /// Termination by the employer; full gratuity applies.
    Employer,
    /// Resignation by the employee; reduced slabs apply under 10 years.
    Employee,
}

/// Calculates years of service between two dates.
///
/// `round2(days / 365.25)`; the order of the dates does not matter.
pub fn calculate_years_of_service(joining_date: NaiveDate, as_of: NaiveDate) -> Decimal {
    let days = Decimal::from((as_of - joining_date).num_days().abs());
    round2(days / Decimal::new(36525, 2))
}

/// Calculates the end-of-service gratuity amount.
///
/// The base entitlement is 21 days of basic salary per year of service
/// (`basic * 21 / 30` per year). Under one year nothing is payable. On
/// employer-initiated separation the full entitlement applies. On
/// resignation: under 2 years nothing, 2 to 5 years one third of the
/// entitlement for completed years, 5 to 10 years two thirds for the first
/// five years plus the full rate beyond, 10 years or more the full
/// entitlement.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_end_of_service, SeparationInitiator};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 4000 * 21 / 30 = 2800 per year; 3 years employer-initiated = 8400
/// let eos = calculate_end_of_service(
///     Decimal::from_str("4000").unwrap(),
///     Decimal::from_str("3").unwrap(),
///     SeparationInitiator::Employer,
/// );
/// assert_eq!(eos, Decimal::from_str("8400.00").unwrap());
/// ```
pub fn calculate_end_of_service(
    basic_salary: Decimal,
    years_of_service: Decimal,
    initiator: SeparationInitiator,
) -> Decimal {
    if years_of_service < Decimal::ONE {
        return Decimal::ZERO;
    }

    let per_year = basic_salary * GRATUITY_DAYS_PER_YEAR / DAYS_PER_MONTH;
    let five = Decimal::from(5);
    let three = Decimal::from(3);

    let eos = match initiator {
        SeparationInitiator::Employer => per_year * years_of_service,
        SeparationInitiator::Employee => {
            if years_of_service < Decimal::from(2) {
                Decimal::ZERO
            } else if years_of_service < five {
                per_year * years_of_service.floor() / three
            } else if years_of_service < Decimal::from(10) {
                let first_five = per_year * five * Decimal::from(2) / three;
                let remaining = years_of_service - five;
                first_five + per_year * remaining
            } else {
                per_year * years_of_service
            }
        }
    };

    round2(eos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_years_of_service() {
        assert_eq!(
            calculate_years_of_service(make_date("2020-01-01"), make_date("2025-01-01")),
            dec("5.00")
        );
        // half a year: 183 / 365.25 = 0.501... -> 0.50
        assert_eq!(
            calculate_years_of_service(make_date("2024-07-02"), make_date("2025-01-01")),
            dec("0.50")
        );
    }

    #[test]
    fn test_years_of_service_order_independent() {
        assert_eq!(
            calculate_years_of_service(make_date("2025-01-01"), make_date("2020-01-01")),
            dec("5.00")
        );
    }

    #[test]
    fn test_under_one_year_pays_nothing() {
        for initiator in [SeparationInitiator::Employer, SeparationInitiator::Employee] {
            assert_eq!(
                calculate_end_of_service(dec("4000"), dec("0.9"), initiator),
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn test_employer_initiated_pays_full_entitlement() {
        // 4000 * 21 / 30 = 2800 per year
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("1"), SeparationInitiator::Employer),
            dec("2800.00")
        );
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("7.5"), SeparationInitiator::Employer),
            dec("21000.00")
        );
    }

    #[test]
    fn test_resignation_under_two_years_pays_nothing() {
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("1.5"), SeparationInitiator::Employee),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_resignation_two_to_five_years_pays_one_third_of_completed_years() {
        // floor(3.8) = 3 completed years: 2800 * 3 / 3 = 2800
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("3.8"), SeparationInitiator::Employee),
            dec("2800.00")
        );
    }

    #[test]
    fn test_resignation_five_to_ten_years() {
        // first five years at two thirds: 2800 * 5 * 2/3 = 9333.33...
        // plus two full years: 2800 * 2 = 5600 -> 14933.33
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("7"), SeparationInitiator::Employee),
            dec("14933.33")
        );
    }

    #[test]
    fn test_resignation_ten_years_or_more_pays_full_entitlement() {
        assert_eq!(
            calculate_end_of_service(dec("4000"), dec("10"), SeparationInitiator::Employee),
            dec("28000.00")
        );
    }
}
