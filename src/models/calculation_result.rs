//! Calculation result models.
//!
//! This module contains the terminal aggregates produced by the payroll
//! orchestrators. Results are pure value objects with no identity and no
//! lifecycle beyond the calculation call that produced them; the caller
//! owns persistence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Deductions, EmployerContributions, StatutoryDeductions};

/// The complete result of an India payroll calculation.
///
/// Invariant: `net_salary` equals `(gross_salary + overtime_amount + bonus +
/// incentive + arrears) - (total_statutory_deductions +
/// total_other_deductions)`, with every derived quantity rounded to two
/// decimal places at the point of computation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{
///     Deductions, EmployerContributions, PayrollCalculationResult, StatutoryDeductions,
/// };
/// use rust_decimal::Decimal;
///
/// let result = PayrollCalculationResult {
///     gross_salary: Decimal::new(3085000, 2),
///     overtime_amount: Decimal::ZERO,
///     total_earnings: Decimal::new(3085000, 2),
///     statutory_deductions: StatutoryDeductions {
///         pf_employee: Decimal::new(180000, 2),
///         esi_employee: Decimal::ZERO,
///         professional_tax: Decimal::new(200, 0),
///         tds: Decimal::new(29250, 2),
///         lwf: Decimal::ZERO,
///     },
///     other_deductions: Deductions::zero(),
///     total_statutory_deductions: Decimal::new(229250, 2),
///     total_other_deductions: Decimal::ZERO,
///     total_deductions: Decimal::new(229250, 2),
///     net_salary: Decimal::new(2855750, 2),
///     employer_contributions: EmployerContributions {
///         pf_employer: Decimal::new(180000, 2),
///         esi_employer: Decimal::ZERO,
///     },
///     ctc: Decimal::new(39180000, 2),
///     hourly_rate: Decimal::new(9615384615, 8),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// Sum of the fixed salary components.
    pub gross_salary: Decimal,
    /// Total overtime amount across all records.
    pub overtime_amount: Decimal,
    /// Gross plus overtime, bonus, incentive and arrears.
    pub total_earnings: Decimal,
    /// Employee-side statutory deductions.
    pub statutory_deductions: StatutoryDeductions,
    /// Non-statutory deductions as supplied by the caller.
    pub other_deductions: Deductions,
    /// Sum of the statutory deduction fields.
    pub total_statutory_deductions: Decimal,
    /// Sum of the non-statutory deduction fields.
    pub total_other_deductions: Decimal,
    /// Statutory plus non-statutory deductions.
    pub total_deductions: Decimal,
    /// Total earnings minus total deductions.
    pub net_salary: Decimal,
    /// Employer-side statutory contributions.
    pub employer_contributions: EmployerContributions,
    /// Annualized cost to company.
    pub ctc: Decimal,
    /// The hourly rate used for overtime, unrounded.
    pub hourly_rate: Decimal,
}

/// The result of a Qatar payroll calculation.
///
/// Qatar pay has no statutory deduction set; the shape is the same pipeline
/// without the statutory and employer-side legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QatarPayrollCalculationResult {
    /// Sum of the fixed salary components.
    pub gross_salary: Decimal,
    /// Total overtime amount across all records.
    pub overtime_amount: Decimal,
    /// Gross plus overtime and bonus.
    pub total_earnings: Decimal,
    /// Sum of the non-statutory deduction fields.
    pub total_deductions: Decimal,
    /// Total earnings minus total deductions.
    pub net_salary: Decimal,
    /// The hourly rate used for overtime, unrounded.
    pub hourly_rate: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> PayrollCalculationResult {
        PayrollCalculationResult {
            gross_salary: dec("30850"),
            overtime_amount: dec("0"),
            total_earnings: dec("30850"),
            statutory_deductions: StatutoryDeductions {
                pf_employee: dec("1800.00"),
                esi_employee: dec("0"),
                professional_tax: dec("200"),
                tds: dec("292.50"),
                lwf: dec("0"),
            },
            other_deductions: Deductions::zero(),
            total_statutory_deductions: dec("2292.50"),
            total_other_deductions: dec("0"),
            total_deductions: dec("2292.50"),
            net_salary: dec("28557.50"),
            employer_contributions: EmployerContributions {
                pf_employer: dec("1800.00"),
                esi_employer: dec("0"),
            },
            ctc: dec("391800.00"),
            hourly_rate: dec("96.153846"),
        }
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PayrollCalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_net_salary_identity_holds_for_sample() {
        let result = sample_result();
        let expected = result.total_earnings
            - (result.total_statutory_deductions + result.total_other_deductions);
        assert_eq!(result.net_salary, expected);
    }

    #[test]
    fn test_result_serializes_nested_sections() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"statutory_deductions\":{"));
        assert!(json.contains("\"other_deductions\":{"));
        assert!(json.contains("\"employer_contributions\":{"));
    }
}
