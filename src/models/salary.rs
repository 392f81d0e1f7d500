//! Fixed monthly salary component models.
//!
//! A component set is the fixed monthly entitlement for one employee for one
//! payroll run. It is an immutable input, sourced externally once per
//! calculation; pro-ration produces a new, scaled component set rather than
//! mutating the original.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed monthly salary components for the India jurisdiction.
///
/// All fields are non-negative decimal currency amounts in INR.
///
/// # Example
///
/// ```
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
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Basic salary, the base for PF and overtime derivations.
    pub basic_salary: Decimal,
    /// Dearness allowance, included in the PF wage.
    pub dearness_allowance: Decimal,
    /// House rent allowance.
    pub house_rent_allowance: Decimal,
    /// Conveyance allowance.
    pub conveyance_allowance: Decimal,
    /// Medical allowance.
    pub medical_allowance: Decimal,
    /// Special allowance.
    pub special_allowance: Decimal,
    /// Any other allowances not covered by the named fields.
    pub other_allowances: Decimal,
}

/// Fixed monthly salary components for the Qatar jurisdiction.
///
/// Qatar pay is structured as a basic salary plus flat allowances; there is
/// no statutory deduction set. All fields are amounts in QAR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QatarSalaryComponents {
    /// Basic salary, the base for overtime and end-of-service derivations.
    pub basic_salary: Decimal,
    /// Housing allowance.
    pub housing_allowance: Decimal,
    /// Food allowance.
    pub food_allowance: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Mobile allowance.
    pub mobile_allowance: Decimal,
    /// Utility allowance.
    pub utility_allowance: Decimal,
    /// Any other allowances not covered by the named fields.
    pub other_allowances: Decimal,
}
