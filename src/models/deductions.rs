//! Deduction and contribution models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Non-statutory deductions for one employee for one payroll run.
///
/// Loan and advance amounts come from external ledgers; the absence
/// deduction may instead be computed by the pro-ration step. All fields
/// are non-negative currency amounts supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Deduction for unpaid absence days.
    pub absence_deduction: Decimal,
    /// Monthly loan installment recovered from pay.
    pub loan_deduction: Decimal,
    /// Monthly salary-advance recovery.
    pub advance_deduction: Decimal,
    /// Disciplinary or contractual penalty.
    pub penalty_deduction: Decimal,
    /// Any other deduction not covered by the named fields.
    pub other_deductions: Decimal,
}

impl Deductions {
    /// A deduction set with every field zero.
    pub fn zero() -> Self {
        Self {
            absence_deduction: Decimal::ZERO,
            loan_deduction: Decimal::ZERO,
            advance_deduction: Decimal::ZERO,
            penalty_deduction: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }
}

/// Employee-side statutory deductions.
///
/// Every field is derived by the engine; callers never set these directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// Employee Provident Fund contribution.
    pub pf_employee: Decimal,
    /// Employee State Insurance contribution.
    pub esi_employee: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Tax deducted at source (approximation).
    pub tds: Decimal,
    /// Labour Welfare Fund contribution.
    pub lwf: Decimal,
}

/// Employer-side statutory contributions.
///
/// Derived by the engine; feeds the cost-to-company figure, not net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer Provident Fund contribution.
    pub pf_employer: Decimal,
    /// Employer State Insurance contribution.
    pub esi_employer: Decimal,
}
