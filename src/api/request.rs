//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. The domain value types already carry their serde derives, so
//! requests embed them directly and add only the envelope fields and
//! defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, Deductions, LeaveBalance, LeaveRecord, LeaveType, OvertimeRecord, PayPeriod,
    QatarSalaryComponents, SalaryComponents,
};

fn default_true() -> bool {
    true
}

/// Request body for the `/calculate/india` endpoint.
///
/// Applicability flags default to `true` and are additionally gated by the
/// organization-wide switches in the jurisdiction profile. Ceilings default
/// from the profile when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndiaCalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// Fixed monthly salary components.
    pub components: SalaryComponents,
    /// Overtime records for the period.
    #[serde(default)]
    pub overtime_records: Vec<OvertimeRecord>,
    /// Non-statutory deductions for the period.
    #[serde(default = "Deductions::zero")]
    pub deductions: Deductions,
    /// Whether PF applies to this employee.
    #[serde(default = "default_true")]
    pub is_pf_applicable: bool,
    /// Whether ESI applies to this employee.
    #[serde(default = "default_true")]
    pub is_esi_applicable: bool,
    /// Monthly bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Monthly incentive.
    #[serde(default)]
    pub incentive: Decimal,
    /// Arrears payable this period.
    #[serde(default)]
    pub arrears: Decimal,
    /// Per-employee PF wage ceiling override.
    #[serde(default)]
    pub pf_wage_ceiling: Option<Decimal>,
    /// Per-employee ESI gross ceiling override.
    #[serde(default)]
    pub esi_ceiling: Option<Decimal>,
}

/// Request body for the `/calculate/india/period` endpoint.
///
/// The engine derives the earned component set from the attendance and
/// leave data before running the payroll calculation, so the supplied
/// components are the full-month entitlement. The absence reduction
/// happens through component scaling; callers should not also pass an
/// absence deduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndiaPeriodCalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// Full-month fixed salary components.
    pub components: SalaryComponents,
    /// The pay period with its organization holidays.
    pub period: PayPeriod,
    /// Per-day attendance entries for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Approved leave requests overlapping the period.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// Leave type definitions referenced by the leave requests.
    #[serde(default)]
    pub leave_types: Vec<LeaveType>,
    /// Closing leave balances for the period.
    #[serde(default)]
    pub leave_balances: Vec<LeaveBalance>,
    /// Overtime records for the period.
    #[serde(default)]
    pub overtime_records: Vec<OvertimeRecord>,
    /// Non-statutory deductions (loan, advance, penalty, other).
    #[serde(default = "Deductions::zero")]
    pub deductions: Deductions,
    /// Whether PF applies to this employee.
    #[serde(default = "default_true")]
    pub is_pf_applicable: bool,
    /// Whether ESI applies to this employee.
    #[serde(default = "default_true")]
    pub is_esi_applicable: bool,
    /// Monthly bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Monthly incentive.
    #[serde(default)]
    pub incentive: Decimal,
    /// Arrears payable this period.
    #[serde(default)]
    pub arrears: Decimal,
    /// Per-employee PF wage ceiling override.
    #[serde(default)]
    pub pf_wage_ceiling: Option<Decimal>,
    /// Per-employee ESI gross ceiling override.
    #[serde(default)]
    pub esi_ceiling: Option<Decimal>,
}

/// Request body for the `/calculate/qatar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QatarCalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// Fixed monthly salary components.
    pub components: QatarSalaryComponents,
    /// Overtime records for the period.
    #[serde(default)]
    pub overtime_records: Vec<OvertimeRecord>,
    /// Deductions for the period.
    #[serde(default = "Deductions::zero")]
    pub deductions: Deductions,
    /// Monthly bonus.
    #[serde(default)]
    pub bonus: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_request_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "components": {
                "basic_salary": "20000",
                "dearness_allowance": "0",
                "house_rent_allowance": "8000",
                "conveyance_allowance": "1600",
                "medical_allowance": "1250",
                "special_allowance": "0",
                "other_allowances": "0"
            }
        }"#;

        let request: IndiaCalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.overtime_records.is_empty());
        assert_eq!(request.deductions, Deductions::zero());
        assert!(request.is_pf_applicable);
        assert!(request.is_esi_applicable);
        assert_eq!(request.bonus, Decimal::ZERO);
        assert!(request.pf_wage_ceiling.is_none());
    }

    #[test]
    fn test_india_request_missing_components_fails() {
        let json = r#"{ "employee_id": "emp_001" }"#;
        let result: Result<IndiaCalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_qatar_request_defaults() {
        let json = r#"{
            "employee_id": "emp_q_001",
            "components": {
                "basic_salary": "4000",
                "housing_allowance": "2000",
                "food_allowance": "500",
                "transport_allowance": "500",
                "mobile_allowance": "100",
                "utility_allowance": "200",
                "other_allowances": "0"
            }
        }"#;

        let request: QatarCalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.overtime_records.is_empty());
        assert_eq!(request.bonus, Decimal::ZERO);
    }
}
