//! Input validation for the calculation endpoints.
//!
//! The calculation core deliberately performs no validation: malformed
//! numeric inputs propagate arithmetically, matching the behavior callers
//! already depend on. This pass is a separable addition in front of the
//! orchestrators: it rejects negative amounts with a clear error before
//! the core ever runs, and can be bypassed by calling the calculation
//! functions directly.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Deductions, OvertimeRecord, QatarSalaryComponents, SalaryComponents};

use super::request::{
    IndiaCalculationRequest, IndiaPeriodCalculationRequest, QatarCalculationRequest,
};

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

fn validate_components(components: &SalaryComponents) -> EngineResult<()> {
    non_negative("basic_salary", components.basic_salary)?;
    non_negative("dearness_allowance", components.dearness_allowance)?;
    non_negative("house_rent_allowance", components.house_rent_allowance)?;
    non_negative("conveyance_allowance", components.conveyance_allowance)?;
    non_negative("medical_allowance", components.medical_allowance)?;
    non_negative("special_allowance", components.special_allowance)?;
    non_negative("other_allowances", components.other_allowances)
}

fn validate_qatar_components(components: &QatarSalaryComponents) -> EngineResult<()> {
    non_negative("basic_salary", components.basic_salary)?;
    non_negative("housing_allowance", components.housing_allowance)?;
    non_negative("food_allowance", components.food_allowance)?;
    non_negative("transport_allowance", components.transport_allowance)?;
    non_negative("mobile_allowance", components.mobile_allowance)?;
    non_negative("utility_allowance", components.utility_allowance)?;
    non_negative("other_allowances", components.other_allowances)
}

fn validate_overtime(records: &[OvertimeRecord]) -> EngineResult<()> {
    for record in records {
        non_negative("overtime_records.hours", record.hours)?;
    }
    Ok(())
}

fn validate_deductions(deductions: &Deductions) -> EngineResult<()> {
    non_negative("absence_deduction", deductions.absence_deduction)?;
    non_negative("loan_deduction", deductions.loan_deduction)?;
    non_negative("advance_deduction", deductions.advance_deduction)?;
    non_negative("penalty_deduction", deductions.penalty_deduction)?;
    non_negative("other_deductions", deductions.other_deductions)
}

/// Validates an India calculation request.
pub fn validate_india_request(request: &IndiaCalculationRequest) -> EngineResult<()> {
    validate_components(&request.components)?;
    validate_overtime(&request.overtime_records)?;
    validate_deductions(&request.deductions)?;
    non_negative("bonus", request.bonus)?;
    non_negative("incentive", request.incentive)?;
    non_negative("arrears", request.arrears)
}

/// Validates an India period calculation request.
pub fn validate_india_period_request(request: &IndiaPeriodCalculationRequest) -> EngineResult<()> {
    validate_components(&request.components)?;
    validate_overtime(&request.overtime_records)?;
    validate_deductions(&request.deductions)?;
    non_negative("bonus", request.bonus)?;
    non_negative("incentive", request.incentive)?;
    non_negative("arrears", request.arrears)?;

    if !(1..=12).contains(&request.period.month) {
        return Err(EngineError::InvalidInput {
            field: "period.month".to_string(),
            message: "must be between 1 and 12".to_string(),
        });
    }
    Ok(())
}

/// Validates a Qatar calculation request.
pub fn validate_qatar_request(request: &QatarCalculationRequest) -> EngineResult<()> {
    validate_qatar_components(&request.components)?;
    validate_overtime(&request.overtime_records)?;
    validate_deductions(&request.deductions)?;
    non_negative("bonus", request.bonus)
}
