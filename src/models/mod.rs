//! Core data models for the payroll engine.
//!
//! This module contains all the domain value types used throughout the engine.

mod attendance;
mod calculation_result;
mod deductions;
mod overtime;
mod salary;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, Holiday, LeaveBalance, LeaveRecord, LeaveType, PayPeriod,
};
pub use calculation_result::{PayrollCalculationResult, QatarPayrollCalculationResult};
pub use deductions::{Deductions, EmployerContributions, StatutoryDeductions};
pub use overtime::{OvertimeCategory, OvertimeRecord};
pub use salary::{QatarSalaryComponents, SalaryComponents};
