//! Calculation logic for the payroll engine.
//!
//! This module contains all the pure calculation functions: gross salary
//! summation, hourly-rate and overtime derivation, the Indian statutory
//! deduction formulas (PF, ESI, Professional Tax, TDS, LWF), deduction
//! aggregation and net/CTC totals, attendance/leave pro-ration, the Qatar
//! end-of-service gratuity, and the complete payroll orchestrators.

mod aggregation;
mod complete;
mod end_of_service;
mod esi;
mod gross;
mod hourly_rate;
mod lwf;
mod overtime;
mod professional_tax;
mod proration;
mod provident_fund;
mod rounding;
mod tds;

pub use aggregation::{
    calculate_absence_deduction, calculate_ctc, calculate_net_salary,
    calculate_total_other_deductions, calculate_total_statutory_deductions,
};
pub use complete::{calculate_complete_payroll, calculate_complete_qatar_payroll};
pub use end_of_service::{
    calculate_end_of_service, calculate_years_of_service, SeparationInitiator,
};
pub use esi::{calculate_esi_employee, calculate_esi_employer, DEFAULT_ESI_CEILING};
pub use gross::{calculate_gross_salary, calculate_qatar_gross_salary};
pub use hourly_rate::{
    calculate_hourly_rate, DEFAULT_HOURS_PER_DAY, DEFAULT_WORKING_DAYS_PER_MONTH,
};
pub use lwf::calculate_lwf;
pub use overtime::{calculate_overtime, calculate_qatar_overtime, INDIA_OVERTIME_MULTIPLIER};
pub use professional_tax::{calculate_professional_tax, tax_from_slabs, FlatSlab};
pub use proration::{
    apply_earned_factor, calculate_earned_factor, derive_earned_components,
    reconcile_leave_balances, scan_attendance, AttendanceScan, AttendanceSummary,
};
pub use provident_fund::{
    calculate_pf_employee, calculate_pf_employer, DEFAULT_PF_WAGE_CEILING,
};
pub use rounding::round2;
pub use tds::{calculate_annual_tds, calculate_monthly_tds};
