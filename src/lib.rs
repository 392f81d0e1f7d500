//! Statutory Payroll Calculation Engine
//!
//! This crate implements monthly payroll calculation for the India and Qatar
//! jurisdictions: gross salary from fixed components, statutory overtime,
//! Indian statutory deductions (PF, ESI, Professional Tax, TDS, LWF),
//! attendance/leave based pro-ration and net pay / cost-to-company totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
