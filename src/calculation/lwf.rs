//! Labour Welfare Fund contribution computation.

use rust_decimal::Decimal;

/// Calculates the monthly Labour Welfare Fund deduction.
///
/// LWF is a small per-state levy that is typically collected bi-annually
/// (e.g. Rs. 10 every six months), not monthly, so monthly payroll runs
/// currently deduct nothing. The signature keeps the gross salary and state
/// so per-state schedules can be added without changing any call site.
pub fn calculate_lwf(_gross_salary: Decimal, _state: &str) -> Decimal {
    // TODO: wire per-state bi-annual LWF schedules (June/December cycles)
    // once the payroll run carries the deduction month.
    Decimal::ZERO
}
