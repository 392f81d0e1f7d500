//! Overtime record model and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The day category an overtime entry was worked on.
///
/// Categories drive the overtime multiplier in jurisdictions that pay
/// weekend or holiday overtime at a different rate (Qatar). Indian statutory
/// overtime pays the same 2x rate for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCategory {
    /// Overtime worked on a regular working day.
    Weekday,
    /// Overtime worked on a weekly off day.
    Weekend,
    /// Overtime worked on an organization holiday.
    Holiday,
}

/// A tagged amount of overtime hours for one employee in one period.
///
/// Multiple records may exist per employee per period; the engine never
/// deduplicates or merges them; each record contributes independently.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{OvertimeCategory, OvertimeRecord};
/// use rust_decimal::Decimal;
///
/// let record = OvertimeRecord {
///     category: OvertimeCategory::Weekday,
///     hours: Decimal::new(10, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// The day category the hours were worked on.
    pub category: OvertimeCategory,
    /// The number of overtime hours.
    pub hours: Decimal,
}
