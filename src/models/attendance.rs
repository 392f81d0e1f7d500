//! Attendance, leave and pay-period models.
//!
//! These types carry the per-day facts the pro-ration step consumes. They
//! are converted from the data layer's row shapes at the boundary so the
//! calculation core only ever sees fully typed values.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded attendance status for one employee on one day.
///
/// `Present`, `Remote` and `Late` all count as a full present day;
/// `HalfDay` contributes half a present day and half a loss-of-pay day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Marked present at the workplace.
    Present,
    /// Worked remotely.
    Remote,
    /// Present but arrived late.
    Late,
    /// Worked half the day.
    HalfDay,
    /// Marked absent.
    Absent,
}

impl AttendanceStatus {
    /// Whether this status counts as a full present day.
    pub fn is_present_like(self) -> bool {
        matches!(self, Self::Present | Self::Remote | Self::Late)
    }
}

/// A single day's attendance entry for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day the entry is for.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
}

/// A leave type configured by the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Stable code identifying the type (e.g., "casual", "sick").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Whether days of this type are paid.
    pub is_paid: bool,
}

/// An approved leave request covering a date range (inclusive).
///
/// Only approved requests are fed to the engine; pending and rejected
/// requests are filtered out by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Code of the leave type taken.
    pub leave_type: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
}

impl LeaveRecord {
    /// Whether this leave covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// The closing balance of one leave type for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Code of the leave type.
    pub leave_type: String,
    /// Days still available, may be fractional.
    pub available: Decimal,
}

/// An organization holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

/// A monthly pay period with its organization holidays.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod {
///     month: 1,
///     year: 2025,
///     holidays: vec![],
/// };
/// assert_eq!(period.days().len(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Organization holidays falling in this period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayPeriod {
    /// Returns every calendar day in the period, in order.
    ///
    /// An invalid month/year combination yields an empty list.
    pub fn days(&self) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };

        let mut days = Vec::with_capacity(31);
        let mut current = first;
        while current.month() == self.month {
            days.push(current);
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        days
    }

    /// Whether the given date is an organization holiday in this period.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }
}
