//! Configuration types for jurisdiction profiles.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML profile files. A profile carries the jurisdiction's working-day
//! model plus whichever sections apply: the Indian statutory section
//! (ceilings and global applicability) or the Qatar overtime multipliers.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Identifying metadata for a jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Stable jurisdiction code used for lookup (e.g., "india").
    pub code: String,
    /// Human-readable jurisdiction name.
    pub name: String,
    /// ISO currency code for all monetary amounts (e.g., "INR").
    pub currency: String,
}

/// The working-day model used to derive hourly rates and daily rates.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingDayModel {
    /// Number of working days per month.
    pub days_per_month: Decimal,
    /// Number of working hours per day.
    pub hours_per_day: Decimal,
}

/// Provident Fund settings for the jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct PfProfile {
    /// Monthly wage ceiling for the PF wage.
    pub wage_ceiling: Decimal,
    /// Organization-wide PF switch; combined with the per-employee flag.
    pub enabled: bool,
}

/// Employee State Insurance settings for the jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct EsiProfile {
    /// Monthly gross ceiling above which ESI does not apply.
    pub gross_ceiling: Decimal,
    /// Organization-wide ESI switch; combined with the per-employee flag.
    pub enabled: bool,
}

/// The statutory deduction section of an India-style profile.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// Provident Fund settings.
    pub pf: PfProfile,
    /// Employee State Insurance settings.
    pub esi: EsiProfile,
}

/// Overtime multipliers for jurisdictions with category-dependent rates.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeProfile {
    /// Multiplier for weekday overtime.
    pub weekday_multiplier: Decimal,
    /// Multiplier for weekend overtime.
    pub weekend_multiplier: Decimal,
    /// Multiplier for holiday overtime.
    pub holiday_multiplier: Decimal,
}

/// A complete jurisdiction profile loaded from one YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionProfile {
    /// Identifying metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// The working-day model for rate derivations.
    pub working_days: WorkingDayModel,
    /// Statutory deduction settings; present for India-style profiles.
    #[serde(default)]
    pub statutory: Option<StatutoryConfig>,
    /// Overtime multipliers; present for Qatar-style profiles.
    #[serde(default)]
    pub overtime: Option<OvertimeProfile>,
}
