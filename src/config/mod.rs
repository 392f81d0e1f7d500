//! Configuration loading and management for the payroll engine.
//!
//! This module loads jurisdiction profiles from YAML files: the working-day
//! model, the Indian statutory ceilings and organization-wide switches, and
//! the Qatar overtime multipliers.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded jurisdiction: {}", config.profile("india").unwrap().jurisdiction.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EsiProfile, JurisdictionMetadata, JurisdictionProfile, OvertimeProfile, PfProfile,
    StatutoryConfig, WorkingDayModel,
};
