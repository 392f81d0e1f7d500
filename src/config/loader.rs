//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! profiles from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::JurisdictionProfile;

/// Loads and provides access to jurisdiction profiles.
///
/// The loader reads every `*.yaml` file in a directory, parses each as a
/// [`JurisdictionProfile`] and keys it by its jurisdiction code.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── india.yaml   # working-day model + statutory section
/// └── qatar.yaml   # working-day model + overtime multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let india = loader.profile("india").unwrap();
/// println!("PF ceiling: {}", india.statutory.as_ref().unwrap().pf.wage_ceiling);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profiles: HashMap<String, JurisdictionProfile>,
}

impl ConfigLoader {
    /// Loads every jurisdiction profile from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the directory does not
    /// exist or contains no profile files, and
    /// [`EngineError::ConfigParseError`] when a file contains invalid YAML
    /// or is missing required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir.display().to_string(),
        })?;

        let mut profiles = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir.display().to_string(),
            })?;
            let file_path = entry.path();
            if file_path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }

            let profile: JurisdictionProfile = Self::load_yaml(&file_path)?;
            profiles.insert(profile.jurisdiction.code.clone(), profile);
        }

        if profiles.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: dir.display().to_string(),
            });
        }

        Ok(Self { profiles })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the profile for a jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::JurisdictionNotFound`] when no profile with
    /// that code was loaded.
    pub fn profile(&self, code: &str) -> EngineResult<&JurisdictionProfile> {
        self.profiles
            .get(code)
            .ok_or_else(|| EngineError::JurisdictionNotFound {
                code: code.to_string(),
            })
    }
}
