//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salon
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Branch;
use crate::scheduling::{RedemptionRules, parse_clock_time};

use super::types::{BranchesFile, LoyaltyFile, SalonConfig, SalonFile, SalonHours};

/// Loads and provides access to salon configuration.
///
/// # Directory Structure
///
/// ```text
/// config/salon/
/// ├── salon.yaml     # Salon name and opening hours
/// ├── loyalty.yaml   # Redemption minimum, point value and presets
/// └── branches.yaml  # Branch locations
/// ```
///
/// # Example
///
/// ```no_run
/// use salon_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salon")?;
/// for branch in loader.active_branches() {
///     println!("{} ({})", branch.name, branch.color.hex());
/// }
/// # Ok::<(), salon_scheduler::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalonConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if any of the three files is missing
    /// - `ConfigParseError` if a file is not valid YAML, a required field is
    ///   missing, or an opening time is not `HH:mm`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let salon_path = path.join("salon.yaml");
        let salon_file = Self::load_yaml::<SalonFile>(&salon_path)?;
        let salon = Self::parse_hours(&salon_path, salon_file)?;

        let loyalty = Self::load_yaml::<LoyaltyFile>(&path.join("loyalty.yaml"))?;
        let branches = Self::load_yaml::<BranchesFile>(&path.join("branches.yaml"))?;

        debug!(
            path = %path.display(),
            salon = %salon.name,
            branches = branches.branches.len(),
            "Loaded salon configuration"
        );

        Ok(Self::from_config(SalonConfig::new(
            salon,
            RedemptionRules::from(loyalty),
            branches.branches,
        )))
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: SalonConfig) -> Self {
        Self { config }
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

    fn parse_hours(path: &Path, file: SalonFile) -> EngineResult<SalonHours> {
        let as_config_error = |err: EngineError| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        };

        Ok(SalonHours {
            opening_time: parse_clock_time(&file.opening_time).map_err(as_config_error)?,
            closing_time: parse_clock_time(&file.closing_time).map_err(as_config_error)?,
            name: file.name,
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SalonConfig {
        &self.config
    }

    /// Returns the salon name and opening hours.
    pub fn salon(&self) -> &SalonHours {
        self.config.salon()
    }

    /// Returns the loyalty redemption rules.
    pub fn redemption_rules(&self) -> &RedemptionRules {
        self.config.redemption()
    }

    /// Returns all configured branches.
    pub fn branches(&self) -> &[Branch] {
        self.config.branches()
    }

    /// Returns the branches that can be selected as a scope.
    pub fn active_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches().iter().filter(|branch| branch.active)
    }

    /// Gets a branch by its identifier.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salon_scheduler::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/salon")?;
    /// let branch = loader.get_branch("central")?;
    /// println!("Branch: {}", branch.address);
    /// # Ok::<(), salon_scheduler::error::EngineError>(())
    /// ```
    pub fn get_branch(&self, id: &str) -> EngineResult<&Branch> {
        self.branches()
            .iter()
            .find(|branch| branch.id == id)
            .ok_or_else(|| EngineError::BranchNotFound { id: id.to_string() })
    }
}
