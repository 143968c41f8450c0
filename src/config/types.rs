//! Configuration types for the salon engine.
//!
//! File structures are deserialized from YAML as-is; [`SalonConfig`] holds
//! the validated result with clock times already parsed.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Branch;
use crate::scheduling::{
    CURRENCY_PER_POINT, MINIMUM_REDEMPTION_POINTS, PRESET_AMOUNTS, RedemptionRules,
};

/// Contents of `salon.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalonFile {
    /// The salon's display name.
    pub name: String,
    /// Opening time (`HH:mm`).
    pub opening_time: String,
    /// Closing time (`HH:mm`).
    pub closing_time: String,
}

/// Contents of `loyalty.yaml`. Every field falls back to the engine default.
#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyFile {
    /// Smallest redeemable number of points.
    #[serde(default = "default_minimum_redemption")]
    pub minimum_redemption: u64,
    /// Discount per point in currency units.
    #[serde(default = "default_currency_per_point")]
    pub currency_per_point: Decimal,
    /// Shortcut amounts.
    #[serde(default = "default_presets")]
    pub presets: Vec<u64>,
}

fn default_minimum_redemption() -> u64 {
    MINIMUM_REDEMPTION_POINTS
}

fn default_currency_per_point() -> Decimal {
    CURRENCY_PER_POINT
}

fn default_presets() -> Vec<u64> {
    PRESET_AMOUNTS.to_vec()
}

impl From<LoyaltyFile> for RedemptionRules {
    fn from(file: LoyaltyFile) -> Self {
        RedemptionRules {
            minimum_redemption: file.minimum_redemption,
            currency_per_point: file.currency_per_point,
            presets: file.presets,
        }
    }
}

/// Contents of `branches.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchesFile {
    /// All configured branches, active or not.
    pub branches: Vec<Branch>,
}

/// Salon identity and opening hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalonHours {
    /// The salon's display name.
    pub name: String,
    /// First slot of the day grid.
    pub opening_time: NaiveTime,
    /// The day grid ends before this time.
    pub closing_time: NaiveTime,
}

/// The complete salon configuration.
#[derive(Debug, Clone)]
pub struct SalonConfig {
    salon: SalonHours,
    redemption: RedemptionRules,
    branches: Vec<Branch>,
}

impl SalonConfig {
    /// Creates a new SalonConfig from its component parts.
    pub fn new(salon: SalonHours, redemption: RedemptionRules, branches: Vec<Branch>) -> Self {
        Self {
            salon,
            redemption,
            branches,
        }
    }

    /// Returns the salon name and opening hours.
    pub fn salon(&self) -> &SalonHours {
        &self.salon
    }

    /// Returns the loyalty redemption rules.
    pub fn redemption(&self) -> &RedemptionRules {
        &self.redemption
    }

    /// Returns all branches in configuration order.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }
}
