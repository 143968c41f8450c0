//! Configuration loading for the salon engine.
//!
//! Salon opening hours, loyalty redemption rules and the branch list are
//! read from YAML files. Slot width and the default appointment duration
//! are engine constants and are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use salon_scheduler::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salon").unwrap();
//! println!("Loaded salon: {}", config.salon().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BranchesFile, LoyaltyFile, SalonConfig, SalonFile, SalonHours};
