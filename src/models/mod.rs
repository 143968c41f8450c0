//! Core data models for the salon scheduling engine.
//!
//! These records are owned by the surrounding booking and admin layers;
//! the engine only reads them.

mod appointment;
mod branch;
mod loyalty;
mod staff;

pub use appointment::{Appointment, AppointmentStatus};
pub use branch::{Branch, BranchColor};
pub use loyalty::LoyaltyAccount;
pub use staff::{SeniorityTier, StaffMember, WorkingHours};
