//! Request types for the salon scheduling API.
//!
//! Dates and times stay as strings here so that malformed values reach the
//! engine and come back as `PARSE_ERROR` responses naming the bad field.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, StaffMember};

/// Request body for `POST /slots/occupants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupantsRequest {
    /// Appointments to check.
    pub appointments: Vec<Appointment>,
    /// Slot start time (`HH:mm`).
    pub slot_time: String,
}

/// Request body for `POST /schedule/day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleRequest {
    /// Appointments to place on the grid.
    pub appointments: Vec<Appointment>,
    /// The day to render (`yyyy-MM-dd`).
    pub date: String,
}

/// Request body for `POST /staff/available`.
///
/// The ambient branch comes from the `x-branch-id` header, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The staff roster to filter.
    pub staff: Vec<StaffMember>,
    /// Optional day (`yyyy-MM-dd`); without it only branch scoping applies.
    #[serde(default)]
    pub date: Option<String>,
    /// Optional explicit branch, overriding the session branch.
    #[serde(default)]
    pub branch_id: Option<String>,
}

/// Request body for `POST /loyalty/redeem`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RedemptionRequest {
    /// Points the client wants to spend.
    pub requested: u64,
    /// The client's current balance.
    pub balance: u64,
}

/// Request body for `POST /loyalty/presets`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PresetsRequest {
    /// The client's current balance.
    pub balance: u64,
}
