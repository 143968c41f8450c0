//! Scheduling and availability logic for the salon engine.
//!
//! This module contains the pure functions behind the booking views:
//! slot occupancy for the day grid, branch scoping of the staff roster,
//! per-day availability filtering, and loyalty-bonus redemption checks.
//! None of them mutate their inputs or hold state between calls.

mod availability;
mod branch_scope;
mod day_grid;
mod redemption;
mod time_format;
mod time_slot;

pub use availability::available_on;
pub use branch_scope::{BranchScope, scope, scope_staff};
pub use day_grid::{GridSlot, build_day_grid, slot_times};
pub use redemption::{
    CURRENCY_PER_POINT, MINIMUM_REDEMPTION_POINTS, PRESET_AMOUNTS, PresetOption, RedemptionRules,
    ValidAmount, validate_redemption,
};
pub use time_format::{format_clock_time, parse_calendar_day, parse_clock_time};
pub use time_slot::{
    DEFAULT_APPOINTMENT_MINUTES, SLOT_WIDTH_MINUTES, Slot, get_occupants, overlaps, overlaps_at,
};
