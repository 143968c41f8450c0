//! Slot occupancy for the booking calendar.
//!
//! A slot is a fixed-width window anchored at a start time on the
//! appointment's day. Slots are never stored; they are computed from the
//! requested start time each time occupancy is checked.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::EngineResult;
use crate::models::Appointment;

use super::time_format::parse_clock_time;

/// Width of a booking slot in minutes.
pub const SLOT_WIDTH_MINUTES: i64 = 30;

/// Duration assumed for an appointment with neither an end time nor a duration.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 60;

/// A computed booking slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The start of the slot.
    pub start: NaiveDateTime,
    /// The end of the slot (`start + SLOT_WIDTH_MINUTES`).
    pub end: NaiveDateTime,
}

impl Slot {
    /// Builds the slot starting at `time` on `day`.
    pub fn starting_at(day: NaiveDate, time: NaiveTime) -> Self {
        let start = day.and_time(time);
        Self {
            start,
            end: start + Duration::minutes(SLOT_WIDTH_MINUTES),
        }
    }

    /// Returns true if `instant` lies within the slot, both ends included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns true if the interval `[start, end]` occupies this slot.
    ///
    /// Occupied when the interval starts inside the slot, ends inside the
    /// slot, or covers the whole slot. Touching endpoints count.
    pub fn is_occupied_by(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.contains(start) || self.contains(end) || (start < self.start && end > self.end)
    }
}

/// Checks whether `appointment` occupies the slot starting at `slot_time`.
///
/// The slot is placed on the appointment's own day.
///
/// # Errors
///
/// Returns [`EngineError::ParseError`](crate::error::EngineError::ParseError)
/// if the appointment's date or times, or `slot_time`, are malformed.
///
/// # Examples
///
/// ```
/// use salon_scheduler::models::{Appointment, AppointmentStatus};
/// use salon_scheduler::scheduling::overlaps;
///
/// let appointment = Appointment {
///     id: "apt_001".to_string(),
///     client_name: "Anna".to_string(),
///     service_name: "Haircut".to_string(),
///     date: "2024-06-01".to_string(),
///     time: "09:30".to_string(),
///     end_time: Some("10:00".to_string()),
///     duration: None,
///     staff_id: "staff_001".to_string(),
///     status: AppointmentStatus::Confirmed,
/// };
///
/// // Ending exactly at the slot start still counts.
/// assert!(overlaps(&appointment, "10:00").unwrap());
/// assert!(!overlaps(&appointment, "11:00").unwrap());
/// ```
pub fn overlaps(appointment: &Appointment, slot_time: &str) -> EngineResult<bool> {
    overlaps_at(appointment, parse_clock_time(slot_time)?)
}

/// Same as [`overlaps`] with an already parsed slot time.
pub fn overlaps_at(appointment: &Appointment, slot_time: NaiveTime) -> EngineResult<bool> {
    let (start, end) = appointment.interval()?;
    let slot = Slot::starting_at(start.date(), slot_time);
    Ok(slot.is_occupied_by(start, end))
}

/// Returns every appointment that occupies the slot starting at `slot_time`.
///
/// Input order is preserved. The first malformed appointment aborts the
/// lookup with its parse error.
pub fn get_occupants<'a>(
    appointments: &'a [Appointment],
    slot_time: &str,
) -> EngineResult<Vec<&'a Appointment>> {
    let slot_time = parse_clock_time(slot_time)?;

    let mut occupants = Vec::new();
    for appointment in appointments {
        if overlaps_at(appointment, slot_time)? {
            occupants.push(appointment);
        }
    }
    Ok(occupants)
}
