//! Appointment model and related types.
//!
//! Appointments arrive from the booking layer with their day and clock fields
//! as strings (`yyyy-MM-dd` and `HH:mm`). They are parsed on demand, so a
//! malformed record surfaces as a [`EngineError::ParseError`](crate::error::EngineError)
//! at the point it is used rather than being silently skipped.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::scheduling::{DEFAULT_APPOINTMENT_MINUTES, parse_calendar_day, parse_clock_time};

/// The lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Requested by the client, not yet confirmed by the salon.
    Pending,
    /// Confirmed by the salon.
    Confirmed,
    /// The service has been delivered.
    Completed,
    /// Cancelled by either party.
    Cancelled,
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier for the appointment.
    pub id: String,
    /// The client's display name.
    pub client_name: String,
    /// The booked service.
    pub service_name: String,
    /// The calendar day (`yyyy-MM-dd`).
    pub date: String,
    /// The start time (`HH:mm`, 24-hour).
    pub time: String,
    /// Optional end time (`HH:mm`). Takes precedence over `duration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Optional duration in minutes, used when `end_time` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// The staff member performing the service.
    pub staff_id: String,
    /// The lifecycle state.
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Parses the appointment's calendar day.
    pub fn day(&self) -> EngineResult<NaiveDate> {
        parse_calendar_day(&self.date)
    }

    /// Combines `date` and `time` into the appointment's start.
    pub fn start(&self) -> EngineResult<NaiveDateTime> {
        let day = self.day()?;
        let time = parse_clock_time(&self.time)?;
        Ok(day.and_time(time))
    }

    /// Resolves the appointment's `(start, end)` interval.
    ///
    /// The end is `end_time` on the same day when present, otherwise
    /// `start + duration` minutes, otherwise `start` plus
    /// [`DEFAULT_APPOINTMENT_MINUTES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use salon_scheduler::models::{Appointment, AppointmentStatus};
    ///
    /// let appointment = Appointment {
    ///     id: "apt_001".to_string(),
    ///     client_name: "Anna".to_string(),
    ///     service_name: "Haircut".to_string(),
    ///     date: "2024-06-01".to_string(),
    ///     time: "10:00".to_string(),
    ///     end_time: None,
    ///     duration: None,
    ///     staff_id: "staff_001".to_string(),
    ///     status: AppointmentStatus::Confirmed,
    /// };
    /// let (start, end) = appointment.interval().unwrap();
    /// assert_eq!((end - start).num_minutes(), 60);
    /// ```
    pub fn interval(&self) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
        let start = self.start()?;

        let end = match (&self.end_time, self.duration) {
            (Some(end_time), _) => start.date().and_time(parse_clock_time(end_time)?),
            (None, Some(minutes)) => start + Duration::minutes(i64::from(minutes)),
            (None, None) => start + Duration::minutes(DEFAULT_APPOINTMENT_MINUTES),
        };

        Ok((start, end))
    }

    /// Returns false once the appointment has been cancelled.
    pub fn is_active(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}
