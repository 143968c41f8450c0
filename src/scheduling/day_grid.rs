//! Day grid for the booking calendar.
//!
//! The grid lists every slot between opening and closing time together
//! with the appointments occupying it.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use tracing::trace;

use crate::error::EngineResult;
use crate::models::Appointment;

use super::time_format::format_clock_time;
use super::time_slot::{SLOT_WIDTH_MINUTES, overlaps_at};

/// One row of the day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSlot<'a> {
    /// Slot start time (`HH:mm`).
    pub time: String,
    /// Appointments occupying the slot, in input order.
    pub occupants: Vec<&'a Appointment>,
}

/// Generates slot start times from `open` up to but excluding `close`.
///
/// Returns an empty list when `close` is not after `open`.
///
/// # Example
///
/// ```
/// use salon_scheduler::scheduling::slot_times;
/// use chrono::NaiveTime;
///
/// let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let close = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
/// let times: Vec<String> = slot_times(open, close)
///     .into_iter()
///     .map(|t| t.format("%H:%M").to_string())
///     .collect();
/// assert_eq!(times, vec!["09:00", "09:30", "10:00"]);
/// ```
pub fn slot_times(open: NaiveTime, close: NaiveTime) -> Vec<NaiveTime> {
    let minutes_of = |time: NaiveTime| i64::from(time.num_seconds_from_midnight() / 60);
    let (open_minutes, close_minutes) = (minutes_of(open), minutes_of(close));

    let mut times = Vec::new();
    let mut current = open_minutes;
    while current < close_minutes {
        if let Some(time) =
            NaiveTime::from_hms_opt((current / 60) as u32, (current % 60) as u32, 0)
        {
            times.push(time);
        }
        current += SLOT_WIDTH_MINUTES;
    }
    times
}

/// Builds the day grid for `date`.
///
/// Only active appointments on `date` are placed on the grid.
///
/// # Errors
///
/// Returns a parse error for the first appointment with a malformed
/// date or time.
pub fn build_day_grid<'a>(
    appointments: &'a [Appointment],
    date: NaiveDate,
    open: NaiveTime,
    close: NaiveTime,
) -> EngineResult<Vec<GridSlot<'a>>> {
    let mut on_day = Vec::new();
    for appointment in appointments {
        if appointment.is_active() && appointment.day()? == date {
            on_day.push(appointment);
        }
    }

    let mut grid = Vec::new();
    for time in slot_times(open, close) {
        let mut occupants = Vec::new();
        for &appointment in &on_day {
            if overlaps_at(appointment, time)? {
                occupants.push(appointment);
            }
        }
        grid.push(GridSlot {
            time: format_clock_time(time),
            occupants,
        });
    }

    trace!(
        date = %date,
        appointments = on_day.len(),
        slots = grid.len(),
        "Built day grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_appointment(id: &str, date: &str, time: &str, duration: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_name: "Client".to_string(),
            service_name: "Haircut".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            end_time: None,
            duration: Some(duration),
            staff_id: "staff_001".to_string(),
            status: AppointmentStatus::Confirmed,
        }
    }

    #[test]
    fn test_slot_times_cover_opening_hours() {
        let times = slot_times(time(9, 0), time(21, 0));
        assert_eq!(times.len(), 24);
        assert_eq!(times.first(), Some(&time(9, 0)));
        assert_eq!(times.last(), Some(&time(20, 30)));
    }

    #[test]
    fn test_slot_times_empty_when_closed() {
        assert!(slot_times(time(10, 0), time(10, 0)).is_empty());
        assert!(slot_times(time(18, 0), time(9, 0)).is_empty());
    }

    #[test]
    fn test_slot_times_with_unaligned_close() {
        let times = slot_times(time(9, 0), time(10, 15));
        assert_eq!(times, vec![time(9, 0), time(9, 30), time(10, 0)]);
    }

    #[test]
    fn test_grid_places_appointments_on_their_slots() {
        let appointments = vec![
            create_appointment("a", "2024-06-01", "09:00", 30),
            create_appointment("b", "2024-06-01", "10:15", 30),
        ];

        let grid = build_day_grid(&appointments, make_date("2024-06-01"), time(9, 0), time(11, 0))
            .unwrap();

        let rows: Vec<(&str, Vec<&str>)> = grid
            .iter()
            .map(|slot| {
                (
                    slot.time.as_str(),
                    slot.occupants.iter().map(|a| a.id.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("09:00", vec!["a"]),
                ("09:30", vec!["a"]),
                ("10:00", vec!["b"]),
                ("10:30", vec!["b"]),
            ]
        );
    }

    #[test]
    fn test_grid_ignores_other_days_and_cancelled() {
        let mut cancelled = create_appointment("cancelled", "2024-06-01", "09:00", 60);
        cancelled.status = AppointmentStatus::Cancelled;
        let appointments = vec![
            create_appointment("tomorrow", "2024-06-02", "09:00", 60),
            cancelled,
        ];

        let grid = build_day_grid(&appointments, make_date("2024-06-01"), time(9, 0), time(10, 0))
            .unwrap();
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|slot| slot.occupants.is_empty()));
    }

    #[test]
    fn test_grid_propagates_parse_errors() {
        let appointments = vec![create_appointment("bad", "June 1st", "09:00", 30)];
        assert!(
            build_day_grid(&appointments, make_date("2024-06-01"), time(9, 0), time(10, 0))
                .is_err()
        );
    }
}
