//! Per-day staff availability.

use chrono::NaiveDate;
use tracing::trace;

use crate::models::StaffMember;

use super::branch_scope::{BranchScope, scope_staff};

/// Returns the staff members bookable on `date` within `branch_scope`.
///
/// Branch scoping runs first. A staff member is then dropped only when a
/// working-hours record exists for `date` and marks it as a day off; a
/// missing record means available. Without a date only the branch filter
/// applies. Input order is preserved and nothing is mutated.
///
/// # Examples
///
/// ```
/// use salon_scheduler::models::{StaffMember, WorkingHours};
/// use salon_scheduler::scheduling::{available_on, BranchScope};
/// use chrono::NaiveDate;
/// use std::collections::BTreeMap;
///
/// let day_off = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let mut working_hours = BTreeMap::new();
/// working_hours.insert(day_off, WorkingHours { is_working_day: false });
///
/// let staff = vec![StaffMember {
///     id: "staff_001".to_string(),
///     name: "Elena".to_string(),
///     specialization: "Hair stylist".to_string(),
///     seniority: None,
///     branch_id: None,
///     working_hours,
/// }];
///
/// assert!(available_on(&staff, Some(day_off), &BranchScope::unscoped()).is_empty());
/// assert_eq!(available_on(&staff, day_off.succ_opt(), &BranchScope::unscoped()).len(), 1);
/// ```
pub fn available_on<'a>(
    staff: &'a [StaffMember],
    date: Option<NaiveDate>,
    branch_scope: &BranchScope<'_>,
) -> Vec<&'a StaffMember> {
    let scoped = scope_staff(staff, branch_scope);
    let in_scope = scoped.len();

    let available: Vec<&StaffMember> = match date {
        None => scoped,
        Some(day) => scoped
            .into_iter()
            .filter(|member| member.is_working_on(day))
            .collect(),
    };

    trace!(
        roster = staff.len(),
        in_scope,
        available = available.len(),
        branch = ?branch_scope.effective_branch(),
        date = ?date,
        "Filtered staff availability"
    );

    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkingHours;
    use std::collections::BTreeMap;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_staff(id: &str, branch_id: Option<&str>, days: &[(&str, bool)]) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: id.to_string(),
            specialization: "Hair stylist".to_string(),
            seniority: None,
            branch_id: branch_id.map(str::to_string),
            working_hours: days
                .iter()
                .map(|(day, working)| {
                    (
                        make_date(day),
                        WorkingHours {
                            is_working_day: *working,
                        },
                    )
                })
                .collect(),
        }
    }

    fn ids(staff: &[&StaffMember]) -> Vec<String> {
        staff.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_day_off_excludes_only_that_day() {
        let staff = vec![create_staff("anna", None, &[("2024-06-01", false)])];

        let unscoped = BranchScope::unscoped();

        let on_day_off = available_on(&staff, Some(make_date("2024-06-01")), &unscoped);
        assert!(on_day_off.is_empty());

        let next_day = available_on(&staff, Some(make_date("2024-06-02")), &unscoped);
        assert_eq!(ids(&next_day), vec!["anna"]);
    }

    #[test]
    fn test_missing_record_is_available() {
        let staff = vec![create_staff("anna", None, &[])];
        let result = available_on(&staff, Some(make_date("2024-06-01")), &BranchScope::unscoped());
        assert_eq!(ids(&result), vec!["anna"]);
    }

    #[test]
    fn test_no_date_skips_day_filtering() {
        let staff = vec![
            create_staff("anna", Some("central"), &[("2024-06-01", false)]),
            create_staff("vera", Some("riverside"), &[]),
        ];

        let result = available_on(&staff, None, &BranchScope::new(Some("central"), None));
        assert_eq!(ids(&result), vec!["anna"]);
    }

    #[test]
    fn test_branch_scope_applies_before_day_filter() {
        let staff = vec![
            create_staff("anna", Some("central"), &[("2024-06-01", true)]),
            create_staff("boris", None, &[("2024-06-01", false)]),
            create_staff("vera", Some("riverside"), &[]),
            create_staff("gleb", None, &[]),
        ];

        let result = available_on(
            &staff,
            Some(make_date("2024-06-01")),
            &BranchScope::new(None, Some("central")),
        );
        assert_eq!(ids(&result), vec!["anna", "gleb"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let staff = vec![create_staff("anna", None, &[("2024-06-01", false)])];
        let before = staff.clone();
        let _ = available_on(&staff, Some(make_date("2024-06-01")), &BranchScope::unscoped());
        assert_eq!(staff, before);
    }
}
