//! Staff member model and related types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seniority tier of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityTier {
    /// Senior master.
    Senior,
    /// Mid-level master.
    Middle,
    /// Junior master.
    Junior,
}

/// Display labels indexed by tier discriminant.
const SENIORITY_LABELS: [&str; 3] = ["Senior master", "Master", "Junior master"];

impl SeniorityTier {
    /// All tiers, most senior first.
    pub const ALL: [SeniorityTier; 3] = [
        SeniorityTier::Senior,
        SeniorityTier::Middle,
        SeniorityTier::Junior,
    ];

    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        SENIORITY_LABELS[self as usize]
    }
}

/// Working-hours record for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Whether the staff member can be booked on this day.
    pub is_working_day: bool,
}

/// A bookable staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Specialization (e.g. "Hair stylist").
    pub specialization: String,
    /// Optional seniority tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<SeniorityTier>,
    /// Branch affiliation. `None` means the staff member works at every branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    /// Day-specific working-hours records keyed by calendar day.
    #[serde(default)]
    pub working_hours: BTreeMap<NaiveDate, WorkingHours>,
}

impl StaffMember {
    /// Returns the working-hours record for `day`, if one was entered.
    pub fn working_hours_on(&self, day: NaiveDate) -> Option<&WorkingHours> {
        self.working_hours.get(&day)
    }

    /// Returns true unless `day` is explicitly marked as a day off.
    ///
    /// A missing record means the staff member is available.
    pub fn is_working_on(&self, day: NaiveDate) -> bool {
        self.working_hours_on(day)
            .is_none_or(|hours| hours.is_working_day)
    }

    /// Returns true if the staff member works at `branch_id`.
    ///
    /// Staff without a branch affiliation serve every branch.
    pub fn serves_branch(&self, branch_id: &str) -> bool {
        self.branch_id.as_deref().is_none_or(|own| own == branch_id)
    }
}
