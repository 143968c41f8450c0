//! Branch model and related types.

use serde::{Deserialize, Serialize};

/// Colour tag used to distinguish branches in the calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchColor {
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Pink.
    Pink,
    /// Teal.
    Teal,
}

/// Hex colours indexed by tag discriminant.
const BRANCH_COLOR_HEX: [&str; 6] = [
    "#3b82f6", "#22c55e", "#a855f7", "#f97316", "#ec4899", "#14b8a6",
];

impl BranchColor {
    /// Returns the hex colour used to render this tag.
    ///
    /// # Example
    ///
    /// ```
    /// use salon_scheduler::models::BranchColor;
    ///
    /// assert_eq!(BranchColor::Green.hex(), "#22c55e");
    /// ```
    pub fn hex(self) -> &'static str {
        BRANCH_COLOR_HEX[self as usize]
    }
}

/// A physical salon location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier for the branch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Only active branches can be selected as a scope.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Colour tag.
    pub color: BranchColor,
}

fn default_active() -> bool {
    true
}
