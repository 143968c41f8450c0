//! Branch scoping of staff and resource lists.

use crate::models::StaffMember;

/// The branch filter in effect for a request.
///
/// An explicitly requested branch wins over the ambient session selection.
/// Empty identifiers are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchScope<'a> {
    /// Branch passed explicitly by the caller.
    pub explicit: Option<&'a str>,
    /// Branch currently selected in the user's session.
    pub ambient: Option<&'a str>,
}

impl<'a> BranchScope<'a> {
    /// Creates a scope from an explicit and an ambient branch.
    pub fn new(explicit: Option<&'a str>, ambient: Option<&'a str>) -> Self {
        Self { explicit, ambient }
    }

    /// A scope that lets every staff member through.
    pub fn unscoped() -> Self {
        Self::default()
    }

    /// Returns the branch to filter by, or `None` for no filtering.
    ///
    /// # Example
    ///
    /// ```
    /// use salon_scheduler::scheduling::BranchScope;
    ///
    /// assert_eq!(BranchScope::new(Some("north"), Some("south")).effective_branch(), Some("north"));
    /// assert_eq!(BranchScope::new(None, Some("south")).effective_branch(), Some("south"));
    /// assert_eq!(BranchScope::unscoped().effective_branch(), None);
    /// ```
    pub fn effective_branch(&self) -> Option<&'a str> {
        let present = |id: &&str| !id.is_empty();
        self.explicit
            .filter(present)
            .or_else(|| self.ambient.filter(present))
    }
}

/// Narrows `staff` to the members working at the effective branch.
///
/// Staff without a branch affiliation are always kept. With no effective
/// branch the list is returned unchanged. Input order is preserved.
pub fn scope<'a>(
    staff: &'a [StaffMember],
    explicit_branch: Option<&str>,
    ambient_branch: Option<&str>,
) -> Vec<&'a StaffMember> {
    scope_staff(staff, &BranchScope::new(explicit_branch, ambient_branch))
}

/// Same as [`scope`] with a prepared [`BranchScope`].
pub fn scope_staff<'a>(
    staff: &'a [StaffMember],
    branch_scope: &BranchScope<'_>,
) -> Vec<&'a StaffMember> {
    match branch_scope.effective_branch() {
        None => staff.iter().collect(),
        Some(branch_id) => staff
            .iter()
            .filter(|member| member.serves_branch(branch_id))
            .collect(),
    }
}
