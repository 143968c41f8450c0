//! Session-scoped branch selection.
//!
//! The branch a user is working in is explicit session state rather than a
//! process-wide global. A [`BranchSelection`] is created when the session
//! starts, updated when the user switches branch, and handed to the booking
//! views, which turn it into a [`BranchScope`] for the scheduling functions.

use crate::error::{EngineError, EngineResult};
use crate::models::Branch;
use crate::scheduling::BranchScope;

/// The branch currently selected in a user session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchSelection {
    current: Option<String>,
}

impl BranchSelection {
    /// Starts a session with no branch selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with `branch_id` already selected.
    ///
    /// Used when the selection is restored from a request header or a
    /// stored session, where the branch list is not at hand.
    pub fn restored(branch_id: impl Into<String>) -> Self {
        Self {
            current: Some(branch_id.into()),
        }
    }

    /// Returns the selected branch identifier.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Selects `branch`. Inactive branches cannot be selected.
    pub fn select(&mut self, branch: &Branch) -> EngineResult<()> {
        if !branch.active {
            return Err(EngineError::BranchInactive {
                id: branch.id.clone(),
            });
        }
        self.current = Some(branch.id.clone());
        Ok(())
    }

    /// Selects the branch with identifier `id` from `branches`.
    pub fn select_id(&mut self, id: &str, branches: &[Branch]) -> EngineResult<()> {
        let branch = branches
            .iter()
            .find(|branch| branch.id == id)
            .ok_or_else(|| EngineError::BranchNotFound { id: id.to_string() })?;
        self.select(branch)
    }

    /// Clears the selection so that all branches are shown.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Builds the scope for a request, with `explicit` taking precedence.
    pub fn scope<'a>(&'a self, explicit: Option<&'a str>) -> BranchScope<'a> {
        BranchScope::new(explicit, self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BranchColor;

    fn create_branch(id: &str, active: bool) -> Branch {
        Branch {
            id: id.to_string(),
            name: id.to_string(),
            address: "1 Main Street".to_string(),
            active,
            color: BranchColor::Blue,
        }
    }

    #[test]
    fn test_new_selection_is_empty() {
        let selection = BranchSelection::new();
        assert_eq!(selection.current(), None);
        assert_eq!(selection.scope(None).effective_branch(), None);
    }

    #[test]
    fn test_select_active_branch() {
        let mut selection = BranchSelection::new();
        selection.select(&create_branch("central", true)).unwrap();
        assert_eq!(selection.current(), Some("central"));
    }

    #[test]
    fn test_select_inactive_branch_is_rejected() {
        let mut selection = BranchSelection::restored("central");
        let result = selection.select(&create_branch("closed", false));

        assert_eq!(
            result,
            Err(EngineError::BranchInactive {
                id: "closed".to_string()
            })
        );
        assert_eq!(selection.current(), Some("central"));
    }

    #[test]
    fn test_select_id_unknown_branch() {
        let mut selection = BranchSelection::new();
        let branches = vec![create_branch("central", true)];

        assert_eq!(
            selection.select_id("harbour", &branches),
            Err(EngineError::BranchNotFound {
                id: "harbour".to_string()
            })
        );
        selection.select_id("central", &branches).unwrap();
        assert_eq!(selection.current(), Some("central"));
    }

    #[test]
    fn test_clear() {
        let mut selection = BranchSelection::restored("central");
        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_scope_prefers_explicit_branch() {
        let selection = BranchSelection::restored("central");
        assert_eq!(
            selection.scope(Some("riverside")).effective_branch(),
            Some("riverside")
        );
        assert_eq!(selection.scope(None).effective_branch(), Some("central"));
    }
}
