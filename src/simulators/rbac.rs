//! The role-permission sandbox
//!
//! Permissions are assigned to roles, not individual users: a fixed table
//! maps each role to the dashboard actions it may perform, and every
//! evaluation recomputes from that table. Nothing is granted per user and
//! no decision is cached.
//!
//! A denied action also raises a short-lived shake signal on the offending
//! button. The shake is presentation state, kept apart from the logical
//! outcome so that permission logic stays timing-free.

use super::{DeferredAction, StatusLine};
use crate::types::{ResourceAction, Role};
use serde::{Deserialize, Serialize};

/// Pure authorization check against the fixed role-permission table
///
/// | role   | view  | edit  | delete |
/// |--------|-------|-------|--------|
/// | intern | false | false | false  |
/// | editor | true  | true  | false  |
/// | admin  | true  | true  | true   |
pub fn can_perform(role: Role, action: ResourceAction) -> bool {
    match role {
        Role::Admin => true,
        Role::Editor => matches!(action, ResourceAction::View | ResourceAction::Edit),
        Role::Intern => false,
    }
}

/// Outcome of the most recent action evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The action that was evaluated
    pub action: ResourceAction,
    /// Whether the current role was allowed to perform it
    pub allowed: bool,
}

/// State machine for the role-permission sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbacSimulator {
    role: Role,
    last_result: Option<ActionOutcome>,
    status: StatusLine,
    shaking: Option<ResourceAction>,
}

impl RbacSimulator {
    /// Create a fresh sandbox with the least-privileged role selected
    pub fn new() -> Self {
        Self { role: Role::Intern, last_result: None, status: StatusLine::empty(), shaking: None }
    }

    /// Currently selected role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Outcome of the most recent evaluation, if any
    pub fn last_result(&self) -> Option<ActionOutcome> {
        self.last_result
    }

    /// Current status line
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Action currently carrying the shake signal, if any
    pub fn shaking(&self) -> Option<ResourceAction> {
        self.shaking
    }

    /// Select a role, immediately discarding feedback from the previous one
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.last_result = None;
        self.status = StatusLine::empty();
        self.shaking = None;
    }

    /// Evaluate an action for the current role
    ///
    /// The decision is recomputed from the permission table on every call.
    /// A denial raises the shake signal and returns its deferred clearing.
    pub fn perform_action(&mut self, action: ResourceAction) -> Option<DeferredAction> {
        let allowed = can_perform(self.role, action);
        self.last_result = Some(ActionOutcome { action, allowed });

        if allowed {
            self.status = StatusLine::success(format!(
                "Success: {} action authorized for {}.",
                action.to_string().to_uppercase(),
                self.role
            ));
            self.shaking = None;
            None
        } else {
            self.status = StatusLine::error(format!(
                "403 FORBIDDEN: {} cannot perform {}.",
                self.role, action
            ));
            self.shaking = Some(action);
            Some(DeferredAction::ClearShake)
        }
    }

    /// Clear the shake signal once its lifetime has elapsed
    pub fn clear_shake(&mut self) {
        self.shaking = None;
    }
}

impl Default for RbacSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatusKind;

    #[test]
    fn test_permission_table() {
        // All nine (role, action) combinations
        assert!(!can_perform(Role::Intern, ResourceAction::View));
        assert!(!can_perform(Role::Intern, ResourceAction::Edit));
        assert!(!can_perform(Role::Intern, ResourceAction::Delete));

        assert!(can_perform(Role::Editor, ResourceAction::View));
        assert!(can_perform(Role::Editor, ResourceAction::Edit));
        assert!(!can_perform(Role::Editor, ResourceAction::Delete));

        assert!(can_perform(Role::Admin, ResourceAction::View));
        assert!(can_perform(Role::Admin, ResourceAction::Edit));
        assert!(can_perform(Role::Admin, ResourceAction::Delete));
    }

    #[test]
    fn test_initial_state() {
        let sim = RbacSimulator::new();
        assert_eq!(sim.role(), Role::Intern);
        assert_eq!(sim.last_result(), None);
        assert_eq!(sim.shaking(), None);
        assert!(sim.status().is_empty());
    }

    #[test]
    fn test_granted_action() {
        let mut sim = RbacSimulator::new();
        sim.set_role(Role::Admin);

        let deferred = sim.perform_action(ResourceAction::Delete);
        assert_eq!(deferred, None);
        assert_eq!(
            sim.last_result(),
            Some(ActionOutcome { action: ResourceAction::Delete, allowed: true })
        );
        assert_eq!(sim.status().kind, StatusKind::Success);
        assert_eq!(sim.shaking(), None);
    }

    #[test]
    fn test_denied_action_raises_shake() {
        let mut sim = RbacSimulator::new();
        sim.set_role(Role::Editor);

        let deferred = sim.perform_action(ResourceAction::Delete);
        assert_eq!(deferred, Some(DeferredAction::ClearShake));
        assert_eq!(
            sim.last_result(),
            Some(ActionOutcome { action: ResourceAction::Delete, allowed: false })
        );
        assert_eq!(sim.shaking(), Some(ResourceAction::Delete));

        // The denial message names both the role and the action
        assert_eq!(sim.status().kind, StatusKind::Error);
        assert!(sim.status().message.contains("editor"));
        assert!(sim.status().message.contains("delete"));

        sim.clear_shake();
        assert_eq!(sim.shaking(), None);
        // Clearing the shake leaves the logical outcome untouched
        assert!(sim.last_result().is_some());
    }

    #[test]
    fn test_role_change_clears_feedback() {
        let mut sim = RbacSimulator::new();
        sim.perform_action(ResourceAction::View);
        assert!(sim.last_result().is_some());

        sim.set_role(Role::Editor);
        assert_eq!(sim.last_result(), None);
        assert_eq!(sim.shaking(), None);
        assert!(sim.status().is_empty());
    }

    #[test]
    fn test_decision_recomputed_per_evaluation() {
        let mut sim = RbacSimulator::new();
        sim.set_role(Role::Editor);
        sim.perform_action(ResourceAction::Edit);
        assert_eq!(sim.last_result().map(|r| r.allowed), Some(true));

        // Same action, different role, opposite outcome
        sim.set_role(Role::Intern);
        sim.perform_action(ResourceAction::Edit);
        assert_eq!(sim.last_result().map(|r| r.allowed), Some(false));
    }

    #[test]
    fn test_granted_action_replaces_stale_shake() {
        let mut sim = RbacSimulator::new();
        sim.set_role(Role::Editor);
        sim.perform_action(ResourceAction::Delete);
        assert!(sim.shaking().is_some());

        sim.perform_action(ResourceAction::View);
        assert_eq!(sim.shaking(), None);
        assert_eq!(sim.last_result().map(|r| r.allowed), Some(true));
    }
}
