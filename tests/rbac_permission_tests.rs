//! Unit tests for the role-permission sandbox
//!
//! Tests the fixed permission table exhaustively and the feedback rules
//! around it.

use auth_academy::simulators::rbac::{can_perform, ActionOutcome, RbacSimulator};
use auth_academy::types::{ResourceAction, Role, StatusKind};

/// The full nine-case permission table
#[test]
fn test_permission_table_is_exhaustive() {
    let expectations = [
        (Role::Intern, ResourceAction::View, false),
        (Role::Intern, ResourceAction::Edit, false),
        (Role::Intern, ResourceAction::Delete, false),
        (Role::Editor, ResourceAction::View, true),
        (Role::Editor, ResourceAction::Edit, true),
        (Role::Editor, ResourceAction::Delete, false),
        (Role::Admin, ResourceAction::View, true),
        (Role::Admin, ResourceAction::Edit, true),
        (Role::Admin, ResourceAction::Delete, true),
    ];

    for (role, action, expected) in expectations {
        assert_eq!(
            can_perform(role, action),
            expected,
            "can_perform({}, {}) should be {}",
            role,
            action,
            expected
        );
    }
}

/// Scenario from the lesson: an editor trying to delete
#[test]
fn test_editor_delete_denial_scenario() {
    let mut sim = RbacSimulator::new();
    sim.set_role(Role::Editor);
    sim.perform_action(ResourceAction::Delete);

    assert_eq!(
        sim.last_result(),
        Some(ActionOutcome { action: ResourceAction::Delete, allowed: false })
    );
    assert_eq!(sim.status().kind, StatusKind::Error);
    assert!(sim.status().message.contains("editor"));
    assert!(sim.status().message.contains("delete"));
}

/// Permission is recomputed from the table on every evaluation
#[test]
fn test_no_grant_is_stored_between_evaluations() {
    let mut sim = RbacSimulator::new();
    sim.set_role(Role::Admin);
    sim.perform_action(ResourceAction::Delete);
    assert_eq!(sim.last_result().map(|r| r.allowed), Some(true));

    // Dropping to intern removes everything the admin could do
    sim.set_role(Role::Intern);
    sim.perform_action(ResourceAction::Delete);
    assert_eq!(sim.last_result().map(|r| r.allowed), Some(false));
}

/// Changing roles never leaves stale feedback behind
#[test]
fn test_role_change_clears_stale_feedback() {
    let mut sim = RbacSimulator::new();
    sim.set_role(Role::Editor);
    sim.perform_action(ResourceAction::Delete);
    assert!(sim.last_result().is_some());
    assert!(sim.shaking().is_some());

    sim.set_role(Role::Admin);
    assert_eq!(sim.last_result(), None);
    assert_eq!(sim.shaking(), None);
    assert!(sim.status().is_empty());
}

/// The shake signal is presentation state only
#[test]
fn test_shake_clears_without_touching_the_outcome() {
    let mut sim = RbacSimulator::new();
    sim.perform_action(ResourceAction::View);
    assert_eq!(sim.shaking(), Some(ResourceAction::View));

    sim.clear_shake();
    assert_eq!(sim.shaking(), None);
    assert_eq!(
        sim.last_result(),
        Some(ActionOutcome { action: ResourceAction::View, allowed: false })
    );
}
