//! The policy engine comparator
//!
//! Evaluates the same access request under two authorization strategies:
//! static role-based grants (RBAC) and attribute-based rules (ABAC) that
//! consult the time of day at decision time. The decision is a pure function
//! of the `(strategy, role, time)` triple and is recomputed on every input
//! change; nothing is cached.

use crate::types::{PolicyStrategy, SubjectRole, TimeOfDay};

/// Pure policy evaluation
///
/// Interns are never granted access. Managers always pass under RBAC; under
/// ABAC they pass only during the day.
pub fn has_access(strategy: PolicyStrategy, role: SubjectRole, time: TimeOfDay) -> bool {
    if role == SubjectRole::Intern {
        return false;
    }
    match strategy {
        PolicyStrategy::Rbac => true,
        PolicyStrategy::Abac => time == TimeOfDay::Day,
    }
}

/// The policy rule displayed for a strategy
pub fn policy_text(strategy: PolicyStrategy) -> &'static str {
    match strategy {
        PolicyStrategy::Rbac => "IF user.role == 'Manager' THEN Allow Access",
        PolicyStrategy::Abac => "IF user.role == 'Manager' AND time < 5:00 PM THEN Allow Access",
    }
}

/// A policy decision together with its explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    /// Whether access is granted
    pub granted: bool,
    /// Human-readable explanation when access is denied
    pub explanation: Option<&'static str>,
}

/// State machine for the policy comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySimulator {
    strategy: PolicyStrategy,
    role: SubjectRole,
    time: TimeOfDay,
}

impl PolicySimulator {
    /// Create a fresh comparator: RBAC, manager, daytime
    pub fn new() -> Self {
        Self { strategy: PolicyStrategy::Rbac, role: SubjectRole::Manager, time: TimeOfDay::Day }
    }

    /// Selected strategy
    pub fn strategy(&self) -> PolicyStrategy {
        self.strategy
    }

    /// Selected subject role
    pub fn role(&self) -> SubjectRole {
        self.role
    }

    /// Selected time attribute
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Select a strategy
    pub fn set_strategy(&mut self, strategy: PolicyStrategy) {
        self.strategy = strategy;
    }

    /// Select a subject role
    pub fn set_role(&mut self, role: SubjectRole) {
        self.role = role;
    }

    /// Select the time attribute
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.time = time;
    }

    /// The policy rule text for the selected strategy
    pub fn policy_text(&self) -> &'static str {
        policy_text(self.strategy)
    }

    /// Evaluate the current triple
    pub fn decision(&self) -> PolicyDecision {
        let granted = has_access(self.strategy, self.role, self.time);

        let explanation = if granted {
            None
        } else if self.role == SubjectRole::Intern {
            Some("Denied by Policy: Role is not granted access.")
        } else {
            // Manager denied: only possible under ABAC at night
            Some("Denied by Policy: Outside business hours.")
        };

        PolicyDecision { granted, explanation }
    }
}

impl Default for PolicySimulator {
    fn default() -> Self {
        Self::new()
    }
}
