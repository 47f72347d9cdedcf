//! The six simulation state machines
//!
//! Each simulator is a self-contained state machine over a small enumerated
//! domain. Simulators never communicate with each other; their state is
//! created when the session mounts them and dropped when the session
//! switches away.
//!
//! # Overview
//!
//! - [`analogy`]: festival gate, wristband, and backstage enforcement
//! - [`factors`]: single-factor vs multi-factor login flow
//! - [`rbac`]: role-permission sandbox over a fixed table
//! - [`token`]: valid vs tampered token inspector
//! - [`strategies`]: RBAC vs ABAC policy comparison
//! - [`quiz`]: scored knowledge check with auto-advance
//!
//! Transitions that the original experience pacing delays (the gate scan,
//! the upgrade, the shake signal, the quiz advance) are not applied inline;
//! the simulator returns a [`DeferredAction`] and the session applies it
//! once the delay has elapsed.

pub mod analogy;
pub mod factors;
pub mod quiz;
pub mod rbac;
pub mod strategies;
pub mod token;

use crate::types::StatusKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-facing status line with a severity classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    /// The message shown to the user
    pub message: String,
    /// Severity classification of the message
    pub kind: StatusKind,
}

impl StatusLine {
    /// An empty neutral status line
    pub fn empty() -> Self {
        Self { message: String::new(), kind: StatusKind::Neutral }
    }

    /// Create a neutral status line
    pub fn neutral(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Neutral }
    }

    /// Create a success status line
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Success }
    }

    /// Create an error status line
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Error }
    }

    /// Check whether the status line carries a message
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Waiting for user action...")
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// A transition that applies only after its pacing delay has elapsed
///
/// Simulators return these instead of mutating state inline; the session
/// schedules them against the current generation so that a switch or reset
/// invalidates anything still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeferredAction {
    /// Finish the identity scan at the festival gate
    CompleteVerification,
    /// Finish the VIP wristband upgrade
    CompleteUpgrade,
    /// Clear the denied-action shake signal
    ClearShake,
    /// Advance the quiz to the next question (or completion)
    AdvanceQuestion,
}

impl fmt::Display for DeferredAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeferredAction::CompleteVerification => write!(f, "Complete Verification"),
            DeferredAction::CompleteUpgrade => write!(f, "Complete Upgrade"),
            DeferredAction::ClearShake => write!(f, "Clear Shake"),
            DeferredAction::AdvanceQuestion => write!(f, "Advance Question"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_constructors() {
        let status = StatusLine::empty();
        assert!(status.is_empty());
        assert_eq!(status.kind, StatusKind::Neutral);

        let status = StatusLine::success("Access Granted");
        assert_eq!(status.message, "Access Granted");
        assert_eq!(status.kind, StatusKind::Success);

        let status = StatusLine::error("Access Denied");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(!status.is_empty());
    }

    #[test]
    fn test_status_line_display() {
        assert_eq!(format!("{}", StatusLine::empty()), "Waiting for user action...");
        assert_eq!(format!("{}", StatusLine::neutral("Scanning...")), "[Neutral] Scanning...");
        assert_eq!(format!("{}", StatusLine::error("Stop!")), "[Error] Stop!");
    }

    #[test]
    fn test_deferred_action_serialization() {
        let action = DeferredAction::AdvanceQuestion;
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, "\"advance_question\"");
        let deserialized: DeferredAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
