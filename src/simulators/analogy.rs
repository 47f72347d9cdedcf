//! The music festival analogy
//!
//! Separates authentication from authorization with a physical analogy:
//! showing ID at the gate proves who you are (AuthN), the wristband you are
//! handed records what you may do (AuthZ), and the staff at each area check
//! the wristband, not the ID.
//!
//! The visitor progresses `Unverified -> Verified -> Vip`; the privilege
//! level never decreases, and a denied access attempt changes nothing but
//! the status line.

use super::{DeferredAction, StatusLine};
use crate::types::AccessArea;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The visitor's progress through the festival
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalogyStep {
    /// Has not shown ID at the gate yet
    Unverified,
    /// Identity verified, general admission wristband
    Verified,
    /// Identity verified and upgraded to a VIP wristband
    Vip,
}

impl AnalogyStep {
    /// Numeric privilege rank; only ever increases
    pub fn rank(&self) -> u8 {
        match self {
            AnalogyStep::Unverified => 0,
            AnalogyStep::Verified => 1,
            AnalogyStep::Vip => 3,
        }
    }
}

impl fmt::Display for AnalogyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalogyStep::Unverified => write!(f, "Unverified"),
            AnalogyStep::Verified => write!(f, "Identity Verified"),
            AnalogyStep::Vip => write!(f, "VIP"),
        }
    }
}

/// The wristband currently on the visitor's arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wristband {
    /// No wristband yet
    None,
    /// General admission
    General,
    /// VIP access
    Vip,
}

impl fmt::Display for Wristband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wristband::None => write!(f, "No wristband yet"),
            Wristband::General => write!(f, "General Admission"),
            Wristband::Vip => write!(f, "VIP Access"),
        }
    }
}

/// State machine for the festival analogy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogySimulator {
    step: AnalogyStep,
    status: StatusLine,
}

impl AnalogySimulator {
    /// Create a fresh simulator at the gate
    pub fn new() -> Self {
        Self { step: AnalogyStep::Unverified, status: StatusLine::empty() }
    }

    /// Current progress step
    pub fn step(&self) -> AnalogyStep {
        self.step
    }

    /// Current status line
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Wristband implied by the current step
    pub fn wristband(&self) -> Wristband {
        match self.step {
            AnalogyStep::Unverified => Wristband::None,
            AnalogyStep::Verified => Wristband::General,
            AnalogyStep::Vip => Wristband::Vip,
        }
    }

    /// Show ID at the gate
    ///
    /// Starts the scan and returns the deferred completion; re-verifying an
    /// already verified visitor only restates the fact.
    pub fn verify_identity(&mut self) -> Option<DeferredAction> {
        if self.step != AnalogyStep::Unverified {
            self.status = StatusLine::success("Identity already verified.");
            return None;
        }

        self.status = StatusLine::neutral("Scanning ID... Verifying Identity...");
        Some(DeferredAction::CompleteVerification)
    }

    /// Apply the deferred end of the identity scan
    pub fn complete_verification(&mut self) {
        if self.step != AnalogyStep::Unverified {
            return;
        }
        self.step = AnalogyStep::Verified;
        self.status =
            StatusLine::success("Identity Verified: Welcome, Alice! (AuthN Complete)");
    }

    /// Attempt to enter an area; enforcement checks the wristband, never the ID
    pub fn attempt_access(&mut self, area: AccessArea) {
        if self.step == AnalogyStep::Unverified {
            self.status =
                StatusLine::error("Stop! You must verify your identity at the gate first.");
            return;
        }

        match area {
            AccessArea::General => {
                self.status = StatusLine::success(
                    "Access Granted: Enjoy the music! (Authorized for General)",
                );
            }
            AccessArea::Backstage => {
                if self.step == AnalogyStep::Vip {
                    self.status = StatusLine::success(
                        "Access Granted: Welcome back stage! (AuthZ Success)",
                    );
                } else {
                    self.status = StatusLine::error(
                        "Access Denied: You do not have VIP permissions. (AuthZ Fail)",
                    );
                }
            }
        }
    }

    /// Request the VIP wristband upgrade
    ///
    /// Only meaningful once verified; an unverified visitor is sent back to
    /// the gate and a VIP visitor is told nothing changed.
    pub fn upgrade(&mut self) -> Option<DeferredAction> {
        match self.step {
            AnalogyStep::Unverified => {
                self.status =
                    StatusLine::error("Stop! You must verify your identity at the gate first.");
                None
            }
            AnalogyStep::Verified => {
                self.status = StatusLine::neutral("Processing upgrade...");
                Some(DeferredAction::CompleteUpgrade)
            }
            AnalogyStep::Vip => {
                self.status = StatusLine::success("You already have VIP access.");
                None
            }
        }
    }

    /// Apply the deferred end of the upgrade
    pub fn complete_upgrade(&mut self) {
        if self.step != AnalogyStep::Verified {
            return;
        }
        self.step = AnalogyStep::Vip;
        self.status = StatusLine::success("Permissions Updated: VIP Access Added.");
    }
}

impl Default for AnalogySimulator {
    fn default() -> Self {
        Self::new()
    }
}
