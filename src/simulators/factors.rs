//! The login factor simulator
//!
//! A mock login flow contrasting single-factor authentication (password
//! only) with multi-factor authentication (password plus a one-time code).
//! The phase only ever moves forward; switching modes discards the attempt
//! and starts over.
//!
//! The one-time code is a fixed teaching artifact and is displayed to the
//! user in the prompt, the same way the original shows it on screen.

use super::StatusLine;
use crate::types::LoginMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed demo one-time code
///
/// Deliberately public knowledge: the lesson is the extra round-trip, not
/// the secrecy of the code.
pub const DEMO_ACCESS_CODE: &str = "1234";

/// The fixed demo account name shown in the login form
pub const DEMO_USERNAME: &str = "user@example.com";

/// Phase of the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPhase {
    /// Waiting for the password
    Credentials,
    /// Password accepted, waiting for the one-time code
    SecondFactor,
    /// Fully authenticated
    Authenticated,
}

impl fmt::Display for LoginPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginPhase::Credentials => write!(f, "Log In"),
            LoginPhase::SecondFactor => write!(f, "Verify Code"),
            LoginPhase::Authenticated => write!(f, "Access Granted"),
        }
    }
}

/// State machine for the login factor simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSimulator {
    mode: LoginMode,
    phase: LoginPhase,
    password: String,
    code: String,
    status: StatusLine,
}

impl LoginSimulator {
    /// Create a fresh simulator in single-factor mode
    pub fn new() -> Self {
        Self {
            mode: LoginMode::SingleFactor,
            phase: LoginPhase::Credentials,
            password: String::new(),
            code: String::new(),
            status: StatusLine::empty(),
        }
    }

    /// Selected authentication mode
    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    /// Current phase of the flow
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Password entered so far (kept across a failed code attempt)
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Code entered so far
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Current status line
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Select an authentication mode, restarting the flow unconditionally
    pub fn switch_mode(&mut self, mode: LoginMode) {
        self.mode = mode;
        self.restart();
    }

    /// Restart the flow, keeping the selected mode
    pub fn restart(&mut self) {
        self.phase = LoginPhase::Credentials;
        self.password.clear();
        self.code.clear();
        self.status = StatusLine::empty();
    }

    /// Submit the password
    ///
    /// An empty password never transitions the phase. Outside the
    /// credentials phase the submission is ignored.
    pub fn submit_credentials(&mut self, password: &str) {
        if self.phase != LoginPhase::Credentials {
            return;
        }

        if password.is_empty() {
            self.status = StatusLine::error("Password must not be empty.");
            return;
        }

        self.password = password.to_string();
        match self.mode {
            LoginMode::SingleFactor => {
                self.phase = LoginPhase::Authenticated;
                self.status = StatusLine::success(format!(
                    "You have successfully authenticated using {}.",
                    self.mode
                ));
            }
            LoginMode::MultiFactor => {
                self.phase = LoginPhase::SecondFactor;
                self.status = StatusLine::neutral(format!(
                    "We sent a code to your device. Code: {}",
                    DEMO_ACCESS_CODE
                ));
            }
        }
    }

    /// Submit the one-time code
    ///
    /// Only the fixed demo code authenticates; a wrong code keeps the
    /// password and stays in the second-factor phase.
    pub fn submit_code(&mut self, code: &str) {
        if self.phase != LoginPhase::SecondFactor {
            return;
        }

        self.code = code.to_string();
        if code == DEMO_ACCESS_CODE {
            self.phase = LoginPhase::Authenticated;
            self.status = StatusLine::success(format!(
                "You have successfully authenticated using {}.",
                self.mode
            ));
        } else {
            self.status =
                StatusLine::error(format!("Incorrect code. Hint: {}", DEMO_ACCESS_CODE));
        }
    }
}

impl Default for LoginSimulator {
    fn default() -> Self {
        Self::new()
    }
}
