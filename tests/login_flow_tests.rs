//! Unit tests for the login factor flow
//!
//! The phase only moves forward; the fixed demo code is the sole second
//! factor that authenticates.

use auth_academy::simulators::factors::{LoginPhase, LoginSimulator, DEMO_ACCESS_CODE};
use auth_academy::types::{LoginMode, StatusKind};

/// An empty password never transitions the phase, in either mode
#[test]
fn test_empty_password_never_transitions() {
    for mode in [LoginMode::SingleFactor, LoginMode::MultiFactor] {
        let mut sim = LoginSimulator::new();
        sim.switch_mode(mode);

        sim.submit_credentials("");
        assert_eq!(sim.phase(), LoginPhase::Credentials);
        assert_eq!(sim.status().kind, StatusKind::Error);
        assert!(sim.password().is_empty());
    }
}

/// Single factor goes straight to authenticated
#[test]
fn test_single_factor_path() {
    let mut sim = LoginSimulator::new();
    sim.submit_credentials("anything at all");
    assert_eq!(sim.phase(), LoginPhase::Authenticated);
    assert_eq!(sim.status().kind, StatusKind::Success);
    assert!(sim.status().message.contains("Single Factor"));
}

/// Multi-factor requires the second round trip
#[test]
fn test_multi_factor_path() {
    let mut sim = LoginSimulator::new();
    sim.switch_mode(LoginMode::MultiFactor);

    sim.submit_credentials("anything at all");
    assert_eq!(sim.phase(), LoginPhase::SecondFactor);
    // The demo code is displayed to the learner, like the original does
    assert!(sim.status().message.contains(DEMO_ACCESS_CODE));

    sim.submit_code(DEMO_ACCESS_CODE);
    assert_eq!(sim.phase(), LoginPhase::Authenticated);
    assert!(sim.status().message.contains("Multi-Factor"));
}

/// Only the exact demo code authenticates
#[test]
fn test_only_the_demo_code_authenticates() {
    for wrong in ["", "0000", "12345", "123", "one-two-three-four"] {
        let mut sim = LoginSimulator::new();
        sim.switch_mode(LoginMode::MultiFactor);
        sim.submit_credentials("pw");

        sim.submit_code(wrong);
        assert_eq!(sim.phase(), LoginPhase::SecondFactor, "code {:?} must not pass", wrong);
        assert_eq!(sim.status().kind, StatusKind::Error);
        // The password survives the failed attempt
        assert_eq!(sim.password(), "pw");
    }
}

/// Switching modes always restarts the flow
#[test]
fn test_switch_mode_restarts_unconditionally() {
    let mut sim = LoginSimulator::new();
    sim.switch_mode(LoginMode::MultiFactor);
    sim.submit_credentials("pw");

    // Even mid-flow, selecting a mode goes back to credentials
    sim.switch_mode(LoginMode::SingleFactor);
    assert_eq!(sim.phase(), LoginPhase::Credentials);
    assert!(sim.password().is_empty());
    assert!(sim.code().is_empty());
}

/// The phase never moves backwards without an explicit restart
#[test]
fn test_phase_only_moves_forward() {
    let mut sim = LoginSimulator::new();
    sim.switch_mode(LoginMode::MultiFactor);
    sim.submit_credentials("pw");
    sim.submit_code(DEMO_ACCESS_CODE);
    assert_eq!(sim.phase(), LoginPhase::Authenticated);

    // Late submissions of either factor are ignored
    sim.submit_credentials("other");
    sim.submit_code("9999");
    assert_eq!(sim.phase(), LoginPhase::Authenticated);
}
