// Integration tests exercise the crate's public API. They only have access
// to items marked pub. See the Cargo Targets page of the Cargo Book for
// more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use auth_academy::*;

mod login_flow_tests;
mod rbac_permission_tests;

mod session_navigation_tests;

#[test]
fn test_simulator_kind_navigation_surface() {
    // Six simulations with stable identifiers
    assert_eq!(SimulatorKind::ALL.len(), 6);
    let ids: Vec<&str> = SimulatorKind::ALL.iter().map(|k| k.id()).collect();
    assert_eq!(ids, vec!["analogy", "factors", "rbac", "jwt", "strategies", "quiz"]);

    // Every id parses back to its kind and carries a label and description
    for kind in SimulatorKind::ALL {
        assert_eq!(kind.id().parse::<SimulatorKind>().unwrap(), kind);
        assert!(!kind.label().is_empty());
        assert!(!kind.description().is_empty());
    }
}

#[test]
fn test_session_id_formatting() {
    let id = SessionId::new();
    assert!(id.to_string().starts_with("SES_"));
    assert_ne!(id, SessionId::new());
}

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.simulation, SimulatorKind::Analogy);
}

#[test]
fn test_simulators_reset_bit_for_bit() {
    // A freshly constructed simulator is the documented initial state;
    // Default must agree with new for every simulator
    assert_eq!(AnalogySimulator::default(), AnalogySimulator::new());
    assert_eq!(LoginSimulator::default(), LoginSimulator::new());
    assert_eq!(RbacSimulator::default(), RbacSimulator::new());
    assert_eq!(TokenInspector::default(), TokenInspector::new());
    assert_eq!(PolicySimulator::default(), PolicySimulator::new());
    assert_eq!(QuizSimulator::default(), QuizSimulator::new());
}
