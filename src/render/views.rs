//! Card builders for each simulation
//!
//! Pure functions from simulator state to a [`Card`]. All wording the
//! learner sees while browsing a simulation is assembled here; the
//! simulators themselves only carry their status lines.

use super::{Card, Section};
use crate::simulators::analogy::{AnalogySimulator, AnalogyStep};
use crate::simulators::factors::{LoginPhase, LoginSimulator, DEMO_USERNAME};
use crate::simulators::quiz::{OptionMarking, QuizSimulator};
use crate::simulators::rbac::{can_perform, RbacSimulator};
use crate::simulators::strategies::PolicySimulator;
use crate::simulators::token::TokenInspector;
use crate::types::{ResourceAction, Role, SimulatorKind, TokenVerdict};

/// Navigation card listing every simulation
pub fn navigation_card(active: SimulatorKind) -> Card {
    let lines = SimulatorKind::ALL
        .iter()
        .map(|kind| {
            let marker = if *kind == active { ">" } else { " " };
            format!("{} {:<12} {:<16} {}", marker, kind.id(), kind.label(), kind.description())
        })
        .collect();

    Card::new("AUTH ACADEMY")
        .with_subtitle("Security Fundamentals")
        .with_section(Section::new("Simulations", lines))
}

/// Card for the festival analogy
pub fn analogy_card(sim: &AnalogySimulator) -> Card {
    let gate = match sim.step() {
        AnalogyStep::Unverified => vec!["[ Show ID ]  (command: verify)".to_string()],
        _ => vec!["Identity Verified".to_string(), "ID: Alice".to_string()],
    };

    let mut wristband = vec![sim.wristband().to_string()];
    if sim.step() == AnalogyStep::Verified {
        wristband.push("Upgrade to VIP  (command: upgrade)".to_string());
    }

    let areas = vec![
        "General Stage   (command: enter general)".to_string(),
        "Backstage VIP   (command: enter backstage)".to_string(),
    ];

    Card::new("The Core Difference")
        .with_subtitle("Authentication (Who you are) vs. Authorization (What you can do)")
        .with_section(Section::new("Status", vec![sim.status().to_string()]))
        .with_section(Section::new("The Gate (AuthN)", gate))
        .with_section(Section::new("Your Wristband", wristband))
        .with_section(Section::new("Restricted Areas", areas))
}

/// Card for the login factor simulator
pub fn factors_card(sim: &LoginSimulator) -> Card {
    let mode_line = format!("Mode: {}  (command: mode single|multi)", sim.mode());

    let form = match sim.phase() {
        LoginPhase::Credentials => vec![
            format!("Username: {}", DEMO_USERNAME),
            "Password: ________  (command: password <text>)".to_string(),
        ],
        LoginPhase::SecondFactor => vec![
            "We sent a code to your device.".to_string(),
            "Enter it with: code <digits>".to_string(),
        ],
        LoginPhase::Authenticated => vec![
            "Access Granted".to_string(),
            "Reset Simulator  (command: restart)".to_string(),
        ],
    };

    Card::new("Authentication Factors")
        .with_subtitle("Something you know, something you have, something you are.")
        .with_section(Section::new("Status", vec![sim.status().to_string()]))
        .with_section(Section::new(format!("Login Simulator - {}", sim.phase()), form))
        .with_section(Section::new("Options", vec![mode_line]))
}

/// Card for the role-permission sandbox
pub fn rbac_card(sim: &RbacSimulator) -> Card {
    let role_lines = Role::ALL
        .iter()
        .map(|role| {
            let marker = if *role == sim.role() { ">" } else { " " };
            format!("{} {}", marker, role)
        })
        .collect();

    let dashboard = ResourceAction::ALL
        .iter()
        .map(|action| {
            let lock = if can_perform(sim.role(), *action) { "      " } else { "[lock]" };
            let shake = if sim.shaking() == Some(*action) { "  <shaking>" } else { "" };
            format!("{} {:<8} (command: action {}){}", lock, action, action, shake)
        })
        .collect();

    Card::new("Role-Based Access Control (RBAC)")
        .with_subtitle("Permissions are assigned to roles, not individual users.")
        .with_section(Section::new("Current Role (command: role <name>)", role_lines))
        .with_section(Section::new("Interactive Dashboard", dashboard))
        .with_section(Section::new("Feedback", vec![sim.status().to_string()]))
}

/// Card for the token inspector
pub fn token_card(sim: &TokenInspector) -> Card {
    let parts = sim.parts();
    let encoded = vec![
        parts.compact(),
        String::new(),
        format!("Verdict: {}", sim.verdict()),
        if sim.tampered() {
            "Reset Token  (command: tamper)".to_string()
        } else {
            "Tamper Payload  (command: tamper)".to_string()
        },
    ];

    let mut decoded = vec![
        "Header: Algorithm & Type".to_string(),
        "  { \"alg\": \"HS256\", \"typ\": \"JWT\" }".to_string(),
        "Payload: Data (Claims)".to_string(),
        "  { \"sub\": \"12345\",            <- AuthN (Who)".to_string(),
        "    \"name\": \"Alice\",".to_string(),
        format!("    \"role\": \"{}\" }}    <- AuthZ (What)", sim.role_claim()),
    ];
    if sim.verdict() == TokenVerdict::InvalidSignature {
        decoded.push("  [MODIFIED] payload no longer matches the signature".to_string());
    }
    decoded.push("Signature: Validation".to_string());
    decoded.push(
        "  HMACSHA256(base64UrlEncode(header) + \".\" + base64UrlEncode(payload), secret)"
            .to_string(),
    );

    Card::new("JSON Web Token (JWT)")
        .with_subtitle(
            "A compact, URL-safe means of representing claims to be transferred between \
             two parties.",
        )
        .with_section(Section::new("Encoded (Header.Payload.Signature)", encoded))
        .with_section(Section::new("Decoded", decoded))
}

/// Card for the policy comparator
pub fn strategies_card(sim: &PolicySimulator) -> Card {
    let controls = vec![
        format!("Strategy:  {}  (command: strategy rbac|abac)", sim.strategy()),
        format!("User Role: {}  (command: role manager|intern)", sim.role()),
        format!("Time:      {}  (command: time day|night)", sim.time()),
    ];

    let decision = sim.decision();
    let mut result = vec![if decision.granted {
        "ACCESS GRANTED".to_string()
    } else {
        "ACCESS DENIED".to_string()
    }];
    if let Some(explanation) = decision.explanation {
        result.push(explanation.to_string());
    }

    Card::new("Authorization Strategies")
        .with_subtitle("Comparing Static Roles (RBAC) vs Dynamic Attributes (ABAC).")
        .with_section(Section::new("Context Attributes", controls))
        .with_section(Section::new("Current Policy", vec![sim.policy_text().to_string()]))
        .with_section(Section::new("The Policy Engine", result))
}

/// Card for the quiz
pub fn quiz_card(sim: &QuizSimulator) -> Card {
    let card = Card::new("Knowledge Check")
        .with_subtitle("Test your understanding of AuthN vs AuthZ.");

    let Some(question) = sim.current_question() else {
        return card.with_section(Section::new(
            "Quiz Complete!",
            vec![
                format!("You scored {} out of {}", sim.score(), sim.total_questions()),
                "Try Again  (command: reset)".to_string(),
            ],
        ));
    };

    let progress = format!(
        "Question {} of {}  ({}% done)",
        sim.current_index() + 1,
        sim.total_questions(),
        (sim.progress() * 100.0).round() as u32
    );

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let marker = match sim.marking(idx) {
                OptionMarking::Open => "  ",
                OptionMarking::Correct => "++",
                OptionMarking::WrongSelection => "xx",
                OptionMarking::Dimmed => "..",
            };
            format!("{} {}. {}", marker, idx + 1, option)
        })
        .collect();

    card.with_section(Section::new(progress, vec![question.prompt.to_string()]))
        .with_section(Section::new("Options (command: answer <n>)", options))
}
