//! Auth Academy
//!
//! An interactive, command-driven learning tool that teaches the difference
//! between authentication (AuthN) and authorization (AuthZ) through six
//! self-contained simulations.
//!
//! # Overview
//!
//! This library provides the simulation engine behind the `auth-academy`
//! binary. Each simulation is a small state machine over an enumerated
//! domain, driven entirely by user commands; there is no backend, no real
//! cryptography, and no persistence of simulator state.
//!
//! ## Simulations
//!
//! - **Analogy**: a music-festival gate separating identity verification
//!   from privilege checks
//! - **Factors**: a login flow comparing single-factor and multi-factor
//!   authentication
//! - **RBAC**: a role-permission sandbox evaluating actions against a fixed
//!   permission table
//! - **JWT**: a token inspector contrasting a valid token with a tampered one
//! - **Strategies**: a policy engine comparing static roles (RBAC) with
//!   attribute-based rules (ABAC)
//! - **Quiz**: a scored knowledge check over a fixed question bank
//!
//! ## Quick Start
//!
//! ```rust
//! use auth_academy::simulators::rbac::{can_perform, RbacSimulator};
//! use auth_academy::types::{ResourceAction, Role};
//!
//! let mut sandbox = RbacSimulator::new();
//! sandbox.set_role(Role::Editor);
//! sandbox.perform_action(ResourceAction::Delete);
//!
//! assert!(!can_perform(Role::Editor, ResourceAction::Delete));
//! assert_eq!(sandbox.last_result().map(|r| r.allowed), Some(false));
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: vocabulary enums, identifiers, and configuration
//! - [`simulators`]: the six simulation state machines
//! - [`render`]: presentational card rendering
//! - [`session`]: navigation, command dispatch, pacing, and transcripts
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod render;
pub mod session;
pub mod simulators;
pub mod types;

// Core types and identifiers
pub use types::{
    AccessArea,
    AppConfig,
    ConfigValidationError,
    LoginMode,
    PolicyStrategy,
    ResourceAction,
    Role,
    // Identifiers
    SessionId,
    // Enums
    SimulatorKind,
    StatusKind,
    SubjectRole,
    TimeOfDay,
    TokenVerdict,
};

// Simulators
pub use simulators::{
    analogy::AnalogySimulator, factors::LoginSimulator, quiz::QuizSimulator, rbac::RbacSimulator,
    strategies::PolicySimulator, token::TokenInspector, DeferredAction, StatusLine,
};

// Rendering
pub use render::{Card, Section};

// Session types and functionality
pub use session::{
    AcademyError, AcademyResult, Clock, Command, DeferredQueue, InteractionEvent, LoggingConfig,
    Pacing, Session, SystemClock, TranscriptWriter,
};
