//! Core types and identifiers for the Auth Academy simulations
//!
//! This module contains the enumerated vocabulary, identifiers, and
//! configuration structures shared across the simulation engine.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based session identifier
//! - **Enums**: type-safe vocabulary for simulations, roles, actions, and
//!   policy attributes
//! - **Configuration**: application configuration with validation and CLI
//!   support
//!
//! # Usage Example
//!
//! ```rust
//! use auth_academy::types::*;
//!
//! let kind: SimulatorKind = "rbac".parse().unwrap();
//! assert_eq!(kind.label(), "Authorization");
//!
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{AppConfig, CliArgs, ConfigFile, ConfigValidationError, PacingConfig};
pub use enums::{
    AccessArea, LoginMode, PolicyStrategy, ResourceAction, Role, SimulatorKind, StatusKind,
    SubjectRole, TimeOfDay, TokenVerdict,
};
pub use identifiers::SessionId;
