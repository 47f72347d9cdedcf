//! Enumeration types for the Auth Academy simulations
//!
//! This module contains the enumerated vocabulary used throughout the
//! simulation engine: simulation identifiers, roles, resource actions,
//! login modes, policy attributes, and status classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six available simulations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorKind {
    /// Festival analogy separating AuthN from AuthZ
    Analogy,
    /// Single-factor vs multi-factor login flow
    Factors,
    /// Role-permission sandbox
    Rbac,
    /// Token inspector with a tampered counterpart
    Jwt,
    /// RBAC vs ABAC policy comparison
    Strategies,
    /// Scored knowledge check
    Quiz,
}

impl SimulatorKind {
    /// All simulations in navigation order
    pub const ALL: [SimulatorKind; 6] = [
        SimulatorKind::Analogy,
        SimulatorKind::Factors,
        SimulatorKind::Rbac,
        SimulatorKind::Jwt,
        SimulatorKind::Strategies,
        SimulatorKind::Quiz,
    ];

    /// Stable identifier used on the command line and in transcripts
    pub fn id(&self) -> &'static str {
        match self {
            SimulatorKind::Analogy => "analogy",
            SimulatorKind::Factors => "factors",
            SimulatorKind::Rbac => "rbac",
            SimulatorKind::Jwt => "jwt",
            SimulatorKind::Strategies => "strategies",
            SimulatorKind::Quiz => "quiz",
        }
    }

    /// Human-readable navigation label
    pub fn label(&self) -> &'static str {
        match self {
            SimulatorKind::Analogy => "The Concept",
            SimulatorKind::Factors => "Authentication",
            SimulatorKind::Rbac => "Authorization",
            SimulatorKind::Jwt => "The Token",
            SimulatorKind::Strategies => "Strategies",
            SimulatorKind::Quiz => "Quiz",
        }
    }

    /// Short navigation description
    pub fn description(&self) -> &'static str {
        match self {
            SimulatorKind::Analogy => "AuthN vs AuthZ",
            SimulatorKind::Factors => "Factors & MFA",
            SimulatorKind::Rbac => "RBAC Systems",
            SimulatorKind::Jwt => "JWT Structure",
            SimulatorKind::Strategies => "RBAC vs ABAC",
            SimulatorKind::Quiz => "Test Knowledge",
        }
    }
}

impl fmt::Display for SimulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for SimulatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analogy" | "concept" => Ok(SimulatorKind::Analogy),
            "factors" | "authentication" | "authn" => Ok(SimulatorKind::Factors),
            "rbac" | "authorization" | "authz" => Ok(SimulatorKind::Rbac),
            "jwt" | "token" => Ok(SimulatorKind::Jwt),
            "strategies" | "abac" => Ok(SimulatorKind::Strategies),
            "quiz" => Ok(SimulatorKind::Quiz),
            _ => Err(format!("Unknown simulation: {}", s)),
        }
    }
}

/// Classification of a simulator status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Informational, neither success nor failure
    Neutral,
    /// Operation granted or completed
    Success,
    /// Validation failure or denial
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Neutral => write!(f, "Neutral"),
            StatusKind::Success => write!(f, "Success"),
            StatusKind::Error => write!(f, "Error"),
        }
    }
}

/// Festival areas a visitor can attempt to enter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessArea {
    /// General stage, open to every verified visitor
    General,
    /// Backstage, VIP wristbands only
    Backstage,
}

impl fmt::Display for AccessArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessArea::General => write!(f, "General Stage"),
            AccessArea::Backstage => write!(f, "Backstage VIP"),
        }
    }
}

impl FromStr for AccessArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" | "stage" => Ok(AccessArea::General),
            "backstage" | "vip" => Ok(AccessArea::Backstage),
            _ => Err(format!("Unknown area: {}", s)),
        }
    }
}

/// Roles available in the role-permission sandbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No permissions at all
    Intern,
    /// May view and edit, never delete
    Editor,
    /// Full permissions
    Admin,
}

impl Role {
    /// All sandbox roles in escalation order
    pub const ALL: [Role; 3] = [Role::Intern, Role::Editor, Role::Admin];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Intern => write!(f, "intern"),
            Role::Editor => write!(f, "editor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intern" => Ok(Role::Intern),
            "editor" => Ok(Role::Editor),
            "admin" | "administrator" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Actions that can be attempted in the role-permission sandbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceAction {
    /// Read-only access to reports
    View,
    /// Modify existing content
    Edit,
    /// Permanently remove data
    Delete,
}

impl ResourceAction {
    /// All sandbox actions in dashboard order
    pub const ALL: [ResourceAction; 3] =
        [ResourceAction::View, ResourceAction::Edit, ResourceAction::Delete];
}

impl fmt::Display for ResourceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceAction::View => write!(f, "view"),
            ResourceAction::Edit => write!(f, "edit"),
            ResourceAction::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for ResourceAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" | "read" => Ok(ResourceAction::View),
            "edit" | "modify" => Ok(ResourceAction::Edit),
            "delete" | "remove" => Ok(ResourceAction::Delete),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

/// Authentication modes for the login simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMode {
    /// Password only
    SingleFactor,
    /// Password followed by a one-time code
    MultiFactor,
}

impl fmt::Display for LoginMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginMode::SingleFactor => write!(f, "Single Factor"),
            LoginMode::MultiFactor => write!(f, "Multi-Factor"),
        }
    }
}

impl FromStr for LoginMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "single-factor" | "basic" => Ok(LoginMode::SingleFactor),
            "multi" | "multi-factor" | "mfa" => Ok(LoginMode::MultiFactor),
            _ => Err(format!("Unknown login mode: {}", s)),
        }
    }
}

/// Authorization strategies compared by the policy engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStrategy {
    /// Static role-based grants
    Rbac,
    /// Attribute-based rules evaluated at decision time
    Abac,
}

impl fmt::Display for PolicyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyStrategy::Rbac => write!(f, "RBAC"),
            PolicyStrategy::Abac => write!(f, "ABAC"),
        }
    }
}

impl FromStr for PolicyStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rbac" | "static" => Ok(PolicyStrategy::Rbac),
            "abac" | "dynamic" => Ok(PolicyStrategy::Abac),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

/// Subject roles evaluated by the policy engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectRole {
    /// Holds the role the policies grant access to
    Manager,
    /// Never granted access by either strategy
    Intern,
}

impl fmt::Display for SubjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectRole::Manager => write!(f, "Manager"),
            SubjectRole::Intern => write!(f, "Intern"),
        }
    }
}

impl FromStr for SubjectRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" => Ok(SubjectRole::Manager),
            "intern" => Ok(SubjectRole::Intern),
            _ => Err(format!("Unknown subject role: {}", s)),
        }
    }
}

/// Time-of-day attribute evaluated by ABAC policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Within business hours (2:00 PM in the demo)
    Day,
    /// Outside business hours (10:00 PM in the demo)
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => write!(f, "2:00 PM"),
            TimeOfDay::Night => write!(f, "10:00 PM"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "2pm" | "afternoon" => Ok(TimeOfDay::Day),
            "night" | "10pm" | "evening" => Ok(TimeOfDay::Night),
            _ => Err(format!("Unknown time of day: {}", s)),
        }
    }
}

/// Verdict displayed by the token inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenVerdict {
    /// Signature matches the payload
    Valid,
    /// Payload was modified after signing
    InvalidSignature,
}

impl fmt::Display for TokenVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenVerdict::Valid => write!(f, "VALID TOKEN"),
            TokenVerdict::InvalidSignature => write!(f, "INVALID SIGNATURE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_kind_ids() {
        assert_eq!(SimulatorKind::Analogy.id(), "analogy");
        assert_eq!(SimulatorKind::Jwt.id(), "jwt");
        assert_eq!(SimulatorKind::Strategies.id(), "strategies");

        // Every kind round-trips through its id
        for kind in SimulatorKind::ALL {
            assert_eq!(kind.id().parse::<SimulatorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_simulator_kind_from_str_aliases() {
        assert_eq!("authn".parse::<SimulatorKind>().unwrap(), SimulatorKind::Factors);
        assert_eq!("token".parse::<SimulatorKind>().unwrap(), SimulatorKind::Jwt);
        assert_eq!("QUIZ".parse::<SimulatorKind>().unwrap(), SimulatorKind::Quiz);

        // Test error case
        assert!("invalid".parse::<SimulatorKind>().is_err());
    }

    #[test]
    fn test_simulator_kind_labels() {
        assert_eq!(SimulatorKind::Analogy.label(), "The Concept");
        assert_eq!(SimulatorKind::Analogy.description(), "AuthN vs AuthZ");
        assert_eq!(SimulatorKind::Quiz.label(), "Quiz");
        assert_eq!(SimulatorKind::ALL.len(), 6);
    }

    #[test]
    fn test_role_display_and_from_str() {
        assert_eq!(format!("{}", Role::Editor), "editor");
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("administrator".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Intern".parse::<Role>().unwrap(), Role::Intern);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_resource_action_from_str() {
        assert_eq!("view".parse::<ResourceAction>().unwrap(), ResourceAction::View);
        assert_eq!("read".parse::<ResourceAction>().unwrap(), ResourceAction::View);
        assert_eq!("remove".parse::<ResourceAction>().unwrap(), ResourceAction::Delete);
        assert!("destroy".parse::<ResourceAction>().is_err());
    }

    #[test]
    fn test_login_mode_from_str() {
        assert_eq!("basic".parse::<LoginMode>().unwrap(), LoginMode::SingleFactor);
        assert_eq!("mfa".parse::<LoginMode>().unwrap(), LoginMode::MultiFactor);
        assert_eq!("multi-factor".parse::<LoginMode>().unwrap(), LoginMode::MultiFactor);
        assert!("triple".parse::<LoginMode>().is_err());
    }

    #[test]
    fn test_policy_vocabulary_from_str() {
        assert_eq!("static".parse::<PolicyStrategy>().unwrap(), PolicyStrategy::Rbac);
        assert_eq!("abac".parse::<PolicyStrategy>().unwrap(), PolicyStrategy::Abac);
        assert_eq!("manager".parse::<SubjectRole>().unwrap(), SubjectRole::Manager);
        assert_eq!("night".parse::<TimeOfDay>().unwrap(), TimeOfDay::Night);
        assert!("dawn".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_access_area_from_str() {
        assert_eq!("general".parse::<AccessArea>().unwrap(), AccessArea::General);
        assert_eq!("vip".parse::<AccessArea>().unwrap(), AccessArea::Backstage);
        assert_eq!(format!("{}", AccessArea::Backstage), "Backstage VIP");
        assert!("moshpit".parse::<AccessArea>().is_err());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(format!("{}", TokenVerdict::Valid), "VALID TOKEN");
        assert_eq!(format!("{}", TokenVerdict::InvalidSignature), "INVALID SIGNATURE");
    }

    #[test]
    fn test_enum_serialization() {
        // Enums cross the transcript boundary as lowercase identifiers
        let kind = SimulatorKind::Strategies;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"strategies\"");
        let deserialized: SimulatorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);

        let role = Role::Editor;
        let json = serde_json::to_string(&role).unwrap();
        let deserialized: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, deserialized);

        let mode = LoginMode::MultiFactor;
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, "\"multi-factor\"");
        let deserialized: LoginMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);

        let kind = StatusKind::Error;
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: StatusKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }

    #[test]
    fn test_enum_hash_and_equality() {
        use std::collections::HashSet;

        let mut kinds = HashSet::new();
        kinds.insert(SimulatorKind::Analogy);
        kinds.insert(SimulatorKind::Quiz);
        kinds.insert(SimulatorKind::Analogy); // Duplicate

        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&SimulatorKind::Quiz));
        assert!(!kinds.contains(&SimulatorKind::Jwt));
    }
}
