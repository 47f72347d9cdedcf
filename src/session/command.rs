//! The session command grammar
//!
//! One command per line. Session commands work everywhere; simulator
//! commands only apply to the simulation they belong to, and addressing the
//! wrong one is a validation failure, not a fault.

use crate::types::{AccessArea, LoginMode, PolicyStrategy, SimulatorKind, TimeOfDay};
use std::fmt;
use std::str::FromStr;

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to another simulation, discarding current state
    Switch(SimulatorKind),
    /// List the available simulations
    List,
    /// Render the mounted simulation
    Show,
    /// Re-mount the current simulation in its initial state
    Reset,
    /// Let every pending pacing delay elapse
    Wait,
    /// Show the command reference
    Help,
    /// End the session
    Quit,

    /// Analogy: show ID at the gate
    Verify,
    /// Analogy: attempt to enter an area
    Enter(AccessArea),
    /// Analogy: request the VIP upgrade
    Upgrade,

    /// Factors: select an authentication mode
    Mode(LoginMode),
    /// Factors: submit the password
    Password(String),
    /// Factors: submit the one-time code
    Code(String),
    /// Factors: restart the flow keeping the mode
    Restart,

    /// Rbac or Strategies: select a role, resolved against the mounted
    /// simulation (the sandbox and the policy engine own different role
    /// vocabularies)
    Role(String),
    /// Rbac: attempt a dashboard action
    Action(String),

    /// Jwt: toggle payload tampering
    Tamper,

    /// Strategies: select a policy strategy
    Strategy(PolicyStrategy),
    /// Strategies: select the time attribute
    Time(TimeOfDay),

    /// Quiz: answer the current question (1-based option number)
    Answer(usize),
}

/// Command reference printed by `help`
pub const HELP_TEXT: &str = "\
Session commands:
  list                     List the available simulations
  switch <simulation>      Switch simulation (discards current state)
  show                     Render the current simulation
  reset                    Restart the current simulation
  wait                     Let pending delays elapse
  help                     Show this reference
  quit                     End the session

Analogy:      verify | enter <general|backstage> | upgrade
Factors:      mode <single|multi> | password <text> | code <digits> | restart
RBAC:         role <intern|editor|admin> | action <view|edit|delete>
JWT:          tamper
Strategies:   strategy <rbac|abac> | role <manager|intern> | time <day|night>
Quiz:         answer <1-3>";

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn require_arg<'a>(rest: &'a str, name: &str) -> Result<&'a str, String> {
            if rest.is_empty() {
                Err(format!("'{}' needs an argument; see 'help'", name))
            } else {
                Ok(rest)
            }
        }

        let trimmed = s.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        match keyword.to_lowercase().as_str() {
            "switch" | "goto" => Ok(Command::Switch(require_arg(rest, "switch")?.parse()?)),
            "list" | "simulations" => Ok(Command::List),
            "show" | "render" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "wait" => Ok(Command::Wait),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),

            "verify" | "id" => Ok(Command::Verify),
            "enter" => Ok(Command::Enter(require_arg(rest, "enter")?.parse()?)),
            "upgrade" => Ok(Command::Upgrade),

            "mode" => Ok(Command::Mode(require_arg(rest, "mode")?.parse()?)),
            "password" | "login" => Ok(Command::Password(require_arg(rest, "password")?.to_string())),
            "code" => Ok(Command::Code(require_arg(rest, "code")?.to_string())),
            "restart" => Ok(Command::Restart),

            "role" => Ok(Command::Role(require_arg(rest, "role")?.to_string())),
            "action" => Ok(Command::Action(require_arg(rest, "action")?.to_string())),

            "tamper" => Ok(Command::Tamper),

            "strategy" => Ok(Command::Strategy(require_arg(rest, "strategy")?.parse()?)),
            "time" => Ok(Command::Time(require_arg(rest, "time")?.parse()?)),

            "answer" => {
                let number: usize = require_arg(rest, "answer")?
                    .parse()
                    .map_err(|_| format!("'answer' needs a number, got '{}'", rest))?;
                if number == 0 {
                    return Err("Options are numbered from 1".to_string());
                }
                Ok(Command::Answer(number - 1))
            }

            "" => Err("Empty command; see 'help'".to_string()),
            _ => Err(format!("Unknown command: {} (see 'help')", keyword)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Switch(kind) => write!(f, "switch {}", kind),
            Command::List => write!(f, "list"),
            Command::Show => write!(f, "show"),
            Command::Reset => write!(f, "reset"),
            Command::Wait => write!(f, "wait"),
            Command::Help => write!(f, "help"),
            Command::Quit => write!(f, "quit"),
            Command::Verify => write!(f, "verify"),
            Command::Enter(AccessArea::General) => write!(f, "enter general"),
            Command::Enter(AccessArea::Backstage) => write!(f, "enter backstage"),
            Command::Upgrade => write!(f, "upgrade"),
            Command::Mode(LoginMode::SingleFactor) => write!(f, "mode single"),
            Command::Mode(LoginMode::MultiFactor) => write!(f, "mode multi"),
            Command::Password(_) => write!(f, "password <redacted>"),
            Command::Code(code) => write!(f, "code {}", code),
            Command::Restart => write!(f, "restart"),
            Command::Role(role) => write!(f, "role {}", role),
            Command::Action(action) => write!(f, "action {}", action),
            Command::Tamper => write!(f, "tamper"),
            Command::Strategy(PolicyStrategy::Rbac) => write!(f, "strategy rbac"),
            Command::Strategy(PolicyStrategy::Abac) => write!(f, "strategy abac"),
            Command::Time(TimeOfDay::Day) => write!(f, "time day"),
            Command::Time(TimeOfDay::Night) => write!(f, "time night"),
            Command::Answer(index) => write!(f, "answer {}", index + 1),
        }
    }
}
