//! Configuration structures for the Auth Academy simulations
//!
//! This module contains the application configuration, its validation logic,
//! and the command line interface used to control the session.

use super::SimulatorKind;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pacing delay defaults, in milliseconds
///
/// The delays exist purely to pace perceived realism; none of them carry
/// correctness. `--instant` zeroes all of them.
pub mod pacing_defaults {
    /// Identity verification scan at the gate
    pub const VERIFY_DELAY_MS: u64 = 1500;

    /// VIP wristband upgrade processing
    pub const UPGRADE_DELAY_MS: u64 = 1000;

    /// Denied-action shake signal lifetime
    pub const SHAKE_DELAY_MS: u64 = 500;

    /// Quiz auto-advance after an answer
    pub const ADVANCE_DELAY_MS: u64 = 1500;

    /// Upper bound accepted for any configured delay
    pub const MAX_DELAY_MS: u64 = 60_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "auth-academy",
    version = "1.0.0",
    about = "Auth Academy - Interactive authentication & authorization simulations",
    long_about = "Runs six interactive simulations that teach the difference between \
authentication (AuthN) and authorization (AuthZ): a festival-gate analogy, a login \
factor simulator, a role-permission sandbox, a token inspector, a policy strategy \
comparison, and a quiz.

EXAMPLES:
    # Start interactively on the first simulation
    auth-academy

    # Start on a specific simulation
    auth-academy --simulation rbac

    # Replay a command script and record a transcript
    auth-academy --script demo.txt --transcript-output run.jsonl

    # Run with all pacing delays removed
    auth-academy --instant

    # Generate a configuration template
    auth-academy --print-config > my-config.json

    # Validate configuration without starting a session
    auth-academy --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Simulation to mount at startup
    #[arg(
        short,
        long,
        help = "Simulation to start on (analogy, factors, rbac, jwt, strategies, quiz)",
        long_help = "Identifier of the simulation mounted when the session starts. \
Default: analogy"
    )]
    pub simulation: Option<String>,

    /// Command script to replay instead of reading stdin interactively
    #[arg(
        long,
        help = "Path to a command script (one command per line)",
        long_help = "Replays the given file as if its lines had been typed at the prompt, \
then exits. Lines starting with '#' are ignored."
    )]
    pub script: Option<String>,

    /// Output path for the interaction transcript
    #[arg(long, help = "Output path for the interaction transcript JSONL file")]
    pub transcript_output: Option<String>,

    /// Remove all pacing delays
    #[arg(
        long,
        help = "Run with zero pacing delays",
        long_help = "Sets every pacing delay to zero so deferred transitions apply on the \
next prompt. Useful for scripted runs and tests."
    )]
    pub instant: bool,

    /// Identity verification delay in milliseconds
    #[arg(long, help = "Identity verification delay in milliseconds")]
    pub verify_delay_ms: Option<u64>,

    /// VIP upgrade delay in milliseconds
    #[arg(long, help = "VIP upgrade delay in milliseconds")]
    pub upgrade_delay_ms: Option<u64>,

    /// Denied-action shake lifetime in milliseconds
    #[arg(long, help = "Denied-action shake lifetime in milliseconds")]
    pub shake_delay_ms: Option<u64>,

    /// Quiz auto-advance delay in milliseconds
    #[arg(long, help = "Quiz auto-advance delay in milliseconds")]
    pub advance_delay_ms: Option<u64>,

    /// List the available simulations and exit
    #[arg(long, help = "List the available simulations and exit")]
    pub list_simulations: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without starting a session
    #[arg(long, help = "Validate configuration without starting a session")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Simulation to mount at startup
    pub simulation: Option<String>,

    /// Output path for the interaction transcript
    pub transcript_output: Option<String>,

    /// Remove all pacing delays
    pub instant: Option<bool>,

    /// Pacing delay overrides
    pub pacing: Option<PacingConfig>,
}

/// Pacing delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Identity verification scan at the gate
    pub verify_delay_ms: u64,

    /// VIP wristband upgrade processing
    pub upgrade_delay_ms: u64,

    /// Denied-action shake signal lifetime
    pub shake_delay_ms: u64,

    /// Quiz auto-advance after an answer
    pub advance_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            verify_delay_ms: pacing_defaults::VERIFY_DELAY_MS,
            upgrade_delay_ms: pacing_defaults::UPGRADE_DELAY_MS,
            shake_delay_ms: pacing_defaults::SHAKE_DELAY_MS,
            advance_delay_ms: pacing_defaults::ADVANCE_DELAY_MS,
        }
    }
}

impl PacingConfig {
    /// Pacing with every delay removed
    pub fn instant() -> Self {
        Self { verify_delay_ms: 0, upgrade_delay_ms: 0, shake_delay_ms: 0, advance_delay_ms: 0 }
    }
}

/// Configuration for an Auth Academy session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulation mounted when the session starts
    pub simulation: SimulatorKind,

    /// Output path for the interaction transcript (JSONL)
    pub transcript_output: Option<String>,

    /// Pacing delays
    pub pacing: PacingConfig,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Unknown simulation identifier
    #[error("Unknown simulation identifier: {0}")]
    UnknownSimulation(String),
}

/// Validation errors for session configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A pacing delay exceeds the accepted upper bound
    #[error("Invalid delay for {field}: {value} ms (must be at most {max} ms)", max = pacing_defaults::MAX_DELAY_MS)]
    InvalidDelay {
        /// Name of the offending pacing field
        field: String,
        /// The rejected delay value
        value: u64,
    },

    /// The transcript output path is empty
    #[error("Transcript output path must not be empty")]
    EmptyTranscriptPath,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulatorKind::Analogy,
            transcript_output: None,
            pacing: PacingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Self::from_config_file(config_file)
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let simulation = match config_file.simulation {
            Some(id) => {
                id.parse::<SimulatorKind>().map_err(|_| ConfigError::UnknownSimulation(id))?
            }
            None => defaults.simulation,
        };

        let mut pacing = config_file.pacing.unwrap_or(defaults.pacing);
        if config_file.instant.unwrap_or(false) {
            pacing = PacingConfig::instant();
        }

        Ok(Self {
            simulation,
            transcript_output: config_file.transcript_output.or(defaults.transcript_output),
            pacing,
        })
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(id) = args.simulation {
            config.simulation =
                id.parse::<SimulatorKind>().map_err(|_| ConfigError::UnknownSimulation(id))?;
        }
        if let Some(path) = args.transcript_output {
            config.transcript_output = Some(path);
        }
        if let Some(value) = args.verify_delay_ms {
            config.pacing.verify_delay_ms = value;
        }
        if let Some(value) = args.upgrade_delay_ms {
            config.pacing.upgrade_delay_ms = value;
        }
        if let Some(value) = args.shake_delay_ms {
            config.pacing.shake_delay_ms = value;
        }
        if let Some(value) = args.advance_delay_ms {
            config.pacing.advance_delay_ms = value;
        }

        // --instant wins over individual delay overrides
        if args.instant {
            config.pacing = PacingConfig::instant();
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let delays = [
            ("verify_delay_ms", self.pacing.verify_delay_ms),
            ("upgrade_delay_ms", self.pacing.upgrade_delay_ms),
            ("shake_delay_ms", self.pacing.shake_delay_ms),
            ("advance_delay_ms", self.pacing.advance_delay_ms),
        ];
        for (field, value) in delays {
            if value > pacing_defaults::MAX_DELAY_MS {
                return Err(ConfigValidationError::InvalidDelay {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if let Some(path) = &self.transcript_output {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyTranscriptPath);
            }
        }

        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
