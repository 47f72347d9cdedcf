//! Session control: navigation, command dispatch, pacing, transcripts
//!
//! The session is the navigation controller of the original experience: it
//! holds the active simulation, mounts exactly one simulator at a time, and
//! drops the outgoing simulator's state entirely on a switch. Nothing
//! survives a switch except the transcript.
//!
//! # Overview
//!
//! - [`Session`]: owns the mounted simulator and dispatches commands
//! - [`Command`]: the line-oriented command grammar
//! - [`scheduler`]: injectable clock, pacing delays, deferred-action queue
//! - [`transcript`]: optional JSONL record of every interaction
//! - [`LoggingConfig`]: tracing setup
//! - [`AcademyError`]: systemic failures (domain denials are status lines)

pub mod command;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod transcript;

pub use command::{Command, HELP_TEXT};
pub use error::{AcademyError, AcademyResult};
pub use logging::LoggingConfig;
pub use scheduler::{Clock, DeferredQueue, ManualClock, Pacing, SystemClock};
pub use transcript::{InteractionEvent, TranscriptWriter};

use crate::render::views;
use crate::render::Card;
use crate::simulators::analogy::AnalogySimulator;
use crate::simulators::factors::LoginSimulator;
use crate::simulators::quiz::QuizSimulator;
use crate::simulators::rbac::RbacSimulator;
use crate::simulators::strategies::PolicySimulator;
use crate::simulators::token::TokenInspector;
use crate::simulators::DeferredAction;
use crate::types::{AppConfig, ResourceAction, Role, SessionId, SimulatorKind, SubjectRole};
use tracing::{debug, info};

/// The one simulator currently mounted by the session
#[derive(Debug)]
enum Mounted {
    Analogy(AnalogySimulator),
    Factors(LoginSimulator),
    Rbac(RbacSimulator),
    Jwt(TokenInspector),
    Strategies(PolicySimulator),
    Quiz(QuizSimulator),
}

impl Mounted {
    /// Mount a fresh simulator of the given kind
    fn mount(kind: SimulatorKind) -> Self {
        match kind {
            SimulatorKind::Analogy => Mounted::Analogy(AnalogySimulator::new()),
            SimulatorKind::Factors => Mounted::Factors(LoginSimulator::new()),
            SimulatorKind::Rbac => Mounted::Rbac(RbacSimulator::new()),
            SimulatorKind::Jwt => Mounted::Jwt(TokenInspector::new()),
            SimulatorKind::Strategies => Mounted::Strategies(PolicySimulator::new()),
            SimulatorKind::Quiz => Mounted::Quiz(QuizSimulator::new()),
        }
    }

    fn kind(&self) -> SimulatorKind {
        match self {
            Mounted::Analogy(_) => SimulatorKind::Analogy,
            Mounted::Factors(_) => SimulatorKind::Factors,
            Mounted::Rbac(_) => SimulatorKind::Rbac,
            Mounted::Jwt(_) => SimulatorKind::Jwt,
            Mounted::Strategies(_) => SimulatorKind::Strategies,
            Mounted::Quiz(_) => SimulatorKind::Quiz,
        }
    }

    fn card(&self) -> Card {
        match self {
            Mounted::Analogy(sim) => views::analogy_card(sim),
            Mounted::Factors(sim) => views::factors_card(sim),
            Mounted::Rbac(sim) => views::rbac_card(sim),
            Mounted::Jwt(sim) => views::token_card(sim),
            Mounted::Strategies(sim) => views::strategies_card(sim),
            Mounted::Quiz(sim) => views::quiz_card(sim),
        }
    }
}

/// What the session has to say back after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Text to show the user; may be empty for skipped lines
    pub text: String,
    /// Whether the session should end
    pub quit: bool,
}

impl Feedback {
    fn say(text: impl Into<String>) -> Self {
        Self { text: text.into(), quit: false }
    }

    fn none() -> Self {
        Self { text: String::new(), quit: false }
    }

    fn quit() -> Self {
        Self { text: "Goodbye!".to_string(), quit: true }
    }
}

/// The interactive session driving one simulator at a time
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    mounted: Mounted,
    pacing: Pacing,
    clock: Box<dyn Clock>,
    queue: DeferredQueue,
    generation: u64,
    sequence: u64,
    transcript: Option<TranscriptWriter>,
}

impl Session {
    /// Create a session from validated configuration with the system clock
    pub fn new(config: &AppConfig) -> AcademyResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a session with an injected clock (tests, scripted runs)
    pub fn with_clock(config: &AppConfig, clock: Box<dyn Clock>) -> AcademyResult<Self> {
        let transcript = match &config.transcript_output {
            Some(path) => Some(TranscriptWriter::create(path)?),
            None => None,
        };

        let id = SessionId::new();
        info!("Starting session {} on simulation '{}'", id, config.simulation);

        Ok(Self {
            id,
            mounted: Mounted::mount(config.simulation),
            pacing: Pacing::from_config(&config.pacing),
            clock,
            queue: DeferredQueue::new(),
            generation: 0,
            sequence: 0,
            transcript,
        })
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The currently mounted simulation
    pub fn active(&self) -> SimulatorKind {
        self.mounted.kind()
    }

    /// Render the mounted simulation
    pub fn render(&self) -> Card {
        self.mounted.card()
    }

    /// Number of pending deferred actions (stale ones included)
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    /// Apply every deferred action whose delay has elapsed
    pub fn pump(&mut self) {
        let matured = self.queue.drain_due(self.clock.now(), self.generation);
        for action in matured {
            debug!("Applying deferred action: {}", action);
            self.apply_deferred(action);
        }
    }

    /// Execute one input line: pump, parse, dispatch, record
    ///
    /// Empty lines and `#` comments are skipped. Parse failures come back as
    /// feedback, not errors; only systemic problems (transcript I/O) are
    /// `Err`.
    pub fn handle_line(&mut self, line: &str) -> AcademyResult<Feedback> {
        self.pump();

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Feedback::none());
        }

        let simulator = self.active();
        let (command_text, feedback) = match trimmed.parse::<Command>() {
            Ok(command) => {
                let text = command.to_string();
                (text, self.execute(command))
            }
            Err(message) => (trimmed.to_string(), Feedback::say(message)),
        };

        self.record(simulator, &command_text, &feedback)?;
        Ok(feedback)
    }

    /// Dispatch a parsed command
    fn execute(&mut self, command: Command) -> Feedback {
        match command {
            Command::List => Feedback::say(views::navigation_card(self.active()).to_string()),
            Command::Show => Feedback::say(self.render().to_string()),
            Command::Help => Feedback::say(HELP_TEXT),
            Command::Quit => Feedback::quit(),
            Command::Switch(kind) => self.switch(kind),
            Command::Reset => {
                let kind = self.active();
                self.remount(kind);
                Feedback::say(format!("Simulation '{}' reset to its initial state.", kind))
            }
            Command::Wait => self.wait(),

            Command::Verify => self.with_analogy(|sim| sim.verify_identity()),
            Command::Enter(area) => {
                if let Mounted::Analogy(sim) = &mut self.mounted {
                    sim.attempt_access(area);
                    Feedback::say(sim.status().to_string())
                } else {
                    self.wrong_simulator(SimulatorKind::Analogy)
                }
            }
            Command::Upgrade => self.with_analogy(|sim| sim.upgrade()),

            Command::Mode(mode) => {
                if let Mounted::Factors(sim) = &mut self.mounted {
                    sim.switch_mode(mode);
                    Feedback::say(format!("Mode set to {}; flow restarted.", mode))
                } else {
                    self.wrong_simulator(SimulatorKind::Factors)
                }
            }
            Command::Password(password) => {
                if let Mounted::Factors(sim) = &mut self.mounted {
                    sim.submit_credentials(&password);
                    Feedback::say(sim.status().to_string())
                } else {
                    self.wrong_simulator(SimulatorKind::Factors)
                }
            }
            Command::Code(code) => {
                if let Mounted::Factors(sim) = &mut self.mounted {
                    sim.submit_code(&code);
                    Feedback::say(sim.status().to_string())
                } else {
                    self.wrong_simulator(SimulatorKind::Factors)
                }
            }
            Command::Restart => {
                if let Mounted::Factors(sim) = &mut self.mounted {
                    sim.restart();
                    Feedback::say("Login flow restarted.")
                } else {
                    self.wrong_simulator(SimulatorKind::Factors)
                }
            }

            Command::Role(raw) => self.set_role(&raw),
            Command::Action(raw) => self.perform_action(&raw),

            Command::Tamper => {
                if let Mounted::Jwt(sim) = &mut self.mounted {
                    sim.toggle_tamper();
                    Feedback::say(format!("Verdict: {}", sim.verdict()))
                } else {
                    self.wrong_simulator(SimulatorKind::Jwt)
                }
            }

            Command::Strategy(strategy) => {
                if let Mounted::Strategies(sim) = &mut self.mounted {
                    sim.set_strategy(strategy);
                    Feedback::say(Self::decision_line(sim))
                } else {
                    self.wrong_simulator(SimulatorKind::Strategies)
                }
            }
            Command::Time(time) => {
                if let Mounted::Strategies(sim) = &mut self.mounted {
                    sim.set_time(time);
                    Feedback::say(Self::decision_line(sim))
                } else {
                    self.wrong_simulator(SimulatorKind::Strategies)
                }
            }

            Command::Answer(index) => self.answer(index),
        }
    }

    /// Switch to another simulation, discarding the current state
    fn switch(&mut self, kind: SimulatorKind) -> Feedback {
        if kind == self.active() {
            return Feedback::say(format!("Already on '{}'.", kind));
        }
        self.remount(kind);
        Feedback::say(format!("Switched to '{}' - {}.", kind, kind.label()))
    }

    /// Mount a fresh simulator, invalidating everything still pending
    fn remount(&mut self, kind: SimulatorKind) {
        self.generation += 1;
        self.mounted = Mounted::mount(kind);
        debug!("Mounted '{}' (generation {})", kind, self.generation);
    }

    /// Let every pending delay elapse, then apply the matured actions
    fn wait(&mut self) -> Feedback {
        if self.queue.next_due(self.generation).is_none() {
            return Feedback::say("Nothing pending.");
        }
        while let Some(due) = self.queue.next_due(self.generation) {
            self.clock.wait_until(due);
            self.pump();
        }
        Feedback::say("Pending transitions applied.")
    }

    /// Run an analogy operation that may schedule a deferred action
    fn with_analogy(
        &mut self,
        op: impl FnOnce(&mut AnalogySimulator) -> Option<DeferredAction>,
    ) -> Feedback {
        if let Mounted::Analogy(sim) = &mut self.mounted {
            let deferred = op(sim);
            let feedback = Feedback::say(sim.status().to_string());
            if let Some(action) = deferred {
                self.schedule(action);
            }
            feedback
        } else {
            self.wrong_simulator(SimulatorKind::Analogy)
        }
    }

    /// Resolve a raw role name against whichever simulator is mounted
    fn set_role(&mut self, raw: &str) -> Feedback {
        match &mut self.mounted {
            Mounted::Rbac(sim) => match raw.parse::<Role>() {
                Ok(role) => {
                    sim.set_role(role);
                    Feedback::say(format!("Current Role: {}", role))
                }
                Err(message) => Feedback::say(message),
            },
            Mounted::Strategies(sim) => match raw.parse::<SubjectRole>() {
                Ok(role) => {
                    sim.set_role(role);
                    Feedback::say(Self::decision_line(sim))
                }
                Err(message) => Feedback::say(message),
            },
            _ => Feedback::say(format!(
                "'role' applies to '{}' or '{}'; you are on '{}'.",
                SimulatorKind::Rbac,
                SimulatorKind::Strategies,
                self.active()
            )),
        }
    }

    /// Evaluate a dashboard action in the sandbox
    fn perform_action(&mut self, raw: &str) -> Feedback {
        if let Mounted::Rbac(sim) = &mut self.mounted {
            match raw.parse::<ResourceAction>() {
                Ok(action) => {
                    let deferred = sim.perform_action(action);
                    let feedback = Feedback::say(sim.status().to_string());
                    if let Some(pending) = deferred {
                        self.schedule(pending);
                    }
                    feedback
                }
                Err(message) => Feedback::say(message),
            }
        } else {
            self.wrong_simulator(SimulatorKind::Rbac)
        }
    }

    /// Lock in a quiz answer
    fn answer(&mut self, index: usize) -> Feedback {
        if let Mounted::Quiz(sim) = &mut self.mounted {
            if sim.completed() {
                return Feedback::say(format!(
                    "Quiz Complete! You scored {} out of {}. Use 'reset' to try again.",
                    sim.score(),
                    sim.total_questions()
                ));
            }
            match sim.select_option(index) {
                Some(pending) => {
                    let verdict = match sim.selection_correct() {
                        Some(true) => "Correct!",
                        _ => "Not quite.",
                    };
                    let feedback =
                        Feedback::say(format!("{} Advancing to the next question...", verdict));
                    self.schedule(pending);
                    feedback
                }
                None => {
                    if sim.selected().is_some() {
                        Feedback::say("Answer already locked in; the first answer is final.")
                    } else {
                        Feedback::say("No such option; see 'show'.")
                    }
                }
            }
        } else {
            self.wrong_simulator(SimulatorKind::Quiz)
        }
    }

    /// Queue a deferred action under the current generation
    fn schedule(&mut self, action: DeferredAction) {
        let due = self.clock.now() + self.pacing.delay_for(action);
        self.queue.schedule(due, self.generation, action);
    }

    /// Route a matured deferred action to the mounted simulator
    ///
    /// Generation filtering already dropped stale entries; a kind mismatch
    /// here would mean a scheduling bug, so the action is ignored.
    fn apply_deferred(&mut self, action: DeferredAction) {
        match (action, &mut self.mounted) {
            (DeferredAction::CompleteVerification, Mounted::Analogy(sim)) => {
                sim.complete_verification()
            }
            (DeferredAction::CompleteUpgrade, Mounted::Analogy(sim)) => sim.complete_upgrade(),
            (DeferredAction::ClearShake, Mounted::Rbac(sim)) => sim.clear_shake(),
            (DeferredAction::AdvanceQuestion, Mounted::Quiz(sim)) => sim.advance(),
            (action, mounted) => {
                debug!("Ignoring {} aimed at unmounted simulator ({})", action, mounted.kind())
            }
        }
    }

    fn wrong_simulator(&self, expected: SimulatorKind) -> Feedback {
        Feedback::say(format!(
            "That command belongs to '{}'; you are on '{}'. Use 'switch {}' first.",
            expected,
            self.active(),
            expected
        ))
    }

    fn decision_line(sim: &PolicySimulator) -> String {
        let decision = sim.decision();
        let mut line = if decision.granted {
            format!("ACCESS GRANTED ({}, {}, {})", sim.strategy(), sim.role(), sim.time())
        } else {
            format!("ACCESS DENIED ({}, {}, {})", sim.strategy(), sim.role(), sim.time())
        };
        if let Some(explanation) = decision.explanation {
            line.push(' ');
            line.push_str(explanation);
        }
        line
    }

    /// Append the interaction to the transcript, if one is being written
    fn record(
        &mut self,
        simulator: SimulatorKind,
        command: &str,
        feedback: &Feedback,
    ) -> AcademyResult<()> {
        let Some(writer) = &mut self.transcript else {
            return Ok(());
        };

        let outcome = feedback.text.lines().next().unwrap_or("").to_string();
        let event = InteractionEvent {
            session_id: self.id,
            sequence: self.sequence,
            timestamp: self.clock.now(),
            simulator,
            command: command.to_string(),
            outcome,
        };
        self.sequence += 1;

        writer
            .record(&event)
            .map_err(|e| AcademyError::transcript(format!("{}: {}", writer.path(), e)))
    }

    /// Flush the transcript, if one is being written
    pub fn flush_transcript(&mut self) -> AcademyResult<()> {
        if let Some(writer) = &mut self.transcript {
            writer.flush().map_err(|e| {
                AcademyError::transcript(format!("{}: {}", writer.path(), e))
            })?;
            info!("Transcript flushed: {} events", writer.events_written());
        }
        Ok(())
    }
}
