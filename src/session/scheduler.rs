//! Pacing and deferred-action scheduling
//!
//! Some transitions only apply after a short pacing delay (the gate scan,
//! the wristband upgrade, the shake signal, the quiz advance). The session
//! queues them here against a generation counter; switching simulations or
//! resetting bumps the generation, so anything still pending from the old
//! mount is silently dropped instead of firing against fresh state.
//!
//! The clock is injectable so tests drive the queue without real waiting.

use crate::simulators::DeferredAction;
use crate::types::PacingConfig;
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Source of the current time, injectable for tests
pub trait Clock: fmt::Debug {
    /// The current time
    fn now(&self) -> DateTime<Utc>;

    /// Block (or pretend to) until the deadline has passed
    fn wait_until(&self, deadline: DateTime<Utc>);
}

/// Wall-clock time; waiting really sleeps
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn wait_until(&self, deadline: DateTime<Utc>) {
        let remaining = deadline - Utc::now();
        if let Ok(duration) = remaining.to_std() {
            std::thread::sleep(duration);
        }
    }
}

/// Manually advanced clock for tests and scripted runs
///
/// Clones share the same underlying instant, so a test can keep a handle
/// while the session owns the clock.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a manual clock starting at the given instant
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn wait_until(&self, deadline: DateTime<Utc>) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

/// Runtime pacing delays, resolved from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    verify_delay: Duration,
    upgrade_delay: Duration,
    shake_delay: Duration,
    advance_delay: Duration,
}

impl Pacing {
    /// Resolve pacing from its configuration
    pub fn from_config(config: &PacingConfig) -> Self {
        Self {
            verify_delay: Duration::milliseconds(config.verify_delay_ms as i64),
            upgrade_delay: Duration::milliseconds(config.upgrade_delay_ms as i64),
            shake_delay: Duration::milliseconds(config.shake_delay_ms as i64),
            advance_delay: Duration::milliseconds(config.advance_delay_ms as i64),
        }
    }

    /// Pacing with every delay removed
    pub fn instant() -> Self {
        Self::from_config(&PacingConfig::instant())
    }

    /// The delay that applies to a deferred action
    pub fn delay_for(&self, action: DeferredAction) -> Duration {
        match action {
            DeferredAction::CompleteVerification => self.verify_delay,
            DeferredAction::CompleteUpgrade => self.upgrade_delay,
            DeferredAction::ClearShake => self.shake_delay,
            DeferredAction::AdvanceQuestion => self.advance_delay,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_config(&PacingConfig::default())
    }
}

/// One scheduled entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    due: DateTime<Utc>,
    generation: u64,
    action: DeferredAction,
}

/// Queue of deferred actions with generation-based invalidation
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<QueueEntry>,
}

impl DeferredQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Schedule an action under the given generation
    pub fn schedule(&mut self, due: DateTime<Utc>, generation: u64, action: DeferredAction) {
        debug!("Scheduling {} (generation {}) for {}", action, generation, due);
        self.entries.push(QueueEntry { due, generation, action });
    }

    /// Remove and return every matured action of the current generation
    ///
    /// Matured entries from older generations are dropped without firing;
    /// their simulator no longer exists.
    pub fn drain_due(&mut self, now: DateTime<Utc>, current_generation: u64) -> Vec<DeferredAction> {
        let mut matured: Vec<QueueEntry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due > now {
                return true;
            }
            if entry.generation == current_generation {
                matured.push(*entry);
            } else {
                debug!("Dropping stale {} from generation {}", entry.action, entry.generation);
            }
            false
        });

        matured.sort_by_key(|entry| entry.due);
        matured.into_iter().map(|entry| entry.action).collect()
    }

    /// Earliest due time among entries of the current generation
    pub fn next_due(&self, current_generation: u64) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .filter(|entry| entry.generation == current_generation)
            .map(|entry| entry.due)
            .min()
    }

    /// Number of pending entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
