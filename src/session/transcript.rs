//! Interaction transcript output
//!
//! When requested, the session records one JSONL line per executed command:
//! which simulation was mounted, what the user typed, and what came of it.
//! The file doubles as a replayable record of a teaching session.

use crate::types::{SessionId, SimulatorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// One recorded interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Session the interaction belongs to
    pub session_id: SessionId,
    /// Monotonically increasing position within the session
    pub sequence: u64,
    /// When the command was executed
    pub timestamp: DateTime<Utc>,
    /// Simulation that was mounted at the time
    pub simulator: SimulatorKind,
    /// The command as typed (passwords redacted)
    pub command: String,
    /// Short outcome description
    pub outcome: String,
}

/// Buffered JSONL writer for interaction events
#[derive(Debug)]
pub struct TranscriptWriter {
    writer: BufWriter<File>,
    path: String,
    events_written: u64,
}

impl TranscriptWriter {
    /// Create the transcript file, truncating an existing one
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path_display = path.as_ref().display().to_string();
        let file = File::create(path.as_ref())?;
        info!("Writing interaction transcript to: {}", path_display);
        Ok(Self { writer: BufWriter::new(file), path: path_display, events_written: 0 })
    }

    /// Append one event as a JSON line
    pub fn record(&mut self, event: &InteractionEvent) -> Result<(), std::io::Error> {
        let json_line = serde_json::to_string(event)?;
        writeln!(self.writer, "{}", json_line)?;
        self.events_written += 1;
        Ok(())
    }

    /// Flush buffered lines to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Path of the transcript file
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of events written so far
    pub fn events_written(&self) -> u64 {
        self.events_written
    }
}

impl Drop for TranscriptWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(sequence: u64) -> InteractionEvent {
        InteractionEvent {
            session_id: SessionId::new(),
            sequence,
            timestamp: Utc::now(),
            simulator: SimulatorKind::Rbac,
            command: "action delete".to_string(),
            outcome: "403 FORBIDDEN: intern cannot perform delete.".to_string(),
        }
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = sample_event(7);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InteractionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_event_json_shape() {
        let event = sample_event(0);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"simulator\":\"rbac\""));
        assert!(json.contains("\"sequence\":0"));
        assert!(json.contains("SES_"));
    }

    #[test]
    fn test_writer_counts_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");

        let mut writer = TranscriptWriter::create(&path).unwrap();
        writer.record(&sample_event(0)).unwrap();
        writer.record(&sample_event(1)).unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.events_written(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
