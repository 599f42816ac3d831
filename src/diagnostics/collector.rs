// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport, ErrorEvent,
    UserAction, WarningEvent,
};
use crate::config::defaults::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY;
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Sends never block: events are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
///
/// Drains the handle channel into a ring of at most `capacity` events.
/// Once full, each new event evicts the oldest one.
pub struct DiagnosticsCollector {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall clock start, for the report session block.
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a collector keeping the latest `capacity` events.
    ///
    /// A zero capacity is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the event channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.record(event);
        }
    }

    /// Logs a state change directly, bypassing the channel.
    pub fn log_state(&mut self, state: AppStateEvent) {
        self.record(DiagnosticEvent::new(DiagnosticEventKind::AppState { state }));
    }

    fn record(&mut self, event: DiagnosticEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.build_report())?)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.export_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }

    fn build_report(&self) -> DiagnosticReport {
        DiagnosticReport::from_session(
            self.collection_started_at,
            self.collection_started_at_utc,
            &self.events,
        )
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.events.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::SelectRating { id: 2 });
        handle.log_action(UserAction::SubmitRating);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn direct_logging_bypasses_channel() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_state(AppStateEvent::Started);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_ring_evicts_oldest_event() {
        let mut collector = DiagnosticsCollector::new(2);
        collector.log_state(AppStateEvent::Started);
        collector.log_state(AppStateEvent::SubmissionStarted { value: 3 });
        collector.log_state(AppStateEvent::SubmissionFailed);

        let kept: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kept,
            vec![
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::SubmissionStarted { value: 3 }
                },
                DiagnosticEventKind::AppState {
                    state: AppStateEvent::SubmissionFailed
                },
            ]
        );
    }

    #[test]
    fn zero_capacity_still_keeps_latest_event() {
        let mut collector = DiagnosticsCollector::new(0);
        assert_eq!(collector.capacity(), 1);
        collector.log_state(AppStateEvent::Started);
        collector.log_state(AppStateEvent::ValidationFailed);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 50) {
            handle.log_action(UserAction::SubmitRating);
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_contains_events_and_session() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_warning(WarningEvent::new(
            WarningType::ConfigurationIssue,
            "unreadable settings",
        ));
        handle.log_error(ErrorEvent::new(ErrorType::InternalError, "boom"));
        collector.process_pending();

        let json = collector.export_json().expect("export");
        assert!(json.contains("\"event_count\": 2"));
        assert!(json.contains("unreadable settings"));
        assert!(json.contains("internal_error"));
    }

    #[test]
    fn export_to_file_writes_report() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("reports").join("diagnostics.json");
        let mut collector = DiagnosticsCollector::default();
        collector.log_state(AppStateEvent::SubmissionSucceeded { value: 5 });

        collector.export_to_file(&path).expect("export");
        let written = std::fs::read_to_string(&path).expect("read back");
        let report: DiagnosticReport = serde_json::from_str(&written).expect("valid json");
        assert_eq!(report.events.len(), 1);
    }
}
