// SPDX-License-Identifier: MPL-2.0
//! JSON shape of the `--diagnostics` report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiagnosticEvent, DiagnosticEventKind};

/// Where and when the session ran.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub app_version: String,
    pub os: String,
    pub arch: String,
    /// RFC 3339, UTC.
    pub started_at: String,
    /// RFC 3339, UTC.
    pub generated_at: String,
    pub duration_ms: u64,
    pub event_count: usize,
}

/// One event, stamped in milliseconds since the session started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub at_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub session: SessionInfo,
    pub events: Vec<ReportEntry>,
}

#[allow(clippy::cast_possible_truncation)] // a rating session never spans u64 milliseconds
fn millis_between(start: Instant, end: Instant) -> u64 {
    end.saturating_duration_since(start).as_millis() as u64
}

impl DiagnosticReport {
    /// Builds the report for a session that began at `started` (monotonic)
    /// and `started_utc` (wall clock).
    pub fn from_session<'a>(
        started: Instant,
        started_utc: DateTime<Utc>,
        events: impl IntoIterator<Item = &'a DiagnosticEvent>,
    ) -> Self {
        let events: Vec<ReportEntry> = events
            .into_iter()
            .map(|event| ReportEntry {
                at_ms: millis_between(started, event.timestamp),
                kind: event.kind.clone(),
            })
            .collect();

        let session = SessionInfo {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            started_at: started_utc.to_rfc3339(),
            generated_at: Utc::now().to_rfc3339(),
            duration_ms: millis_between(started, Instant::now()),
            event_count: events.len(),
        };

        Self { session, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::AppStateEvent;
    use std::time::Duration;

    fn state_event(at: Instant, state: AppStateEvent) -> DiagnosticEvent {
        DiagnosticEvent {
            timestamp: at,
            kind: DiagnosticEventKind::AppState { state },
        }
    }

    #[test]
    fn entries_are_stamped_relative_to_session_start() {
        let started = Instant::now();
        let events = [state_event(
            started + Duration::from_millis(1500),
            AppStateEvent::SubmissionFailed,
        )];

        let report = DiagnosticReport::from_session(started, Utc::now(), &events);

        assert_eq!(report.events[0].at_ms, 1500);
        assert_eq!(report.session.event_count, 1);
    }

    #[test]
    fn event_older_than_session_is_stamped_zero() {
        let early = Instant::now();
        let events = [state_event(early, AppStateEvent::Started)];

        let report =
            DiagnosticReport::from_session(early + Duration::from_millis(10), Utc::now(), &events);

        assert_eq!(report.events[0].at_ms, 0);
    }

    #[test]
    fn session_carries_crate_version_and_platform() {
        let report =
            DiagnosticReport::from_session(Instant::now(), Utc::now(), std::iter::empty());
        assert_eq!(report.session.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.session.os, std::env::consts::OS);
        assert!(report.events.is_empty());
    }

    #[test]
    fn entry_flattens_event_kind() {
        let entry = ReportEntry {
            at_ms: 7,
            kind: DiagnosticEventKind::AppState {
                state: AppStateEvent::ValidationFailed,
            },
        };
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["at_ms"], 7);
        assert_eq!(json["type"], "app_state");
        assert_eq!(json["state"]["state"], "validation_failed");
    }
}
