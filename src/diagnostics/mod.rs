// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events from a rating session are kept in a bounded ring inside
//! [`DiagnosticsCollector`] and exported as a JSON [`DiagnosticReport`].
//! UI code logs through a cloneable [`DiagnosticsHandle`] that never blocks.

mod collector;
mod events;
mod report;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, ReportEntry, SessionInfo};
