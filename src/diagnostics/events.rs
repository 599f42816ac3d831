// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions on the rating card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Clicked a rating option.
    SelectRating {
        /// Identifier of the clicked option.
        id: u8,
    },

    /// Pressed the Submit button.
    SubmitRating,
}

/// State transitions of the rating card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The application window was mounted.
    Started,

    /// A submission was handed to the backend.
    SubmissionStarted {
        /// Candidate rating value.
        value: u8,
    },

    /// The backend accepted the rating.
    SubmissionSucceeded {
        /// Submitted rating value.
        value: u8,
    },

    /// The backend rejected the rating.
    SubmissionFailed,

    /// Submit was pressed with no selection.
    ValidationFailed,
}

/// Warning categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Settings file could not be read.
    ConfigurationIssue,
    /// Other warning not covered by specific categories.
    Other,
}

/// Error categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Submit was pressed with nothing selected.
    Validation,
    /// The submission backend reported a failure.
    SubmissionError,
    /// Internal application error.
    InternalError,
    /// Other error type not covered by specific categories.
    Other,
}

/// A non-critical issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A failed operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction { action: UserAction },

    /// Application state change.
    AppState { state: AppStateEvent },

    /// Non-critical warning.
    Warning { event: WarningEvent },

    /// Critical error.
    Error { event: ErrorEvent },
}
