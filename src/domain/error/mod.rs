// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Every variant of [`SubmitError`] is recovered at the submission boundary
//! and turned into a notification; none of them is fatal.

use std::fmt;

/// Message shown when Submit is pressed with nothing selected.
pub const NO_SELECTION_MESSAGE: &str = "You have to select one rating to submit";

/// Generic message for simulated and unexpected failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Submission attempted without an active rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error raised when no option is active.
    #[must_use]
    pub fn no_selection() -> Self {
        Self::new(NO_SELECTION_MESSAGE)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can end a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No rating was selected.
    Validation(ValidationError),

    /// The submission backend rejected the rating.
    SimulatedFailure,

    /// Anything else that went wrong while submitting.
    Unexpected(String),
}

impl SubmitError {
    /// Text presented to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Validation(err) => err.message(),
            SubmitError::SimulatedFailure | SubmitError::Unexpected(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// Whether this error must also be recorded for diagnostics.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, SubmitError::Unexpected(_))
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "Validation error: {err}"),
            SubmitError::SimulatedFailure => write!(f, "Submission rejected"),
            SubmitError::Unexpected(msg) => write!(f, "Unexpected error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Validation(err)
    }
}
