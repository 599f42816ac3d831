// SPDX-License-Identifier: MPL-2.0
//! Submission flow state machine.
//!
//! ```text
//! Form --submit (selection)--> Submitting --success--> Confirmed
//!  ^  \                            |
//!  |   `--submit (none)--> Form    |
//!  `------------failure------------'
//! ```
//!
//! Transitions are pure: they take the current state and the rating options
//! and return the next state plus the side effect the caller must perform.
//! Nothing leaves `Confirmed`.

use crate::domain::error::{SubmitError, ValidationError};
use crate::domain::rating::{RatingOption, RatingSet, SubmittedRating};

/// Text of the pending notification shown while a submission runs.
pub const SUBMITTING_MESSAGE: &str = "Submitting";

/// Text of the notification shown when a submission is accepted.
pub const SUCCESS_MESSAGE: &str = "Successfully rated";

/// Which face of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Rating form is interactive.
    #[default]
    Form,
    /// A submission for `candidate` is in flight.
    Submitting { candidate: RatingOption },
    /// Terminal: the thank-you panel.
    Confirmed(SubmittedRating),
}

impl WidgetState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, WidgetState::Submitting { .. })
    }

    #[must_use]
    pub fn submitted(&self) -> Option<&SubmittedRating> {
        match self {
            WidgetState::Confirmed(rating) => Some(rating),
            _ => None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    SubmitPressed,
    /// The in-flight submission resolved.
    Settled(Result<(), SubmitError>),
}

/// What the user should be told after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submit was pressed without a selection.
    Invalid(ValidationError),
    Succeeded,
    Failed(SubmitError),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Notice::Invalid(err) => err.message(),
            Notice::Succeeded => SUCCESS_MESSAGE,
            Notice::Failed(err) => err.user_message(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Succeeded)
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    StartSubmission(RatingOption),
    Notify(Notice),
}

/// Result of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WidgetState,
    pub effect: Effect,
}

impl Transition {
    fn stay(state: WidgetState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }
}

/// Applies `event` to `state`.
#[must_use]
pub fn transition(state: WidgetState, options: &RatingSet, event: FlowEvent) -> Transition {
    match (state, event) {
        (WidgetState::Form, FlowEvent::SubmitPressed) => match options.active() {
            Some(candidate) => Transition {
                state: WidgetState::Submitting {
                    candidate: *candidate,
                },
                effect: Effect::StartSubmission(*candidate),
            },
            None => Transition {
                state: WidgetState::Form,
                effect: Effect::Notify(Notice::Invalid(ValidationError::no_selection())),
            },
        },
        (WidgetState::Submitting { candidate }, FlowEvent::Settled(Ok(()))) => Transition {
            state: WidgetState::Confirmed(SubmittedRating::new(candidate)),
            effect: Effect::Notify(Notice::Succeeded),
        },
        (WidgetState::Submitting { .. }, FlowEvent::Settled(Err(err))) => Transition {
            state: WidgetState::Form,
            effect: Effect::Notify(Notice::Failed(err)),
        },
        // Re-entrant submit, stray settles, and anything after confirmation.
        (state, _) => Transition::stay(state),
    }
}
