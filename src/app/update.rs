// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the rating card.
//!
//! Handlers receive an [`UpdateContext`] borrowing the pieces of `App` they
//! touch, run the pure [`flow`](super::flow) transition and turn the
//! requested effect into notifications, diagnostics and tasks.

use super::flow::{self, Effect, FlowEvent, Notice, WidgetState, SUBMITTING_MESSAGE};
use super::Message;
use crate::application::port::SharedSubmitter;
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction};
use crate::domain::error::SubmitError;
use crate::domain::rating::RatingSet;
use crate::ui::notifications::{self, Notification, NotificationId};
use crate::ui::rating_form;
use iced::Task;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub options: &'a mut RatingSet,
    pub state: &'a mut WidgetState,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
    pub submitter: &'a SharedSubmitter,
}

pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: rating_form::Message,
) -> Task<Message> {
    match rating_form::update(&message) {
        rating_form::Event::Toggle(id) => {
            // The form is gone once confirmed
            if matches!(ctx.state, WidgetState::Confirmed(_)) {
                return Task::none();
            }
            ctx.diagnostics
                .log_action(UserAction::SelectRating { id: id.value() });
            ctx.options.toggle_mut(id);
            Task::none()
        }
        rating_form::Event::Submit => {
            ctx.diagnostics.log_action(UserAction::SubmitRating);
            step(ctx, FlowEvent::SubmitPressed, None)
        }
    }
}

pub fn handle_submission_settled(
    ctx: &mut UpdateContext<'_>,
    notification_id: NotificationId,
    result: Result<(), SubmitError>,
) -> Task<Message> {
    step(ctx, FlowEvent::Settled(result), Some(notification_id))
}

/// Runs one transition and performs its effect.
///
/// `pending` is the loading notification of the submission being settled.
fn step(
    ctx: &mut UpdateContext<'_>,
    event: FlowEvent,
    pending: Option<NotificationId>,
) -> Task<Message> {
    let previous = *ctx.state;
    let next = flow::transition(previous, ctx.options, event);
    *ctx.state = next.state;

    match next.effect {
        Effect::None => {
            // A settle nobody waits for must not leave its spinner behind
            if let Some(id) = pending {
                ctx.notifications.dismiss(id);
            }
            Task::none()
        }
        Effect::StartSubmission(candidate) => {
            ctx.diagnostics.log_state(AppStateEvent::SubmissionStarted {
                value: candidate.value(),
            });
            let notification_id = ctx
                .notifications
                .push_pending(Notification::loading(SUBMITTING_MESSAGE));
            let submission = ctx.submitter.attempt_submit(candidate);

            Task::perform(submission, move |result| Message::SubmissionSettled {
                notification_id,
                result,
            })
        }
        Effect::Notify(notice) => {
            notify(ctx, &notice, pending);
            Task::none()
        }
    }
}

fn notify(ctx: &mut UpdateContext<'_>, notice: &Notice, pending: Option<NotificationId>) {
    let notification = match notice {
        Notice::Invalid(err) => {
            ctx.diagnostics.log_state(AppStateEvent::ValidationFailed);
            Notification::error(err.message()).with_error_type(ErrorType::Validation)
        }
        Notice::Succeeded => {
            if let Some(rating) = ctx.state.submitted() {
                ctx.diagnostics.log_state(AppStateEvent::SubmissionSucceeded {
                    value: rating.value(),
                });
            }
            Notification::success(notice.message())
        }
        Notice::Failed(err) => {
            ctx.diagnostics.log_state(AppStateEvent::SubmissionFailed);
            if err.is_unexpected() {
                eprintln!("[ERROR] Cannot submit rating: {err}");
                ctx.diagnostics
                    .log_error(ErrorEvent::new(ErrorType::InternalError, err.to_string()));
            }
            Notification::error(notice.message()).with_error_type(ErrorType::SubmissionError)
        }
    };

    match pending {
        Some(id) => {
            ctx.notifications.settle(id, notification);
        }
        None => ctx.notifications.push(notification),
    }
}
