// SPDX-License-Identifier: MPL-2.0
//! Toast stack for the rating card.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; extra ones wait in a queue.
//! A loading toast is pushed with [`Manager::push_pending`] and later swapped
//! for its outcome with [`Manager::settle`].

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::time::Duration;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed.
    Dismiss(NotificationId),
    /// Periodic expiry check.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
    success_lifetime: Option<Duration>,
    error_lifetime: Option<Duration>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetimes from `[notifications]` in the settings file.
    #[must_use]
    pub fn with_durations(mut self, success: Duration, error: Duration) -> Self {
        self.success_lifetime = Some(success);
        self.error_lifetime = Some(error);
        self
    }

    /// Warnings and errors shown from now on are also recorded here.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        let notification = self.admit(notification);
        self.place(notification);
    }

    /// Shows a loading toast and returns the id to [`settle`](Self::settle).
    pub fn push_pending(&mut self, loading: Notification) -> NotificationId {
        let id = loading.id();
        self.push(loading);
        id
    }

    /// Swaps toast `id` for `outcome`, keeping its id and position.
    ///
    /// If `id` was already dismissed the outcome is shown as a new toast and
    /// `false` is returned.
    pub fn settle(&mut self, id: NotificationId, outcome: Notification) -> bool {
        let mut outcome = self.admit(outcome);

        if let Some(slot) = self
            .visible
            .iter_mut()
            .chain(self.waiting.iter_mut())
            .find(|n| n.id() == id)
        {
            outcome.adopt_id(id);
            *slot = outcome;
            return true;
        }

        self.place(outcome);
        false
    }

    /// Removes toast `id` wherever it is. Returns `false` if it is unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.refill();
            true
        } else if let Some(pos) = self.waiting.iter().position(|n| n.id() == id) {
            self.waiting.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops every visible toast whose lifetime has run out.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired());
        if self.visible.len() != before {
            self.refill();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Toasts on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    /// Whether anything is shown or waiting. Drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !(self.visible.is_empty() && self.waiting.is_empty())
    }

    fn place(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    fn refill(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.waiting.pop_front() {
                Some(next) => self.visible.push_back(next),
                None => break,
            }
        }
    }

    /// Records warnings and errors, then applies the configured lifetime.
    fn admit(&self, notification: Notification) -> Notification {
        if let Some(handle) = &self.diagnostics {
            let message = notification.message();
            match notification.severity() {
                Severity::Warning => handle.log_warning(WarningEvent::new(
                    notification.warning_type().unwrap_or(WarningType::Other),
                    message,
                )),
                Severity::Error => handle.log_error(ErrorEvent::new(
                    notification.error_type().unwrap_or(ErrorType::Other),
                    message,
                )),
                Severity::Success | Severity::Loading => {}
            }
        }

        if notification.has_custom_lifetime() {
            return notification;
        }
        let lifetime = match notification.severity() {
            Severity::Success => self.success_lifetime,
            Severity::Warning | Severity::Error => self.error_lifetime,
            Severity::Loading => None,
        };
        match lifetime {
            Some(lifetime) => notification.auto_dismiss(lifetime),
            None => notification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    fn find(manager: &Manager, id: NotificationId) -> Option<&Notification> {
        manager.visible().find(|n| n.id() == id)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn fourth_toast_waits_for_a_slot() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::success("second"));
        manager.push(Notification::success("third"));
        manager.push(Notification::success("fourth"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message() == "fourth"));
    }

    #[test]
    fn unknown_id_is_not_dismissed() {
        let mut manager = Manager::new();
        let stray = Notification::success("never pushed").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn settle_replaces_loading_in_place() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("Settings could not be read"));
        let id = manager.push_pending(Notification::loading("Submitting"));

        assert!(manager.settle(id, Notification::success("Successfully rated")));

        assert_eq!(manager.visible_count(), 2);
        let front = manager.visible().next().unwrap();
        assert_eq!(front.id(), id);
        assert_eq!(front.severity(), Severity::Success);
        assert_eq!(front.message(), "Successfully rated");
    }

    #[test]
    fn settle_after_dismiss_shows_outcome_as_new_toast() {
        let mut manager = Manager::new();
        let id = manager.push_pending(Notification::loading("Submitting"));
        manager.dismiss(id);

        assert!(!manager.settle(id, Notification::error("Something went wrong")));

        assert_eq!(manager.visible_count(), 1);
        assert!(find(&manager, id).is_none());
    }

    #[test]
    fn loading_outlives_ticks_until_settled() {
        let mut manager = Manager::new().with_durations(Duration::ZERO, Duration::ZERO);
        let id = manager.push_pending(Notification::loading("Submitting"));

        manager.tick();
        assert!(find(&manager, id).is_some());

        manager.settle(id, Notification::success("Successfully rated"));
        manager.tick();
        assert!(find(&manager, id).is_none());
    }

    #[test]
    fn configured_lifetimes_apply_per_severity() {
        let mut manager = Manager::new().with_durations(Duration::from_secs(60), Duration::ZERO);
        manager.push(Notification::error("Something went wrong"));
        manager.push(Notification::success("Successfully rated"));

        manager.tick();

        let left: Vec<_> = manager.visible().map(Notification::severity).collect();
        assert_eq!(left, vec![Severity::Success]);
    }

    #[test]
    fn dismiss_message_closes_toast() {
        let mut manager = Manager::new();
        let toast = Notification::success("Successfully rated");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn errors_are_recorded_in_diagnostics() {
        let mut collector = DiagnosticsCollector::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::success("Successfully rated"));
        let id = manager.push_pending(Notification::loading("Submitting"));
        manager.settle(
            id,
            Notification::error("Something went wrong").with_error_type(ErrorType::SubmissionError),
        );
        collector.process_pending();

        let errors: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Error { event } => Some(event.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::SubmissionError);
        assert_eq!(errors[0].message, "Something went wrong");
    }
}
