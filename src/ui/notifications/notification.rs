// SPDX-License-Identifier: MPL-2.0
//! A single toast: what it says, how serious it is and when it expires.

use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a toast, stable across [`settle`](super::Manager::settle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Toast kind. Drives the accent color, the glyph and the lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The rating was accepted.
    Success,
    /// Something was off but the card still works, such as unreadable settings.
    Warning,
    /// Submit was refused or failed.
    Error,
    /// A submission is in flight. Never expires on its own.
    Loading,
}

impl Severity {
    /// Accent used for the toast border and glyph.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS,
            Severity::Warning => palette::WARNING,
            Severity::Error => palette::ERROR,
            Severity::Loading => palette::ORANGE,
        }
    }

    /// Lifetime when nothing else is configured.
    #[must_use]
    pub fn default_lifetime(self) -> Option<Duration> {
        use crate::config::{DEFAULT_ERROR_TOAST_SECS, DEFAULT_SUCCESS_TOAST_SECS};

        match self {
            Severity::Success => Some(Duration::from_secs(DEFAULT_SUCCESS_TOAST_SECS)),
            Severity::Warning | Severity::Error => {
                Some(Duration::from_secs(DEFAULT_ERROR_TOAST_SECS))
            }
            Severity::Loading => None,
        }
    }

    /// Whether the toast shows a close button.
    #[must_use]
    pub fn is_dismissible(self) -> bool {
        self != Severity::Loading
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    shown_at: Instant,
    lifetime: Option<Duration>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message: message.into(),
            shown_at: Instant::now(),
            lifetime: None,
            warning_type: None,
            error_type: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// A toast that stays up until [`settle`](super::Manager::settle) replaces it.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(Severity::Loading, message)
    }

    /// Overrides the severity lifetime.
    #[must_use]
    pub fn auto_dismiss(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Category recorded in diagnostics when this warning is shown.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Category recorded in diagnostics when this error is shown.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    pub(crate) fn has_custom_lifetime(&self) -> bool {
        self.lifetime.is_some()
    }

    /// Moves this toast into the slot of `id`. Its clock restarts.
    pub(crate) fn adopt_id(&mut self, id: NotificationId) {
        self.id = id;
        self.shown_at = Instant::now();
    }

    /// Whether the lifetime has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.lifetime
            .or_else(|| self.severity.default_lifetime())
            .is_some_and(|lifetime| self.shown_at.elapsed() >= lifetime)
    }
}
