// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::error::SubmitError;
use crate::ui::notifications::{self, NotificationId};
use crate::ui::rating_form;
use crate::ui::theming::ThemeMode;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(rating_form::Message),
    /// The in-flight submission resolved. `notification_id` is the loading
    /// toast the outcome replaces.
    SubmissionSettled {
        notification_id: NotificationId,
        result: Result<(), SubmitError>,
    },
    Notification(notifications::NotificationMessage),
    Tick(Instant),
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `RATING_CARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme forced from the command line, ignoring the config file.
    pub theme: Option<ThemeMode>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_path: Option<PathBuf>,
}
