// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the rating card.
//!
//! The `App` struct wires together the rating options, the submission flow,
//! notifications and diagnostics, and translates messages into side effects
//! such as starting a submission or writing the diagnostics report on exit.

pub mod flow;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use flow::{Effect, FlowEvent, Notice, Transition, WidgetState};
pub use message::{Flags, Message};

use crate::application::port::SharedSubmitter;
use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, DiagnosticsHandle, WarningType};
use crate::domain::rating::RatingSet;
use crate::infrastructure::simulated::SimulatedSubmitter;
use crate::ui::notifications;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    options: RatingSet,
    state: WidgetState,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
    submitter: SharedSubmitter,
    /// Destination of the diagnostics report written on close.
    diagnostics_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through `Message::WindowCloseRequested`
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_submitter(&Config::default(), Arc::new(SimulatedSubmitter::default()))
    }
}

impl App {
    /// Builds the application from configuration and a submission backend.
    #[must_use]
    pub fn with_submitter(config: &Config, submitter: SharedSubmitter) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.buffer_capacity());
        let diagnostics_handle = diagnostics.handle();

        let mut notifications = notifications::Manager::new().with_durations(
            config.success_toast_duration(),
            config.error_toast_duration(),
        );
        notifications.set_diagnostics(diagnostics_handle.clone());

        Self {
            options: RatingSet::default(),
            state: WidgetState::default(),
            theme_mode: config.general.theme_mode,
            notifications,
            diagnostics,
            diagnostics_handle,
            submitter,
            diagnostics_path: None,
        }
    }

    /// Initializes application state from the config file and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let submitter = Arc::new(SimulatedSubmitter::new(
            config.submit_delay(),
            config.success_probability(),
        ));

        let mut app = Self::with_submitter(&config, submitter);
        app.diagnostics_path = flags.diagnostics_path;
        if let Some(theme) = flags.theme {
            app.theme_mode = theme;
        }

        app.diagnostics.log_state(AppStateEvent::Started);

        if let Some(message) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(message)
                    .with_warning_type(WarningType::ConfigurationIssue),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.state {
            WidgetState::Confirmed(_) => String::from("Thank you! - Rating Card"),
            _ => String::from("Rating Card"),
        }
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();

        let mut ctx = update::UpdateContext {
            options: &mut self.options,
            state: &mut self.state,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics_handle,
            submitter: &self.submitter,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::SubmissionSettled {
                notification_id,
                result,
            } => update::handle_submission_settled(&mut ctx, notification_id, result),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(_id) => {
                self.write_diagnostics_report();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            options: &self.options,
            state: &self.state,
            notifications: &self.notifications,
        })
    }

    /// Flushes pending events and writes the report if a path was given.
    fn write_diagnostics_report(&mut self) {
        self.diagnostics.process_pending();

        if let Some(path) = &self.diagnostics_path {
            match self.diagnostics.export_to_file(path) {
                Ok(()) => eprintln!("[INFO] Diagnostics report written to {}", path.display()),
                Err(err) => eprintln!("[ERROR] Failed to write diagnostics report: {err}"),
            }
        }
    }

    /// Current face of the card.
    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &RatingSet {
        &self.options
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SubmitError;
    use crate::domain::rating::{RatingId, RatingOption};
    use crate::ui::notifications::Severity;
    use crate::ui::rating_form;

    fn select(app: &mut App, id: u8) {
        let _ = app.update(Message::Form(rating_form::Message::RatingPressed(
            RatingId::new(id),
        )));
    }

    fn submit(app: &mut App) {
        let _ = app.update(Message::Form(rating_form::Message::SubmitPressed));
    }

    fn pending_id(app: &App) -> notifications::NotificationId {
        app.notifications()
            .visible()
            .find(|n| n.severity() == Severity::Loading)
            .map(notifications::Notification::id)
            .expect("a loading notification")
    }

    #[test]
    fn default_app_starts_on_empty_form() {
        let app = App::default();
        assert_eq!(*app.state(), WidgetState::Form);
        assert!(app.options().is_none_selected());
        assert_eq!(app.options().len(), 5);
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn full_round_trip_to_confirmation() {
        let mut app = App::default();
        select(&mut app, 3);
        submit(&mut app);
        let id = pending_id(&app);

        let _ = app.update(Message::SubmissionSettled {
            notification_id: id,
            result: Ok(()),
        });

        let submitted = app.state().submitted().expect("confirmed");
        assert_eq!(submitted.summary(app.options().len()), "You selected 3 out of 5");
        assert_eq!(app.title(), "Thank you! - Rating Card");
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut app = App::default();
        select(&mut app, 4);
        submit(&mut app);
        let first = pending_id(&app);
        let _ = app.update(Message::SubmissionSettled {
            notification_id: first,
            result: Err(SubmitError::SimulatedFailure),
        });
        assert_eq!(*app.state(), WidgetState::Form);

        submit(&mut app);
        let second = pending_id(&app);
        assert_ne!(first, second);
        let _ = app.update(Message::SubmissionSettled {
            notification_id: second,
            result: Ok(()),
        });

        assert_eq!(app.state().submitted().map(|r| r.value()), Some(4));
    }

    #[test]
    fn rating_buttons_stay_live_while_submitting() {
        let mut app = App::default();
        select(&mut app, 2);
        submit(&mut app);
        select(&mut app, 5);

        assert!(app.state().is_submitting());
        assert_eq!(app.options().active().map(RatingOption::value), Some(5));
    }

    #[test]
    fn notification_dismiss_message_is_routed() {
        let mut app = App::default();
        submit(&mut app);
        let id = app.notifications().visible().next().unwrap().id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn diagnostics_report_is_written_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut app = App::default();
        app.diagnostics_path = Some(path.clone());
        select(&mut app, 1);
        app.write_diagnostics_report();

        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.contains("select_rating"));
    }

    #[test]
    fn theme_follows_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn window_matches_card_size() {
        let settings = window_settings();
        assert_eq!(settings.size, iced::Size::new(420.0, 600.0));
        assert!(!settings.exit_on_close_request);
    }
}
