// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window close requests so diagnostics can be flushed first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
