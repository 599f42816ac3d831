// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the card face matching the current [`WidgetState`] centered on
//! the page, with the toast overlay stacked on top.

use super::flow::WidgetState;
use super::Message;
use crate::domain::rating::RatingSet;
use crate::ui::confirmation;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::rating_form;
use crate::ui::styles;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub options: &'a RatingSet,
    pub state: &'a WidgetState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the card and the notification overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let face: Element<'_, Message> = match ctx.state {
        WidgetState::Confirmed(submitted) => confirmation::view(confirmation::ViewContext {
            submitted,
            total: ctx.options.len(),
        }),
        WidgetState::Form | WidgetState::Submitting { .. } => {
            rating_form::view(rating_form::ViewContext {
                options: ctx.options,
                submitting: ctx.state.is_submitting(),
            })
            .map(Message::Form)
        }
    };

    let card = Container::new(face)
        .max_width(sizing::CARD_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::card);

    let page = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::page);

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}
