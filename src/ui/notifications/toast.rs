// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast stack over the card.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// One toast: glyph, message and, unless loading, a close button.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let glyph = Container::new(
            Text::new(Self::glyph(severity))
                .size(typography::BODY_LG)
                .color(accent),
        )
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center);

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Text::new(notification.message())
                    .size(typography::BODY)
                    .width(Length::Fill),
            );

        if severity.is_dismissible() {
            row = row.push(
                button(Text::new("\u{00D7}").size(typography::BODY_LG))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding([0.0, spacing::XXS])
                    .style(close_button),
            );
        }

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_frame(theme, accent))
            .into()
    }

    /// Visible toasts stacked at the top center of the window.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let stack = Column::with_children(manager.visible().map(Self::view))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }

    fn glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "\u{2713}",
            Severity::Warning => "!",
            Severity::Error => "\u{2715}",
            Severity::Loading => "\u{2026}",
        }
    }
}

fn toast_frame(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: accent,
            width: border::ACCENT_WIDTH,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

fn close_button(theme: &Theme, status: button::Status) -> button::Style {
    let overlay = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: overlay.map(|a| Background::Color(Color { a, ..palette::GREY })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
