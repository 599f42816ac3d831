// SPDX-License-Identifier: MPL-2.0
//! Thank-you panel shown once a rating has been accepted.

use crate::domain::rating::SubmittedRating;
use crate::ui::assets;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::rating_form::heading;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Font, Length,
};

pub const TITLE: &str = "Thank you!";
pub const BODY: &str = "We appreciate you taking the time to give a rating. \
If you ever need more support, don't hesitate to get in touch!";

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub submitted: &'a SubmittedRating,
    /// Size of the rating scale.
    pub total: usize,
}

/// Render the confirmation panel. It has no interactive parts.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let illustration = assets::thank_you().width(Length::Fixed(sizing::ILLUSTRATION_WIDTH));

    let summary = Container::new(Text::new(ctx.submitted.summary(ctx.total)).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::pill);

    let title = Text::new(TITLE)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .style(heading);

    let body = Text::new(BODY).size(typography::BODY).center();

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(illustration)
        .push(summary)
        .push(Column::new().spacing(spacing::XS).align_x(Horizontal::Center).push(title).push(body))
        .into()
}
