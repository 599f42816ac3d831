// SPDX-License-Identifier: MPL-2.0
//! Rating form: star icon, prompt, the row of score buttons and Submit.

use crate::domain::rating::{RatingId, RatingOption, RatingSet};
use crate::ui::assets;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Text},
    Element, Font, Length, Theme,
};

pub const TITLE: &str = "How did we do?";
pub const BODY: &str = "Please let us know how we did with your support request. \
All feedback is appreciated to help us improve our offering!";
pub const SUBMIT_LABEL: &str = "SUBMIT";

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub options: &'a RatingSet,
    /// A submission is in flight; Submit is rendered disabled.
    pub submitting: bool,
}

/// Messages emitted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    RatingPressed(RatingId),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Toggle(RatingId),
    Submit,
}

/// Process a form message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::RatingPressed(id) => Event::Toggle(*id),
        Message::SubmitPressed => Event::Submit,
    }
}

/// Render the rating form.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let star = Container::new(assets::star().width(sizing::ICON_SM).height(sizing::ICON_SM))
        .padding(spacing::SM)
        .style(styles::container::icon_halo);

    let title = Text::new(TITLE)
        .size(typography::TITLE_LG)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .style(heading);

    let body = Text::new(BODY).size(typography::BODY);

    let options = ctx
        .options
        .iter()
        .fold(
            Row::new().spacing(spacing::MD).align_y(Vertical::Center),
            |row, option| row.push(option_button(option)),
        )
        .width(Length::Fill);

    let submit = button(
        Container::new(Text::new(SUBMIT_LABEL).size(typography::BODY).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }))
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe(submit_message(ctx.submitting))
    .style(styles::button::submit);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(star)
        .push(Column::new().spacing(spacing::XS).push(title).push(body))
        .push(options)
        .push(submit)
        .into()
}

/// What pressing Submit emits. Nothing while a submission is in flight.
fn submit_message(submitting: bool) -> Option<Message> {
    (!submitting).then_some(Message::SubmitPressed)
}

fn option_button(option: &RatingOption) -> Element<'_, Message> {
    let label = Container::new(Text::new(option.value().to_string()).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    button(label)
        .width(Length::Fixed(sizing::RATING_BUTTON))
        .height(Length::Fixed(sizing::RATING_BUTTON))
        .padding(0)
        .on_press(Message::RatingPressed(option.id()))
        .style(styles::button::rating_option(option.is_active()))
        .into()
}

pub(crate) fn heading(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(styles::scheme_for(theme).text_heading),
    }
}
