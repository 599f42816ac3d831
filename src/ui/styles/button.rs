// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme_for;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a rating option button.
///
/// The round base style is shared by every option; `active` layers the
/// selected token on top of it. Hovering an option highlights it in the
/// brand orange whether or not it is selected.
pub fn rating_option(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme_for(theme);
        let base = button::Style {
            background: Some(Background::Color(colors.option_background)),
            text_color: colors.option_text,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(colors.brand_primary)),
                text_color: WHITE,
                ..base
            },
            _ if active => button::Style {
                background: Some(Background::Color(colors.option_active_background)),
                text_color: WHITE,
                ..base
            },
            button::Status::Disabled => button::Style {
                text_color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..colors.option_text
                },
                ..base
            },
            button::Status::Active => base,
        }
    }
}

/// Style for the full-width Submit button.
pub fn submit(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme_for(theme);
    let base = button::Style {
        background: Some(Background::Color(colors.brand_primary)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(WHITE)),
            text_color: colors.brand_primary,
            shadow: shadow::MD,
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::ORANGE
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            },
            shadow: shadow::NONE,
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_option_differs_from_inactive() {
        let theme = Theme::Dark;
        let inactive = rating_option(false)(&theme, button::Status::Active);
        let active = rating_option(true)(&theme, button::Status::Active);

        assert_ne!(inactive.background, active.background);
        assert_eq!(active.text_color, WHITE);
    }

    #[test]
    fn hover_uses_brand_color_regardless_of_selection() {
        let theme = Theme::Dark;
        let hovered = rating_option(false)(&theme, button::Status::Hovered);
        let hovered_active = rating_option(true)(&theme, button::Status::Hovered);

        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::ORANGE))
        );
        assert_eq!(hovered.background, hovered_active.background);
    }

    #[test]
    fn options_are_round() {
        let style = rating_option(false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.radius, radius::FULL.into());
    }

    #[test]
    fn submit_inverts_colors_on_hover() {
        let theme = Theme::Dark;
        let active = submit(&theme, button::Status::Active);
        let hovered = submit(&theme, button::Status::Hovered);

        assert_eq!(active.text_color, WHITE);
        assert_eq!(hovered.background, Some(Background::Color(WHITE)));
        assert_eq!(hovered.text_color, palette::ORANGE);
    }

    #[test]
    fn disabled_submit_is_dimmed() {
        let style = submit(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }
}
