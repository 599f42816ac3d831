// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme_for;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop behind the card.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        background: Some(Background::Color(colors.page_background)),
        ..Default::default()
    }
}

/// The rating card surface.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        background: Some(Background::Color(colors.card_background)),
        text_color: Some(colors.text_body),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Translucent round halo behind the star icon.
pub fn icon_halo(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GREY
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill around the "You selected ..." summary.
pub fn pill(theme: &Theme) -> container::Style {
    let colors = scheme_for(theme);

    container::Style {
        text_color: Some(colors.brand_primary),
        ..icon_halo(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme_brightness() {
        let dark = card(&Theme::Dark);
        let light = card(&Theme::Light);
        assert_ne!(dark.background, light.background);
    }

    #[test]
    fn pill_text_is_brand_orange() {
        let style = pill(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::ORANGE));
        assert!(style.background.is_some());
    }
}
