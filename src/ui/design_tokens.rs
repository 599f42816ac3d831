// SPDX-License-Identifier: MPL-2.0
//! Visual constants of the rating card.
//!
//! Colors follow the card mock-up: a dark blue card on a very dark page,
//! grey secondary text and one orange accent. Lengths sit on a 4px grid.
//!
//! ```
//! use rating_card::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let halo = Color { a: opacity::OVERLAY_SUBTLE, ..palette::GREY };
//! assert!(spacing::LG > spacing::MD);
//! # let _ = halo;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const LIGHT_GREY: Color = Color::from_rgb(0.9, 0.91, 0.93);
    /// Body text on the dark card, idle rating buttons in light mode.
    pub const GREY: Color = Color::from_rgb(0.486, 0.529, 0.596);
    pub const DARK_GREY: Color = Color::from_rgb(0.3, 0.3, 0.3);

    /// Page background in dark mode.
    pub const VERY_DARK_BLUE: Color = Color::from_rgb(0.075, 0.082, 0.098);
    /// Card surface in dark mode.
    pub const DARK_BLUE: Color = Color::from_rgb(0.145, 0.176, 0.212);
    /// Idle rating button and halo behind the star.
    pub const MID_BLUE: Color = Color::from_rgb(0.2, 0.235, 0.275);

    /// Submit button, active rating and loading toasts.
    pub const ORANGE: Color = Color::from_rgb(0.988, 0.463, 0.075);

    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

/// Alpha values for hover and press overlays.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

pub mod spacing {
    const UNIT: f32 = 4.0;

    pub const XXS: f32 = UNIT;
    pub const XS: f32 = UNIT * 2.0;
    pub const SM: f32 = UNIT * 3.0;
    pub const MD: f32 = UNIT * 4.0;
    /// Card padding and gap between card sections.
    pub const LG: f32 = UNIT * 6.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Diameter of a rating option button.
    pub const RATING_BUTTON: f32 = 48.0;
    pub const BUTTON_HEIGHT: f32 = 44.0;
    /// 23rem at 16px.
    pub const CARD_MAX_WIDTH: f32 = 368.0;
    pub const ILLUSTRATION_WIDTH: f32 = 160.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// "How did we do?" and "Thank you!".
    pub const TITLE_LG: f32 = 28.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
}

pub mod border {
    /// Colored outline of a toast.
    pub const ACCENT_WIDTH: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Card corners.
    pub const LG: f32 = 15.0;
    /// Large enough to turn any button into a pill or circle.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const fn cast(offset_y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: Color::BLACK,
            offset: Vector { x: 0.0, y: offset_y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = cast(0.0, 0.0);
    pub const SM: Shadow = cast(2.0, 4.0);
    pub const MD: Shadow = cast(4.0, 8.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    // Five rating buttons must fit on one row.
    assert!(sizing::CARD_MAX_WIDTH > sizing::RATING_BUTTON * 5.0);

    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
};
