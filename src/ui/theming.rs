// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Color palette for the rating card.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub card_background: Color,

    // Text colors
    pub text_heading: Color,
    pub text_body: Color,

    // Brand colors
    pub brand_primary: Color,

    // Rating option colors
    pub option_background: Color,
    pub option_active_background: Color,
    pub option_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::LIGHT_GREY,
            card_background: palette::WHITE,

            text_heading: palette::VERY_DARK_BLUE,
            text_body: palette::DARK_GREY,

            brand_primary: palette::ORANGE,

            option_background: palette::LIGHT_GREY,
            option_active_background: palette::GREY,
            option_text: palette::DARK_GREY,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::VERY_DARK_BLUE,
            card_background: palette::DARK_BLUE,

            text_heading: palette::WHITE,
            text_body: palette::GREY,

            brand_primary: palette::ORANGE,

            option_background: palette::MID_BLUE,
            option_active_background: palette::GREY,
            option_text: palette::GREY,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Iced base theme matching this color scheme.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.mode.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}
