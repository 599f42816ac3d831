// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Color scheme matching the brightness of the active Iced theme.
pub(crate) fn scheme_for(theme: &Theme) -> ColorScheme {
    if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}
