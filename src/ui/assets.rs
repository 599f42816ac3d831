// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG artwork.
//!
//! Files under `assets/images/` are compiled into the binary and their
//! handles are cached on first access.

use iced::widget::svg::{Handle, Svg};
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct Images;

pub const STAR_ICON: &str = "icon-star.svg";
pub const THANK_YOU_ILLUSTRATION: &str = "illustration-thank-you.svg";

/// Raw bytes of an embedded image, if it exists.
#[must_use]
pub fn bytes(name: &str) -> Option<std::borrow::Cow<'static, [u8]>> {
    Images::get(name).map(|file| file.data)
}

fn handle(name: &str) -> Handle {
    match bytes(name) {
        Some(data) => Handle::from_memory(data),
        None => {
            eprintln!("[WARN] Missing embedded image: {name}");
            Handle::from_memory(Vec::new())
        }
    }
}

/// Orange star shown above the form title.
pub fn star() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    Svg::new(HANDLE.get_or_init(|| handle(STAR_ICON)).clone())
}

/// Illustration at the top of the confirmation panel.
pub fn thank_you() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    Svg::new(HANDLE.get_or_init(|| handle(THANK_YOU_ILLUSTRATION)).clone())
}
