// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens, styles, notifications and the two card faces.

pub mod assets;
pub mod confirmation;
pub mod design_tokens;
pub mod notifications;
pub mod rating_form;
pub mod styles;
pub mod theming;
