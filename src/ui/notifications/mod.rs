// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting what happened to the rating.
//!
//! Submitting shows a loading toast that is later swapped for the outcome:
//!
//! ```
//! use rating_card::ui::notifications::{Manager, Notification, Severity};
//!
//! let mut manager = Manager::new();
//! let id = manager.push_pending(Notification::loading("Submitting"));
//!
//! manager.settle(id, Notification::success("Successfully rated"));
//!
//! let toast = manager.visible().next().unwrap();
//! assert_eq!(toast.id(), id);
//! assert_eq!(toast.severity(), Severity::Success);
//! ```
//!
//! Successes last 2s and warnings and errors 4s unless `[notifications]`
//! says otherwise. Up to three toasts are stacked at the top of the card.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
