// SPDX-License-Identifier: MPL-2.0
//! Rating value objects.
//!
//! A rating card offers a fixed scale of discrete scores. Each score is a
//! [`RatingOption`] identified by a [`RatingId`]; the collection of options
//! and its exclusivity rule live in [`selection`].

pub mod selection;

pub use selection::RatingSet;

use std::fmt;

/// Number of options on the default rating scale.
pub const DEFAULT_SCALE: u8 = 5;

// =============================================================================
// RatingId
// =============================================================================

/// Stable identifier of a rating option (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RatingId(u8);

impl RatingId {
    /// Wraps a raw identifier.
    ///
    /// No range check happens here: an identifier that does not belong to a
    /// [`RatingSet`] is legal and simply matches no option.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RatingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RatingOption
// =============================================================================

/// One selectable discrete score with its exclusivity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOption {
    id: RatingId,
    value: u8,
    active: bool,
}

impl RatingOption {
    /// Creates an inactive option whose display value equals its identifier.
    #[must_use]
    pub const fn new(id: RatingId) -> Self {
        Self {
            id,
            value: id.value(),
            active: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> RatingId {
        self.id
    }

    /// Value shown on the option button and in the confirmation panel.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// =============================================================================
// SubmittedRating
// =============================================================================

/// Copy of the option that was active when a submission succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedRating {
    option: RatingOption,
}

impl SubmittedRating {
    #[must_use]
    pub const fn new(option: RatingOption) -> Self {
        Self { option }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.option.value()
    }

    #[must_use]
    pub const fn option(&self) -> &RatingOption {
        &self.option
    }

    /// Summary shown on the confirmation panel, e.g. `You selected 3 out of 5`.
    #[must_use]
    pub fn summary(&self, total: usize) -> String {
        format!("You selected {} out of {}", self.value(), total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_option_is_inactive_and_mirrors_id() {
        let option = RatingOption::new(RatingId::new(4));
        assert_eq!(option.value(), 4);
        assert_eq!(option.id(), RatingId::new(4));
        assert!(!option.is_active());
    }

    #[test]
    fn summary_mentions_value_and_total() {
        let submitted = SubmittedRating::new(RatingOption::new(RatingId::new(3)));
        assert_eq!(submitted.summary(5), "You selected 3 out of 5");
    }

    #[test]
    fn rating_id_displays_raw_value() {
        assert_eq!(RatingId::new(2).to_string(), "2");
    }
}
