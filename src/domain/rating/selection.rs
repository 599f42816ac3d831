// SPDX-License-Identifier: MPL-2.0
//! Exclusive selection over a fixed set of rating options.
//!
//! Membership never changes after construction; only the `active` flags move.
//! At most one option is active at any time.

use super::{RatingId, RatingOption, DEFAULT_SCALE};

/// Fixed, ordered collection of rating options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSet {
    options: Vec<RatingOption>,
}

impl RatingSet {
    /// Creates a scale of `size` inactive options numbered `1..=size`.
    #[must_use]
    pub fn with_scale(size: u8) -> Self {
        Self {
            options: (1..=size)
                .map(|raw| RatingOption::new(RatingId::new(raw)))
                .collect(),
        }
    }

    /// Returns a new set where `id` has its flag inverted and every other
    /// option is inactive.
    ///
    /// An `id` outside the set matches nothing, so the result has no active
    /// option at all. Callers relying on "unknown id keeps the selection"
    /// will lose it.
    #[must_use]
    pub fn toggle(&self, id: RatingId) -> Self {
        let mut next = self.clone();
        next.toggle_mut(id);
        next
    }

    /// In-place variant of [`RatingSet::toggle`].
    pub fn toggle_mut(&mut self, id: RatingId) {
        for option in &mut self.options {
            let active = option.id() == id && !option.is_active();
            option.set_active(active);
        }
    }

    /// Returns the first active option, if any.
    #[must_use]
    pub fn active(&self) -> Option<&RatingOption> {
        self.options.iter().find(|option| option.is_active())
    }

    /// Returns every active option (zero or one element).
    pub fn active_options(&self) -> impl Iterator<Item = &RatingOption> {
        self.options.iter().filter(|option| option.is_active())
    }

    #[must_use]
    pub fn is_none_selected(&self) -> bool {
        self.active().is_none()
    }

    #[must_use]
    pub fn get(&self, id: RatingId) -> Option<&RatingOption> {
        self.options.iter().find(|option| option.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RatingOption> {
        self.options.iter()
    }

    /// Number of options on the scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for RatingSet {
    fn default() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(set: &RatingSet) -> Vec<u8> {
        set.active_options().map(|o| o.id().value()).collect()
    }

    #[test]
    fn default_scale_has_five_inactive_options() {
        let set = RatingSet::default();
        assert_eq!(set.len(), 5);
        assert!(set.is_none_selected());
        let values: Vec<u8> = set.iter().map(RatingOption::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn toggle_selects_exactly_one() {
        let set = RatingSet::default().toggle(RatingId::new(3));
        assert_eq!(active_ids(&set), vec![3]);
    }

    #[test]
    fn toggle_other_option_moves_selection() {
        let set = RatingSet::default()
            .toggle(RatingId::new(2))
            .toggle(RatingId::new(5));
        assert_eq!(active_ids(&set), vec![5]);
    }

    #[test]
    fn double_toggle_clears_selection() {
        let set = RatingSet::default()
            .toggle(RatingId::new(4))
            .toggle(RatingId::new(4));
        assert!(set.is_none_selected());
    }

    #[test]
    fn toggle_unknown_id_clears_everything() {
        let set = RatingSet::default()
            .toggle(RatingId::new(1))
            .toggle(RatingId::new(42));
        assert!(set.is_none_selected());
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn toggle_leaves_receiver_untouched() {
        let before = RatingSet::default();
        let _ = before.toggle(RatingId::new(1));
        assert!(before.is_none_selected());
    }

    #[test]
    fn at_most_one_active_for_any_sequence() {
        let mut set = RatingSet::default();
        // Deterministic pseudo-random walk over valid and invalid ids.
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let raw = ((seed >> 16) % 8) as u8;
            set.toggle_mut(RatingId::new(raw));
            assert!(set.active_options().count() <= 1);
        }
    }

    #[test]
    fn get_returns_matching_option() {
        let set = RatingSet::default();
        assert_eq!(set.get(RatingId::new(2)).map(RatingOption::value), Some(2));
        assert!(set.get(RatingId::new(9)).is_none());
    }
}
