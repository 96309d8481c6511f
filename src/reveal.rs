//! One-shot scroll reveal for dashboard cards.
//!
//! Cards start hidden by the stylesheet. The first time the observer reports a
//! card as intersecting it is moved to its resting style and dropped from
//! observation, so scrolling away never hides it again. `reveal_threshold`
//! only configures when the observer fires; the reported ratio is not
//! compared against it, since browsers round it and tall cards may never
//! reach it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

use crate::config::UiConfig;

pub type CardId = usize;

/// Resting inline style of a revealed card.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// One intersection observation for a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible fraction of the card in `[0, 1]`. Informational only.
    pub ratio: f64,
}

#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    observed: BTreeSet<CardId>,
    revealed: BTreeSet<CardId>,
}

impl RevealTracker {
    pub fn new(config: &UiConfig) -> Self {
        Self { threshold: config.reveal_threshold, observed: BTreeSet::new(), revealed: BTreeSet::new() }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, card: CardId) {
        if !self.revealed.contains(&card) {
            self.observed.insert(card);
        }
    }

    /// Feed an observation. Returns `true` when the card should be revealed
    /// and unobserved now.
    pub fn on_intersection(&mut self, card: CardId, seen: Visibility) -> bool {
        if !seen.is_intersecting {
            return false;
        }
        if !self.observed.remove(&card) {
            return false;
        }
        self.revealed.insert(card);
        true
    }

    pub fn is_revealed(&self, card: CardId) -> bool {
        self.revealed.contains(&card)
    }

    pub fn is_observed(&self, card: CardId) -> bool {
        self.observed.contains(&card)
    }
}
