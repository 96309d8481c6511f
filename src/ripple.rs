//! Ripple feedback on button clicks.
//!
//! A ripple is a round span centred on the click point that grows to
//! `ripple_scale` while fading out, and is removed once the animation ends.
//! Rapid clicks simply stack ripples; nothing is pooled or cancelled.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::collections::BTreeSet;

use crate::config::UiConfig;
use crate::consts::RIPPLE_SIZE_PX;
use crate::scheduler::Scheduler;

/// Name of the injected `@keyframes` rule.
pub const KEYFRAMES_NAME: &str = "ripple";

pub type RippleId = u64;

/// Placement of a ripple inside its button, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl RippleGeometry {
    /// Centre a ripple on a viewport click point, relative to a button at
    /// `offset_left`/`offset_top`.
    pub fn at_click(client_x: f64, client_y: f64, offset_left: f64, offset_top: f64) -> Self {
        let half = RIPPLE_SIZE_PX / 2.0;
        Self { left: client_x - offset_left - half, top: client_y - offset_top - half, size: RIPPLE_SIZE_PX }
    }

    /// Inline style for the ripple span.
    pub fn style(&self, duration_ms: u32) -> Vec<(&'static str, String)> {
        let size = format!("{}px", self.size);
        vec![
            ("position", "absolute".to_owned()),
            ("border-radius", "50%".to_owned()),
            ("background", "rgba(255, 255, 255, 0.5)".to_owned()),
            ("width", size.clone()),
            ("height", size),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
            ("pointer-events", "none".to_owned()),
            ("transform", "scale(0)".to_owned()),
            ("animation", format!("{KEYFRAMES_NAME} {duration_ms}ms ease-out")),
        ]
    }
}

/// Stylesheet text for the ripple animation.
pub fn keyframes_css(scale: f64) -> String {
    format!("@keyframes {KEYFRAMES_NAME} {{ to {{ transform: scale({scale}); opacity: 0; }} }}")
}

/// Timer payload: the ripple whose animation has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleExpired(pub RippleId);

/// Bookkeeping for ripples currently in the document.
#[derive(Debug)]
pub struct RippleSet {
    live: BTreeSet<RippleId>,
    next_id: RippleId,
    duration_ms: u32,
}

impl RippleSet {
    pub fn new(config: &UiConfig) -> Self {
        Self { live: BTreeSet::new(), next_id: 0, duration_ms: config.ripple_ms }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Register a new ripple and schedule its removal.
    pub fn spawn<S: Scheduler<RippleExpired>>(&mut self, sched: &mut S) -> RippleId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        sched.schedule(self.duration_ms, RippleExpired(id));
        id
    }

    /// Returns the ripple to remove, if it is still live.
    pub fn on_timer(&mut self, expired: RippleExpired) -> Option<RippleId> {
        self.live.remove(&expired.0).then_some(expired.0)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
