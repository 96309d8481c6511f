//! Flash message auto-dismissal.
//!
//! Every message is tracked independently: it stays visible for
//! `flash_delay_ms`, fades and slides out, and is removed from the document
//! `flash_removal_ms` later so the CSS transition can finish.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::config::UiConfig;
use crate::consts::FLASH_SLIDE_PX;
use crate::scheduler::Scheduler;

/// Index of a tracked message in the order it was registered.
pub type MessageId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
    Removed,
}

/// Timer payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashTimer {
    Fade(MessageId),
    Remove(MessageId),
}

/// What the host should do to a message element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashEffect {
    FadeOut(MessageId),
    Remove(MessageId),
}

/// Inline style applied when a message starts fading.
pub fn fade_out_style() -> [(&'static str, String); 2] {
    [("opacity", "0".to_owned()), ("transform", format!("translateX({FLASH_SLIDE_PX}px)"))]
}

#[derive(Debug)]
pub struct FlashDismissal {
    phases: Vec<FlashPhase>,
    fade_delay_ms: u32,
    removal_delay_ms: u32,
}

impl FlashDismissal {
    pub fn new(config: &UiConfig) -> Self {
        Self { phases: Vec::new(), fade_delay_ms: config.flash_delay_ms, removal_delay_ms: config.flash_removal_ms }
    }

    /// Start tracking a freshly rendered message.
    pub fn track<S: Scheduler<FlashTimer>>(&mut self, sched: &mut S) -> MessageId {
        let id = self.phases.len();
        self.phases.push(FlashPhase::Visible);
        sched.schedule(self.fade_delay_ms, FlashTimer::Fade(id));
        id
    }

    pub fn on_timer<S: Scheduler<FlashTimer>>(&mut self, timer: FlashTimer, sched: &mut S) -> Option<FlashEffect> {
        match timer {
            FlashTimer::Fade(id) => {
                let phase = self.phases.get_mut(id)?;
                if *phase != FlashPhase::Visible {
                    return None;
                }
                *phase = FlashPhase::Fading;
                sched.schedule(self.removal_delay_ms, FlashTimer::Remove(id));
                Some(FlashEffect::FadeOut(id))
            }
            FlashTimer::Remove(id) => {
                let phase = self.phases.get_mut(id)?;
                if *phase != FlashPhase::Fading {
                    return None;
                }
                *phase = FlashPhase::Removed;
                Some(FlashEffect::Remove(id))
            }
        }
    }

    pub fn phase(&self, id: MessageId) -> Option<FlashPhase> {
        self.phases.get(id).copied()
    }

    /// Messages not yet removed.
    pub fn live_count(&self) -> usize {
        self.phases.iter().filter(|phase| **phase != FlashPhase::Removed).count()
    }
}
