//! Page fade-in.
//!
//! The body is made transparent on load and the opacity transition is started
//! after a short scheduling gap, so the browser commits the transparent frame
//! before the transition begins.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use crate::config::UiConfig;
use crate::scheduler::Scheduler;

/// Inline body style for one step of the fade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyStyle {
    pub opacity: &'static str,
    pub transition: Option<String>,
}

/// Timer payload: start the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeStart;

#[derive(Debug)]
pub struct PageFade {
    delay_ms: u32,
    duration_ms: u32,
    started: bool,
}

impl PageFade {
    pub fn new(config: &UiConfig) -> Self {
        Self { delay_ms: config.fade_delay_ms, duration_ms: config.fade_duration_ms, started: false }
    }

    /// Hide the body and schedule the transition.
    pub fn on_load<S: Scheduler<FadeStart>>(&mut self, sched: &mut S) -> BodyStyle {
        sched.schedule(self.delay_ms, FadeStart);
        BodyStyle { opacity: "0", transition: None }
    }

    /// Start the transition. Only the first call has an effect.
    pub fn on_timer(&mut self, _start: FadeStart) -> Option<BodyStyle> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(BodyStyle { opacity: "1", transition: Some(format!("opacity {}ms ease-in", self.duration_ms)) })
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}
