//! Submit button loading state.
//!
//! Submitting a form disables its submit button and swaps in a spinner. If
//! the page is still here after `lockout_ms` (validation error, network
//! hiccup, navigation cancelled) the button is restored. The safety timer is
//! an explicit cancellable task: navigating away cancels it, and a page
//! restored from the back/forward cache releases the button right away.
//!
//! The button's `disabled` flag is the lock: a submit against a disabled
//! button is ignored and never schedules another timer.

#[cfg(test)]
#[path = "lockout_test.rs"]
mod lockout_test;

use crate::config::UiConfig;
use crate::consts::LOADING_MARKUP;
use crate::scheduler::{Scheduler, TaskId};

/// The submit button of one form.
pub trait SubmitControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
    /// Inner markup of the button.
    fn content(&self) -> String;
    fn set_content(&mut self, markup: &str);
}

/// Timer payload carrying the lock generation it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockoutExpired(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Button disabled and safety timer scheduled.
    Locked,
    /// Button was already disabled; nothing changed.
    Ignored,
}

#[derive(Debug)]
struct PendingRestore {
    /// `None` once the timer has been cancelled.
    task: Option<TaskId>,
    generation: u64,
    original: String,
}

#[derive(Debug)]
pub struct SubmitLockout {
    timeout_ms: u32,
    generation: u64,
    pending: Option<PendingRestore>,
}

impl SubmitLockout {
    pub fn new(config: &UiConfig) -> Self {
        Self { timeout_ms: config.lockout_ms, generation: 0, pending: None }
    }

    pub fn on_submit<B, S>(&mut self, button: &mut B, sched: &mut S) -> SubmitOutcome
    where
        B: SubmitControl + ?Sized,
        S: Scheduler<LockoutExpired>,
    {
        if button.is_disabled() {
            return SubmitOutcome::Ignored;
        }
        // Re-enabled externally while a restore was still pending.
        if let Some(task) = self.pending.take().and_then(|stale| stale.task) {
            sched.cancel(task);
        }

        let original = button.content();
        button.set_disabled(true);
        button.set_content(LOADING_MARKUP);

        self.generation += 1;
        let task = sched.schedule(self.timeout_ms, LockoutExpired(self.generation));
        self.pending = Some(PendingRestore { task: Some(task), generation: self.generation, original });
        SubmitOutcome::Locked
    }

    /// Restore the button if it is still locked. Returns whether anything
    /// was restored.
    pub fn on_timer<B: SubmitControl + ?Sized>(&mut self, expired: LockoutExpired, button: &mut B) -> bool {
        let Some(pending) = self.pending.take_if(|pending| pending.generation == expired.0) else {
            return false;
        };
        restore(button, &pending.original)
    }

    /// Drop the safety timer, e.g. when the page is navigating away. The
    /// original content is kept for [`SubmitLockout::release`].
    pub fn cancel<S: Scheduler<LockoutExpired>>(&mut self, sched: &mut S) -> bool {
        let task = self.pending.as_mut().and_then(|pending| pending.task.take());
        task.is_some_and(|task| sched.cancel(task))
    }

    /// Cancel any timer and restore the button now if it is still locked.
    pub fn release<B, S>(&mut self, button: &mut B, sched: &mut S) -> bool
    where
        B: SubmitControl + ?Sized,
        S: Scheduler<LockoutExpired>,
    {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if let Some(task) = pending.task {
            sched.cancel(task);
        }
        restore(button, &pending.original)
    }

    /// Whether a restore timer is scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.task.is_some())
    }
}

fn restore<B: SubmitControl + ?Sized>(button: &mut B, original: &str) -> bool {
    if !button.is_disabled() {
        return false;
    }
    button.set_disabled(false);
    button.set_content(original);
    true
}
