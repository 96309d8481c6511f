//! Cancellable timers.
//!
//! Cores never call the browser's timer API directly. They hand a payload to
//! a [`Scheduler`] and get a [`TaskId`] back; when the delay elapses the host
//! feeds the payload into the core's `on_timer`. The browser implementation
//! lives in `browser::timers`. [`ManualScheduler`] runs the same cores against
//! a virtual clock so timing behavior can be tested deterministically.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::collections::BTreeMap;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// Something that can run a payload after a delay.
pub trait Scheduler<T> {
    /// Schedule `payload` to be delivered after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, payload: T) -> TaskId;

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, id: TaskId) -> bool;
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Tasks due at the same instant fire in scheduling order.
#[derive(Debug)]
pub struct ManualScheduler<T> {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<(u64, TaskId), T>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self { now_ms: 0, next_id: 0, pending: BTreeMap::new() }
    }
}

impl<T> ManualScheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.keys().any(|(_, task)| *task == id)
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. When nothing is due the clock moves to `until_ms` and
    /// `None` is returned.
    pub fn next_due(&mut self, until_ms: u64) -> Option<T> {
        let due = self.pending.first_key_value().map(|(&(at, _), _)| at);
        match due {
            Some(at) if at <= until_ms => {
                self.now_ms = self.now_ms.max(at);
                self.pending.pop_first().map(|(_, payload)| payload)
            }
            _ => {
                self.now_ms = self.now_ms.max(until_ms);
                None
            }
        }
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule(&mut self, delay_ms: u32, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now_ms + u64::from(delay_ms), id), payload);
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let key = self.pending.keys().find(|(_, task)| *task == id).copied();
        key.and_then(|key| self.pending.remove(&key)).is_some()
    }
}
