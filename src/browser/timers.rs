//! [`Scheduler`] backed by browser timeouts.
//!
//! Each task is a `gloo-timers` future spawned on the local executor. Cancel
//! just forgets the id; the future still wakes up but delivers nothing.

use std::cell::{OnceCell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::scheduler::{Scheduler, TaskId};

type Sink<T> = Rc<OnceCell<Box<dyn Fn(T)>>>;

pub struct BrowserScheduler<T> {
    next_id: u64,
    live: Rc<RefCell<HashSet<TaskId>>>,
    sink: Sink<T>,
}

impl<T: 'static> Default for BrowserScheduler<T> {
    fn default() -> Self {
        Self { next_id: 0, live: Rc::new(RefCell::new(HashSet::new())), sink: Rc::new(OnceCell::new()) }
    }
}

impl<T: 'static> BrowserScheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where fired payloads go. Only the first call wins.
    ///
    /// Behaviors live for the whole page view, so the sink may own the state
    /// that owns this scheduler.
    pub fn connect(&self, sink: impl Fn(T) + 'static) -> bool {
        self.sink.set(Box::new(sink)).is_ok()
    }
}

impl<T: 'static> Scheduler<T> for BrowserScheduler<T> {
    fn schedule(&mut self, delay_ms: u32, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.live.borrow_mut().insert(id);

        let live = Rc::clone(&self.live);
        let sink = Rc::clone(&self.sink);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let still_live = live.borrow_mut().remove(&id);
            if !still_live {
                return;
            }
            match sink.get() {
                Some(deliver) => deliver(payload),
                None => log::debug!("timers: task {} fired with no sink", id.0),
            }
        });
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        self.live.borrow_mut().remove(&id)
    }
}
