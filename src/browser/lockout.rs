//! Submit lockout binding for every `form`.
//!
//! The submit button is looked up at submit time, so buttons added after load
//! are covered too. `pagehide` cancels pending restores; a `pageshow` from the
//! back/forward cache releases any button still showing the spinner.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, PageTransitionEvent};

use super::dom;
use super::timers::BrowserScheduler;
use crate::config::UiConfig;
use crate::consts::{FORM_SELECTOR, SUBMIT_SELECTOR};
use crate::error::UiError;
use crate::lockout::{LockoutExpired, SubmitControl, SubmitLockout, SubmitOutcome};

struct ButtonControl(HtmlButtonElement);

impl SubmitControl for ButtonControl {
    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn content(&self) -> String {
        self.0.inner_html()
    }

    fn set_content(&mut self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

struct FormLock {
    core: SubmitLockout,
    button: Option<ButtonControl>,
    timers: BrowserScheduler<LockoutExpired>,
}

impl FormLock {
    fn submit(&mut self, form: &Element) -> Result<(), UiError> {
        let Some(button) = form.query_selector(SUBMIT_SELECTOR)?.and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned())
        else {
            return Ok(());
        };
        let mut control = ButtonControl(button);
        if self.core.on_submit(&mut control, &mut self.timers) == SubmitOutcome::Locked {
            log::debug!("lockout: submit button locked");
            self.button = Some(control);
        }
        Ok(())
    }

    fn expire(&mut self, expired: LockoutExpired) {
        let Some(button) = self.button.as_mut() else {
            return;
        };
        if self.core.on_timer(expired, button) {
            log::debug!("lockout: submit button restored after timeout");
        }
    }

    fn cancel(&mut self) {
        self.core.cancel(&mut self.timers);
    }

    fn release(&mut self) {
        let Some(button) = self.button.as_mut() else {
            return;
        };
        if self.core.release(button, &mut self.timers) {
            log::debug!("lockout: submit button released on page restore");
        }
    }
}

pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let forms: Vec<Element> = dom::query_all(document, FORM_SELECTOR)?;
    if forms.is_empty() {
        return Ok(());
    }

    let mut locks = Vec::with_capacity(forms.len());
    for form in forms {
        let lock = Rc::new(RefCell::new(FormLock {
            core: SubmitLockout::new(config),
            button: None,
            timers: BrowserScheduler::new(),
        }));
        let sink = Rc::clone(&lock);
        lock.borrow().timers.connect(move |expired| sink.borrow_mut().expire(expired));

        let on_submit = Rc::clone(&lock);
        let target = form.clone();
        dom::listen(&form, "submit", move |_: Event| {
            dom::report("lockout", on_submit.borrow_mut().submit(&target));
        })?;
        locks.push(lock);
    }

    let window = dom::window()?;
    let on_hide = locks.clone();
    dom::listen(&window, "pagehide", move |_: Event| {
        for lock in &on_hide {
            lock.borrow_mut().cancel();
        }
    })?;
    dom::listen(&window, "pageshow", move |event: Event| {
        let restored = event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        if !restored {
            return;
        }
        for lock in &locks {
            lock.borrow_mut().release();
        }
    })?;
    Ok(())
}
