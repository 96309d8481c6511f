//! Flash message binding: fades and removes every `.alert` on the page.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement};

use super::dom;
use super::timers::BrowserScheduler;
use crate::config::UiConfig;
use crate::consts::FLASH_SELECTOR;
use crate::error::UiError;
use crate::flash::{FlashDismissal, FlashEffect, FlashTimer, fade_out_style};

struct FlashState {
    core: FlashDismissal,
    messages: Vec<HtmlElement>,
    timers: BrowserScheduler<FlashTimer>,
}

impl FlashState {
    fn fire(&mut self, timer: FlashTimer) {
        match self.core.on_timer(timer, &mut self.timers) {
            Some(FlashEffect::FadeOut(id)) => {
                if let Some(message) = self.messages.get(id) {
                    for (property, value) in fade_out_style() {
                        dom::report("flash", dom::set_style(message, property, &value));
                    }
                }
            }
            Some(FlashEffect::Remove(id)) => {
                if let Some(message) = self.messages.get(id) {
                    message.remove();
                }
            }
            None => {}
        }
    }
}

pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let messages: Vec<HtmlElement> = dom::query_all(document, FLASH_SELECTOR)?;
    if messages.is_empty() {
        return Ok(());
    }
    log::debug!("flash: dismissing {} message(s)", messages.len());

    let state = Rc::new(RefCell::new(FlashState {
        core: FlashDismissal::new(config),
        messages,
        timers: BrowserScheduler::new(),
    }));
    let sink = Rc::clone(&state);
    state.borrow().timers.connect(move |timer| sink.borrow_mut().fire(timer));

    let mut guard = state.borrow_mut();
    let FlashState { core, messages, timers } = &mut *guard;
    for _ in 0..messages.len() {
        core.track(timers);
    }
    Ok(())
}
