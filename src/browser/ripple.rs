//! Ripple binding for every `.btn`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use super::dom;
use super::timers::BrowserScheduler;
use crate::config::UiConfig;
use crate::consts::BUTTON_SELECTOR;
use crate::error::UiError;
use crate::ripple::{RippleExpired, RippleGeometry, RippleId, RippleSet, keyframes_css};

struct RippleState {
    core: RippleSet,
    spans: HashMap<RippleId, HtmlElement>,
    timers: BrowserScheduler<RippleExpired>,
}

impl RippleState {
    fn spawn(&mut self, document: &Document, button: &HtmlElement, click: &MouseEvent) -> Result<(), UiError> {
        let geometry = RippleGeometry::at_click(
            f64::from(click.client_x()),
            f64::from(click.client_y()),
            f64::from(button.offset_left()),
            f64::from(button.offset_top()),
        );
        let span: HtmlElement = dom::create(document, "span")?;
        for (property, value) in geometry.style(self.core.duration_ms()) {
            dom::set_style(&span, property, &value)?;
        }
        button.append_child(&span)?;
        let id = self.core.spawn(&mut self.timers);
        self.spans.insert(id, span);
        Ok(())
    }

    fn expire(&mut self, expired: RippleExpired) {
        if let Some(id) = self.core.on_timer(expired)
            && let Some(span) = self.spans.remove(&id)
        {
            span.remove();
        }
    }
}

fn inject_keyframes(document: &Document, scale: f64) -> Result<(), UiError> {
    let head = document.head().ok_or(UiError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(&keyframes_css(scale)));
    head.append_child(&style)?;
    Ok(())
}

pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let buttons: Vec<HtmlElement> = dom::query_all(document, BUTTON_SELECTOR)?;
    inject_keyframes(document, config.ripple_scale)?;
    if buttons.is_empty() {
        return Ok(());
    }

    let state = Rc::new(RefCell::new(RippleState {
        core: RippleSet::new(config),
        spans: HashMap::new(),
        timers: BrowserScheduler::new(),
    }));
    let sink = Rc::clone(&state);
    state.borrow().timers.connect(move |expired| sink.borrow_mut().expire(expired));

    for button in buttons {
        let state = Rc::clone(&state);
        let document = document.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |event: Event| {
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            dom::report("ripple", state.borrow_mut().spawn(&document, &target, click));
        })?;
    }
    Ok(())
}
