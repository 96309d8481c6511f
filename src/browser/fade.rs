//! Body fade-in binding.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement};

use super::dom;
use super::timers::BrowserScheduler;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::fade::{BodyStyle, FadeStart, PageFade};

fn apply(body: &HtmlElement, style: &BodyStyle) -> Result<(), UiError> {
    // Transition first, or the opacity change would not animate.
    if let Some(transition) = &style.transition {
        dom::set_style(body, "transition", transition)?;
    }
    dom::set_style(body, "opacity", style.opacity)
}

struct FadeState {
    core: PageFade,
    body: HtmlElement,
    timers: BrowserScheduler<FadeStart>,
}

pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let body = dom::body(document)?;
    let state = Rc::new(RefCell::new(FadeState { core: PageFade::new(config), body, timers: BrowserScheduler::new() }));
    let sink = Rc::clone(&state);
    state.borrow().timers.connect(move |start| {
        let mut state = sink.borrow_mut();
        if let Some(style) = state.core.on_timer(start) {
            dom::report("fade", apply(&state.body, &style));
        }
    });

    let mut guard = state.borrow_mut();
    let FadeState { core, body, timers } = &mut *guard;
    let hidden = core.on_load(timers);
    apply(body, &hidden)
}
