//! `.dashboard-card` reveal binding over `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::config::UiConfig;
use crate::consts::CARD_SELECTOR;
use crate::error::UiError;
use crate::reveal::{REVEALED_STYLE, RevealTracker, Visibility};

struct RevealState {
    core: RevealTracker,
    cards: Vec<HtmlElement>,
}

impl RevealState {
    fn handle(&mut self, observer: &IntersectionObserver, entry: &IntersectionObserverEntry) {
        let target = entry.target();
        let Some(id) = self.cards.iter().position(|card| AsRef::<Element>::as_ref(card) == &target) else {
            return;
        };
        let seen = Visibility { is_intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
        if !self.core.on_intersection(id, seen) {
            return;
        }
        let card = &self.cards[id];
        for (property, value) in REVEALED_STYLE {
            dom::report("reveal", dom::set_style(card, property, value));
        }
        observer.unobserve(card);
    }
}

pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let cards: Vec<HtmlElement> = dom::query_all(document, CARD_SELECTOR)?;
    if cards.is_empty() {
        return Ok(());
    }

    let mut core = RevealTracker::new(config);
    for id in 0..cards.len() {
        core.observe(id);
    }
    let state = Rc::new(RefCell::new(RevealState { core, cards: cards.clone() }));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut state = state.borrow_mut();
            for entry in entries.iter() {
                if let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() {
                    state.handle(&observer, entry);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in &cards {
        observer.observe(card);
    }
    log::debug!("reveal: observing {} card(s)", cards.len());
    Ok(())
}
