//! Keyboard-navigation body class.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

use super::dom;
use crate::config::UiConfig;
use crate::consts::KEYBOARD_NAV_CLASS;
use crate::error::UiError;
use crate::keyboard_nav::KeyboardNav;

pub fn install(document: &Document, _config: &UiConfig) -> Result<(), UiError> {
    let body = dom::body(document)?;
    let nav = Rc::new(RefCell::new(KeyboardNav::default()));

    let on_key = Rc::clone(&nav);
    let key_body = body.clone();
    dom::listen(document, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(active) = on_key.borrow_mut().on_key_down(&key) {
            dom::report("keyboard", dom::toggle_class(&key_body, KEYBOARD_NAV_CLASS, active));
        }
    })?;

    dom::listen(document, "pointerdown", move |_: Event| {
        if let Some(active) = nav.borrow_mut().on_pointer_down() {
            dom::report("keyboard", dom::toggle_class(&body, KEYBOARD_NAV_CLASS, active));
        }
    })?;
    Ok(())
}
