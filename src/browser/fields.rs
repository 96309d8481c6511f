//! `.form-control` binding: `has-value` on the control, `focused` on its group.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

use super::dom;
use crate::config::UiConfig;
use crate::consts::{FIELD_GROUP_SELECTOR, FIELD_SELECTOR, FOCUSED_CLASS, HAS_VALUE_CLASS};
use crate::error::UiError;
use crate::field::{FieldEffect, FieldEvent, FieldState};

fn field_value(control: &Element) -> Option<String> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    control.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn apply(control: &Element, effect: FieldEffect) -> Result<(), UiError> {
    match effect {
        FieldEffect::SetHasValue(on) => dom::toggle_class(control, HAS_VALUE_CLASS, on),
        FieldEffect::SetGroupFocused(on) => match control.closest(FIELD_GROUP_SELECTOR)? {
            Some(group) => dom::toggle_class(&group, FOCUSED_CLASS, on),
            None => Ok(()),
        },
    }
}

fn bind(control: Element) -> Result<(), UiError> {
    let initial = FieldState::initial(&field_value(&control).unwrap_or_default());
    if let Some(effect) = initial.initial_effect() {
        apply(&control, effect)?;
    }
    let state = Rc::new(RefCell::new(initial));

    for name in ["focus", "blur", "input"] {
        let state = Rc::clone(&state);
        let target = control.clone();
        dom::listen(&control, name, move |_: Event| {
            let value = field_value(&target).unwrap_or_default();
            let event = match name {
                "focus" => FieldEvent::Focus,
                "blur" => FieldEvent::Blur,
                _ => FieldEvent::Input(&value),
            };
            let changed = state.borrow_mut().apply(event);
            if let Some(effect) = changed {
                dom::report("fields", apply(&target, effect));
            }
        })?;
    }
    Ok(())
}

pub fn install(document: &Document, _config: &UiConfig) -> Result<(), UiError> {
    let controls: Vec<Element> = dom::query_all(document, FIELD_SELECTOR)?;
    for control in controls {
        bind(control)?;
    }
    Ok(())
}
