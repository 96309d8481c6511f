//! Thin `web-sys` helpers shared by the behavior bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingElement("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingElement("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, UiError> {
    document.body().ok_or(UiError::MissingElement("body"))
}

/// All elements matching `selector` that are of type `T`.
pub fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>, UiError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect())
}

/// Element by id, if present and of type `T`.
pub fn by_id<T: JsCast + Clone>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_ref::<T>().cloned())
}

/// Create an element and cast it to `T`.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, UiError> {
    document.create_element(tag)?.dyn_into::<T>().map_err(|_| UiError::MissingElement(tag))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn toggle_class(el: &Element, class: &str, on: bool) -> Result<(), UiError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Log a failed DOM update for `behavior` and carry on.
pub fn report(behavior: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{behavior}: {err}");
    }
}
