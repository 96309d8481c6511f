//! Theme binding: `<html data-theme>`, the toggle control and its icons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::dom;
use super::storage::LocalStorage;
use crate::config::UiConfig;
use crate::consts::{HIDDEN_CLASS, MOON_ICON_ID, SUN_ICON_ID, THEME_ATTRIBUTE, THEME_TOGGLE_ID, TOGGLE_PULSE_MS};
use crate::error::UiError;
use crate::theme::{self, IconVisibility, ThemeController, ThemePreference, ThemeSurface, is_activation_key};

/// The live document as a [`ThemeSurface`]. Any part may be missing.
pub struct DocumentTheme {
    root: Option<Element>,
    toggle: Option<HtmlElement>,
    sun: Option<Element>,
    moon: Option<Element>,
}

impl DocumentTheme {
    /// Root element only; usable before the body is parsed.
    pub fn root_only(document: &Document) -> Self {
        Self { root: document.document_element(), toggle: None, sun: None, moon: None }
    }

    pub fn attach(document: &Document) -> Self {
        Self {
            root: document.document_element(),
            toggle: dom::by_id(document, THEME_TOGGLE_ID),
            sun: document.get_element_by_id(SUN_ICON_ID),
            moon: document.get_element_by_id(MOON_ICON_ID),
        }
    }
}

impl ThemeSurface for DocumentTheme {
    fn mode_attribute(&self) -> Option<String> {
        self.root.as_ref()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_mode_attribute(&mut self, value: &str) -> Result<(), UiError> {
        let root = self.root.as_ref().ok_or(UiError::MissingElement("document root"))?;
        root.set_attribute(THEME_ATTRIBUTE, value)?;
        Ok(())
    }

    fn show_icons(&mut self, icons: IconVisibility) -> bool {
        let (Some(sun), Some(moon)) = (&self.sun, &self.moon) else {
            return false;
        };
        dom::report("theme", dom::toggle_class(sun, HIDDEN_CLASS, !icons.sun));
        dom::report("theme", dom::toggle_class(moon, HIDDEN_CLASS, !icons.moon));
        true
    }

    fn pulse_toggle(&mut self) {
        let Some(toggle) = self.toggle.clone() else {
            return;
        };
        dom::report("theme", dom::set_style(&toggle, "transform", "scale(0.9)"));
        spawn_local(async move {
            TimeoutFuture::new(TOGGLE_PULSE_MS).await;
            if let Err(err) = toggle.style().remove_property("transform") {
                log::debug!("theme: pulse reset failed: {}", UiError::from(err));
            }
        });
    }
}

/// Stamp the stored preference onto `<html>`. Safe to call from `<head>`.
pub fn apply_stored(document: &Document, config: &UiConfig) -> ThemePreference {
    let mut surface = DocumentTheme::root_only(document);
    theme::apply_initial(&LocalStorage::open(), &mut surface, &config.storage_key)
}

/// Wire the toggle control. Pages without one only get the initial theme.
pub fn install(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let surface = DocumentTheme::attach(document);
    let Some(toggle) = surface.toggle.clone() else {
        log::debug!("theme: no #{THEME_TOGGLE_ID} on this page");
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalStorage::open(),
        surface,
        config.storage_key.clone(),
    )));
    if !controller.borrow_mut().update_icons() {
        log::debug!("theme: icons missing, skipping icon sync");
    }

    let on_click = Rc::clone(&controller);
    dom::listen(&toggle, "click", move |_: Event| {
        on_click.borrow_mut().toggle();
    })?;

    dom::listen(&toggle, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if is_activation_key(&key) {
            event.prevent_default();
            controller.borrow_mut().toggle();
        }
    })?;
    Ok(())
}
