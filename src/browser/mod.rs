//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wasm instantiation is asynchronous, so the module cannot run before first
//! paint. The server inlines [`crate::theme::bootstrap_script`] in `<head>` for
//! that; [`start`] re-applies the stored theme to `<html>` straight away, then
//! installs every other behavior once the document is parsed. Each installer
//! is independent: a failure is logged and the rest still run.

mod dom;
mod fade;
mod fields;
mod flash;
mod keyboard;
mod lockout;
mod password;
mod reveal;
mod ripple;
mod storage;
mod theme;
mod timers;

pub use storage::LocalStorage;
pub use theme::DocumentTheme;
pub use timers::BrowserScheduler;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::config::UiConfig;
use crate::consts::{CONFIG_SCRIPT_ID, THEME_ATTRIBUTE};
use crate::error::UiError;

type Installer = fn(&Document, &UiConfig) -> Result<(), UiError>;

const INSTALLERS: [(&str, Installer); 9] = [
    ("theme", theme::install),
    ("flash", flash::install),
    ("password", password::install),
    ("ripple", ripple::install),
    ("fields", fields::install),
    ("lockout", lockout::install),
    ("fade", fade::install),
    ("reveal", reveal::install),
    ("keyboard", keyboard::install),
];

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn banner() {
    log::info!("Secure Login System");
    log::info!("Built with security in mind | Enhanced UI/UX");
    log::info!("Tip: press the sun/moon icon to toggle light/dark mode!");
}

fn load_config(document: &Document) -> UiConfig {
    let raw = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    UiConfig::from_json_or_default(raw.as_deref())
}

fn install_all(document: &Document, config: &UiConfig) {
    for (name, install) in INSTALLERS {
        if let Err(err) = install(document, config) {
            log::warn!("{name}: install failed: {err}");
        }
    }
}

/// Apply the stored theme to `<html>`. Exported for hosts that load the
/// module manually and want the theme set before other behaviors.
#[wasm_bindgen]
pub fn init_theme() {
    match dom::document() {
        Ok(document) => {
            let mode = theme::apply_stored(&document, &load_config(&document));
            log::debug!("theme: initial mode {mode}");
        }
        Err(err) => log::warn!("theme: {err}"),
    }
}

/// The pre-paint `<head>` snippet for this page's configured storage key.
#[wasm_bindgen]
pub fn theme_bootstrap_script() -> String {
    let config = dom::document().map_or_else(|_| UiConfig::default(), |document| load_config(&document));
    crate::theme::bootstrap_script(&config.storage_key, THEME_ATTRIBUTE)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    banner();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("start: {err}");
            return;
        }
    };
    let config = load_config(&document);
    let mode = theme::apply_stored(&document, &config);
    log::debug!("theme: initial mode {mode}");

    if document.ready_state() != "loading" {
        install_all(&document, &config);
        return;
    }
    // The config block may sit in <body>, which is not parsed yet.
    let target = document.clone();
    let ready = dom::listen(&document, "DOMContentLoaded", move |_: Event| {
        install_all(&target, &load_config(&target));
    });
    if let Err(err) = ready {
        log::warn!("start: {err}");
    }
}
