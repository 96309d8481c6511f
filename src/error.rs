//! Crate error type.
//!
//! Behaviors never surface errors to the page. Installers return
//! `Result<(), UiError>` and the entry point logs whatever comes back, so a
//! failing behavior only costs its own visual enhancement.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
