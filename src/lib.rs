//! Page behaviors for the secure login site.
//!
//! This crate is compiled to WebAssembly and loaded by every server-rendered
//! page. It layers cosmetic and interaction behaviors on top of plain HTML:
//! the light/dark theme, flash-message dismissal, button ripples, form field
//! state, submit lockout, page fade-in, card reveal and keyboard-navigation
//! hints. The page works without it; every behavior tolerates missing markup.
//!
//! Each behavior is split into a plain-Rust core that owns the state machine
//! and a browser binding (feature `browser`) that feeds DOM events in and
//! applies the resulting effects. The cores are what the tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference, persistence and the [`theme::ThemeController`] |
//! | [`flash`] | Timed fade-out and removal of flash messages |
//! | [`password`] | Password strength heuristic |
//! | [`ripple`] | Ripple geometry, keyframes and live-ripple bookkeeping |
//! | [`field`] | `has-value` / `focused` tracking for form controls |
//! | [`lockout`] | Submit button loading state with a cancellable safety timer |
//! | [`fade`] | Body fade-in on load |
//! | [`reveal`] | One-shot scroll reveal of dashboard cards |
//! | [`keyboard_nav`] | Keyboard-navigation body flag |
//! | [`scheduler`] | Cancellable timer abstraction and a deterministic test clock |
//! | [`config`] | Runtime configuration (timings, storage key, threshold) |
//! | [`consts`] | Default timings, selectors and class names |
//! | [`error`] | Crate error type |
//! | `browser` | `web-sys` bindings and the wasm entry point (feature `browser`) |

pub mod config;
pub mod consts;
pub mod error;
pub mod fade;
pub mod field;
pub mod flash;
pub mod keyboard_nav;
pub mod lockout;
pub mod password;
pub mod reveal;
pub mod ripple;
pub mod scheduler;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::UiConfig;
pub use error::UiError;
pub use theme::{ThemeController, ThemePreference};
