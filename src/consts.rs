//! Shared constants: default timings, DOM selectors and class names.

// ── Timings (milliseconds) ──────────────────────────────────────

/// Delay before a flash message starts fading out.
pub const FLASH_DELAY_MS: u32 = 5000;

/// Time between the fade-out and removing the flash element.
pub const FLASH_REMOVAL_MS: u32 = 400;

/// Ripple animation length; the span is removed when it ends.
pub const RIPPLE_MS: u32 = 600;

/// Safety-net delay before a locked submit button is re-enabled.
pub const LOCKOUT_MS: u32 = 10_000;

/// Scheduling gap between hiding the body and starting the fade-in.
pub const FADE_DELAY_MS: u32 = 10;

/// Length of the body opacity transition.
pub const FADE_DURATION_MS: u32 = 300;

/// How long the theme toggle stays scaled down after a click.
pub const TOGGLE_PULSE_MS: u32 = 100;

// ── Geometry ────────────────────────────────────────────────────

/// Ripple diameter in CSS pixels before scaling.
pub const RIPPLE_SIZE_PX: f64 = 100.0;

/// Final ripple scale factor.
pub const RIPPLE_SCALE: f64 = 4.0;

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Horizontal slide applied to a dismissed flash message.
pub const FLASH_SLIDE_PX: u32 = 100;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── DOM contract ────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const SUN_ICON_ID: &str = "sun-icon";
pub const MOON_ICON_ID: &str = "moon-icon";
pub const PASSWORD_FIELD_ID: &str = "password";
pub const CONFIG_SCRIPT_ID: &str = "ui-config";

pub const FLASH_SELECTOR: &str = ".alert";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const FIELD_SELECTOR: &str = ".form-control";
pub const FIELD_GROUP_SELECTOR: &str = ".form-group";
pub const FORM_SELECTOR: &str = "form";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const CARD_SELECTOR: &str = ".dashboard-card";

pub const HIDDEN_CLASS: &str = "hidden";
pub const HAS_VALUE_CLASS: &str = "has-value";
pub const FOCUSED_CLASS: &str = "focused";
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

/// Markup swapped into a submit button while its form is in flight.
pub const LOADING_MARKUP: &str = "<span class=\"spinner\"></span> Processing...";
