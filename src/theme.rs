//! Light/dark theme preference, persistence and icon sync.
//!
//! The preference is read from storage and stamped onto `<html data-theme>`
//! before the page paints. The wasm module loads too late for that, so the
//! pre-paint step is the inline snippet from [`bootstrap_script`]; the module
//! re-applies the same preference with [`apply_initial`]. From then on the attribute
//! is the source of truth for the session; [`ThemeController::set`] is the
//! only writer and keeps the attribute, the stored value and the sun/moon
//! icons in step.
//!
//! DESIGN
//! ======
//! The controller only talks to two capability traits, [`PreferenceStore`]
//! and [`ThemeSurface`]. The browser binding backs them with `localStorage`
//! and the live document; tests back them with in-memory fakes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// Persisted display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Value written to storage and to the root attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UiError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Resolve a raw stored value. Absent or unrecognised values give the default.
pub fn initial_preference(stored: Option<&str>) -> ThemePreference {
    match stored.map(str::parse::<ThemePreference>) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            log::debug!("theme: ignoring stored value ({err})");
            ThemePreference::default()
        }
        None => ThemePreference::default(),
    }
}

/// Inline `<head>` script that applies the stored preference synchronously,
/// before first paint.
///
/// Resolves the value like [`initial_preference`]: surrounding whitespace is
/// trimmed, and absent, unreadable or unknown values give the default mode.
pub fn bootstrap_script(storage_key: &str, attribute: &str) -> String {
    format!(
        "(function(){{var m=null;try{{m=window.localStorage.getItem({key});}}catch(e){{}}\
         if(m!==null){{m=m.trim();}}\
         if(m!=={light}&&m!=={dark}){{m={default};}}\
         document.documentElement.setAttribute({attribute},m);}})();",
        key = js_string(storage_key),
        light = js_string(ThemePreference::Light.as_str()),
        dark = js_string(ThemePreference::Dark.as_str()),
        default = js_string(ThemePreference::default().as_str()),
        attribute = js_string(attribute),
    )
}

/// JSON string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string().replace('<', "\\u003c")
}

/// Whether a key activates the toggle control like a click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Which of the two theme icons should be shown.
///
/// Dark mode shows the sun (switch to light); light mode shows the moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub sun: bool,
    pub moon: bool,
}

impl IconVisibility {
    pub const fn for_mode(mode: ThemePreference) -> Self {
        match mode {
            ThemePreference::Dark => Self { sun: true, moon: false },
            ThemePreference::Light => Self { sun: false, moon: true },
        }
    }
}

/// Durable key-value slot for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`UiError::Storage`] if the value could not be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), UiError>;
}

/// The parts of the page the theme touches.
pub trait ThemeSurface {
    /// Current value of the root mode attribute, if set.
    fn mode_attribute(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the root element is unavailable.
    fn set_mode_attribute(&mut self, value: &str) -> Result<(), UiError>;

    /// Show/hide the icons. Returns `false` without touching anything when
    /// either icon is missing from the page.
    fn show_icons(&mut self, icons: IconVisibility) -> bool;

    /// Brief scale pulse on the toggle control. Purely cosmetic.
    fn pulse_toggle(&mut self) {}
}

/// A control with a binary mode that can be flipped.
pub trait Toggleable {
    fn current_mode(&self) -> ThemePreference;
    fn toggle(&mut self) -> ThemePreference;
}

/// Read the stored preference and apply it to the surface.
///
/// Runs before first paint, so it does not touch the icons.
pub fn apply_initial<S, D>(store: &S, surface: &mut D, storage_key: &str) -> ThemePreference
where
    S: PreferenceStore + ?Sized,
    D: ThemeSurface + ?Sized,
{
    let mode = initial_preference(store.load(storage_key).as_deref());
    if let Err(err) = surface.set_mode_attribute(mode.as_str()) {
        log::warn!("theme: could not apply initial mode: {err}");
    }
    mode
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemePreference)>;

/// Owner of the theme for the lifetime of a page view.
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    storage_key: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    /// Attach to a surface whose mode attribute is already set.
    pub fn new(store: S, surface: D, storage_key: impl Into<String>) -> Self {
        Self { store, surface, storage_key: storage_key.into(), subscribers: Vec::new(), next_subscription: 0 }
    }

    /// Apply the stored preference, then attach.
    pub fn init(store: S, mut surface: D, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        apply_initial(&store, &mut surface, &storage_key);
        Self::new(store, surface, storage_key)
    }

    /// Mode as shown on the page right now.
    pub fn current_mode(&self) -> ThemePreference {
        initial_preference(self.surface.mode_attribute().as_deref())
    }

    /// Apply, persist and announce `mode`. Returns `false`, leaving storage
    /// and subscribers untouched, when the page could not be updated.
    pub fn set(&mut self, mode: ThemePreference) -> bool {
        if let Err(err) = self.surface.set_mode_attribute(mode.as_str()) {
            log::warn!("theme: could not apply {mode}: {err}");
            return false;
        }
        if let Err(err) = self.store.save(&self.storage_key, mode.as_str()) {
            log::warn!("theme: could not persist {mode}: {err}");
        }
        self.update_icons();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(mode);
        }
        true
    }

    /// Flip the mode. Returns the mode now shown, which is unchanged if the
    /// switch failed.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current_mode().toggled();
        if !self.set(next) {
            return self.current_mode();
        }
        self.surface.pulse_toggle();
        log::debug!("theme: switched to {next}");
        next
    }

    /// Sync icon visibility with the current mode. Returns `false` if the
    /// icons are not on this page.
    pub fn update_icons(&mut self) -> bool {
        let icons = IconVisibility::for_mode(self.current_mode());
        self.surface.show_icons(icons)
    }

    /// Register a callback run after every mode change.
    pub fn subscribe(&mut self, callback: impl FnMut(ThemePreference) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

impl<S: PreferenceStore, D: ThemeSurface> Toggleable for ThemeController<S, D> {
    fn current_mode(&self) -> ThemePreference {
        ThemeController::current_mode(self)
    }

    fn toggle(&mut self) -> ThemePreference {
        ThemeController::toggle(self)
    }
}
