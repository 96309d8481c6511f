//! Keyboard-navigation flag.
//!
//! The body gets `keyboard-navigation` on a Tab press so the stylesheet can
//! show focus rings, and loses it on the next pointer press.

#[cfg(test)]
#[path = "keyboard_nav_test.rs"]
mod keyboard_nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardNav {
    active: bool,
}

impl KeyboardNav {
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Returns the new flag value when a key press changes it.
    pub fn on_key_down(&mut self, key: &str) -> Option<bool> {
        if key != "Tab" || self.active {
            return None;
        }
        self.active = true;
        Some(true)
    }

    /// Returns the new flag value when a pointer press changes it.
    pub fn on_pointer_down(&mut self) -> Option<bool> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(false)
    }
}
