//! Form field presentation state.
//!
//! A `.form-control` carries `has-value` while it is non-empty, and its
//! enclosing `.form-group` carries `focused` while the control has focus.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent<'a> {
    Focus,
    Blur,
    Input(&'a str),
}

/// Class change the host should apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEffect {
    /// Toggle `has-value` on the control.
    SetHasValue(bool),
    /// Toggle `focused` on the enclosing group.
    SetGroupFocused(bool),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub has_value: bool,
    pub focused: bool,
}

impl FieldState {
    /// State for a control rendered with `value`.
    pub fn initial(value: &str) -> Self {
        Self { has_value: !value.is_empty(), focused: false }
    }

    /// Effect needed to show the initial state, if any.
    pub fn initial_effect(&self) -> Option<FieldEffect> {
        self.has_value.then_some(FieldEffect::SetHasValue(true))
    }

    /// Feed an event. Returns an effect only when a flag changes.
    pub fn apply(&mut self, event: FieldEvent<'_>) -> Option<FieldEffect> {
        match event {
            FieldEvent::Focus | FieldEvent::Blur => {
                let focused = matches!(event, FieldEvent::Focus);
                if self.focused == focused {
                    return None;
                }
                self.focused = focused;
                Some(FieldEffect::SetGroupFocused(focused))
            }
            FieldEvent::Input(value) => {
                let has_value = !value.is_empty();
                if self.has_value == has_value {
                    return None;
                }
                self.has_value = has_value;
                Some(FieldEffect::SetHasValue(has_value))
            }
        }
    }
}
