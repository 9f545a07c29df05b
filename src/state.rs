//! Interaction states and their priority-ordered resolution.
//!
//! The platform's state-list matching is replaced here by an explicit
//! finite enumeration: six recognized states, checked in declaration
//! order, first match wins. Disabled takes precedence over everything
//! else.

// ============================================================================
// InteractionState
// ============================================================================

/// One of the six recognized interaction states, in descending
/// priority order.
///
/// When several flags apply at once, the highest-priority state wins:
/// a disabled-and-checked widget renders its disabled icon, a
/// pressed-and-focused one its pressed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// The enabled flag is absent. Beats every other flag.
    Disabled = 0,
    /// Checked and enabled.
    Checked = 1,
    /// Pressed and enabled.
    Pressed = 2,
    /// Focused and enabled.
    Focused = 3,
    /// Selected and enabled.
    Selected = 4,
    /// Enabled with no other flag set. The default/fallback state.
    Enabled = 5,
}

impl InteractionState {
    /// Number of recognized states.
    pub const COUNT: usize = 6;

    /// All states in descending priority order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Disabled,
        Self::Checked,
        Self::Pressed,
        Self::Focused,
        Self::Selected,
        Self::Enabled,
    ];

    /// The state's position in the priority order, usable as an array
    /// index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolves a flag set to the highest-priority matching state.
    pub const fn from_flags(flags: StateFlags) -> Self {
        if !flags.enabled {
            Self::Disabled
        } else if flags.checked {
            Self::Checked
        } else if flags.pressed {
            Self::Pressed
        } else if flags.focused {
            Self::Focused
        } else if flags.selected {
            Self::Selected
        } else {
            Self::Enabled
        }
    }
}

// ============================================================================
// StateFlags
// ============================================================================

/// The raw flag set reported by a hosting view.
///
/// Flags combine freely; [`InteractionState::from_flags`] collapses a
/// combination to the single state whose icon gets displayed.
///
/// ```
/// use icon_states::{InteractionState, StateFlags};
///
/// let flags = StateFlags::ENABLED.with_pressed(true).with_focused(true);
/// assert_eq!(InteractionState::from_flags(flags), InteractionState::Pressed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateFlags {
    /// Whether the view is enabled. `false` overrides all other flags.
    pub enabled: bool,
    /// Whether the view is checked.
    pub checked: bool,
    /// Whether the view is pressed.
    pub pressed: bool,
    /// Whether the view is focused.
    pub focused: bool,
    /// Whether the view is selected.
    pub selected: bool,
}

impl StateFlags {
    /// Enabled with no other flag set.
    pub const ENABLED: Self = Self {
        enabled: true,
        checked: false,
        pressed: false,
        focused: false,
        selected: false,
    };

    /// All flags absent, i.e. disabled.
    pub const DISABLED: Self = Self {
        enabled: false,
        checked: false,
        pressed: false,
        focused: false,
        selected: false,
    };

    /// Sets the enabled flag.
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the checked flag.
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the pressed flag.
    pub const fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Sets the focused flag.
    pub const fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the selected flag.
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_matches_indices() {
        for (i, state) in InteractionState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn disabled_beats_every_other_flag() {
        let flags = StateFlags {
            enabled: false,
            checked: true,
            pressed: true,
            focused: true,
            selected: true,
        };
        assert_eq!(InteractionState::from_flags(flags), InteractionState::Disabled);
    }

    #[test]
    fn checked_beats_pressed_focused_selected() {
        let flags = StateFlags::ENABLED
            .with_checked(true)
            .with_pressed(true)
            .with_focused(true)
            .with_selected(true);
        assert_eq!(InteractionState::from_flags(flags), InteractionState::Checked);
    }

    #[test]
    fn pressed_beats_focused_and_selected() {
        let flags = StateFlags::ENABLED
            .with_pressed(true)
            .with_focused(true)
            .with_selected(true);
        assert_eq!(InteractionState::from_flags(flags), InteractionState::Pressed);
    }

    #[test]
    fn focused_beats_selected() {
        let flags = StateFlags::ENABLED.with_focused(true).with_selected(true);
        assert_eq!(InteractionState::from_flags(flags), InteractionState::Focused);
    }

    #[test]
    fn bare_enabled_is_the_fallback() {
        assert_eq!(
            InteractionState::from_flags(StateFlags::ENABLED),
            InteractionState::Enabled
        );
    }

    #[test]
    fn default_flags_are_disabled() {
        assert_eq!(
            InteractionState::from_flags(StateFlags::default()),
            InteractionState::Disabled
        );
        assert_eq!(StateFlags::default(), StateFlags::DISABLED);
    }
}
