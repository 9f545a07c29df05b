//! Color types for icon tinting.
//!
//! This module provides [`Color`], a packed RGBA value with a reserved
//! "no effect" sentinel, and [`ColorResolver`], the per-state color
//! selection logic used by the cache. A resolver is either a single
//! flat color or a [`StateColorTable`] with per-state entries and a
//! default — which mode is active is a type-level fact, not a pair of
//! nullable fields.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::state::InteractionState;

// ============================================================================
// Color
// ============================================================================

/// A 32-bit color packed as `0xRRGGBBAA`.
///
/// The zero value ([`Color::TRANSPARENT`]) is reserved: the compositor
/// interprets it as "apply no tint/shadow", not as a literal drawable
/// transparent black.
///
/// Colors serialize as `"#rrggbbaa"` hex strings:
///
/// ```
/// use icon_states::Color;
///
/// let red = Color::rgba(255, 0, 0, 255);
/// assert_eq!(red.to_string(), "#ff0000ff");
/// assert_eq!(Color::from_hex("#ff0000ff"), Some(red));
/// assert_eq!(Color::from_hex("#ff0000"), Some(red)); // alpha defaults to ff
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The "no effect" sentinel for tint and shadow parameters.
    pub const TRANSPARENT: Self = Self(0);

    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    /// Opaque black.
    pub const BLACK: Self = Self(0x0000_00ff);

    /// Packs the given channels into a color.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// The channels as an `[r, g, b, a]` array.
    pub const fn channels(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Whether this is the "no effect" sentinel.
    pub const fn is_transparent(self) -> bool {
        self.0 == 0
    }

    /// Parses a `#rrggbbaa` or `#rrggbb` hex literal.
    ///
    /// Six-digit literals get a fully opaque alpha. Returns `None` for
    /// anything else.
    pub fn from_hex(literal: &str) -> Option<Self> {
        let hex = literal.strip_prefix('#')?;
        match hex.len() {
            8 => u32::from_str_radix(hex, 16).ok().map(Self),
            6 => u32::from_str_radix(hex, 16)
                .ok()
                .map(|rgb| Self((rgb << 8) | 0xff)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Self::from_hex(&literal)
            .ok_or_else(|| D::Error::custom(format!("invalid color literal: {literal:?}")))
    }
}

// ============================================================================
// StateColorTable
// ============================================================================

/// Per-state colors with a required default.
///
/// States without an entry fall back to the default, mirroring how a
/// platform color-state-list resolves. Build one with the fluent
/// setters:
///
/// ```
/// use icon_states::{Color, InteractionState, StateColorTable};
///
/// let table = StateColorTable::new(Color::rgba(0x60, 0x60, 0x60, 0xff))
///     .pressed(Color::rgba(0xff, 0x40, 0x40, 0xff))
///     .disabled(Color::rgba(0x30, 0x30, 0x30, 0x80));
///
/// // Focused has no entry, so it resolves to the default.
/// assert_eq!(
///     table.resolve(InteractionState::Focused),
///     Color::rgba(0x60, 0x60, 0x60, 0xff),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateColorTable {
    /// Fallback color for states without an explicit entry.
    pub default: Color,

    /// Color for the disabled state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Color>,

    /// Color for the checked (and enabled) state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<Color>,

    /// Color for the pressed (and enabled) state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<Color>,

    /// Color for the focused (and enabled) state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<Color>,

    /// Color for the selected (and enabled) state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<Color>,

    /// Color for the plain enabled state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Color>,
}

impl StateColorTable {
    /// Creates a table where every state resolves to `default`.
    pub fn new(default: Color) -> Self {
        Self {
            default,
            disabled: None,
            checked: None,
            pressed: None,
            focused: None,
            selected: None,
            enabled: None,
        }
    }

    /// Sets the disabled-state color.
    pub fn disabled(mut self, color: Color) -> Self {
        self.disabled = Some(color);
        self
    }

    /// Sets the checked-state color.
    pub fn checked(mut self, color: Color) -> Self {
        self.checked = Some(color);
        self
    }

    /// Sets the pressed-state color.
    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    /// Sets the focused-state color.
    pub fn focused(mut self, color: Color) -> Self {
        self.focused = Some(color);
        self
    }

    /// Sets the selected-state color.
    pub fn selected(mut self, color: Color) -> Self {
        self.selected = Some(color);
        self
    }

    /// Sets the enabled-state color.
    pub fn enabled(mut self, color: Color) -> Self {
        self.enabled = Some(color);
        self
    }

    /// Resolves the color for a state, falling back to the default.
    pub fn resolve(&self, state: InteractionState) -> Color {
        let entry = match state {
            InteractionState::Disabled => self.disabled,
            InteractionState::Checked => self.checked,
            InteractionState::Pressed => self.pressed,
            InteractionState::Focused => self.focused,
            InteractionState::Selected => self.selected,
            InteractionState::Enabled => self.enabled,
        };
        entry.unwrap_or(self.default)
    }
}

// ============================================================================
// ColorResolver
// ============================================================================

/// Per-state color selection: either one flat color for every state or
/// a [`StateColorTable`].
///
/// The cache holds one resolver for the icon tint and one for the
/// shadow tint. Installing a flat color replaces any table and vice
/// versa, so the two representations can never coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorResolver {
    /// The same color for every state.
    Flat(Color),
    /// Per-state colors with a default.
    Table(StateColorTable),
}

impl ColorResolver {
    /// Resolves the effective color for a state.
    pub fn resolve(&self, state: InteractionState) -> Color {
        match self {
            Self::Flat(color) => *color,
            Self::Table(table) => table.resolve(state),
        }
    }

    /// Whether this resolver is a flat color.
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Whether this resolver is a per-state table.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

impl Default for ColorResolver {
    /// The sentinel flat color, i.e. no tint at all.
    fn default() -> Self {
        Self::Flat(Color::TRANSPARENT)
    }
}

impl From<Color> for ColorResolver {
    fn from(color: Color) -> Self {
        Self::Flat(color)
    }
}

impl From<StateColorTable> for ColorResolver {
    fn from(table: StateColorTable) -> Self {
        Self::Table(table)
    }
}

// ============================================================================
// Tests
// ============================================================================
