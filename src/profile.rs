//! Serializable icon style profiles.
//!
//! An [`IconStyle`] captures a cache's styling parameters — icon tint,
//! shadow tint, shadow geometry — in a JSON-friendly format, replacing
//! declarative attribute inflation as the way to configure a cache in
//! one shot.
//!
//! # Example
//!
//! ```
//! use icon_states::{Color, IconStyle, ShadowSpec, StateColorTable, StateIconCache, Styleable};
//! use image::{Rgba, RgbaImage};
//!
//! let style = IconStyle::new()
//!     .with_icon_colors(StateColorTable::new(Color::rgba(0xee, 0xee, 0xee, 0xff))
//!         .pressed(Color::rgba(0xff, 0x57, 0x22, 0xff)))
//!     .with_shadow_color(Color::rgba(0, 0, 0, 0x66))
//!     .with_shadow(ShadowSpec::new(2.0, 1.0, 1.0));
//!
//! // Serialize for storage or cross-process transfer...
//! let json = style.to_json().unwrap();
//! let restored = IconStyle::from_json(&json).unwrap();
//!
//! // ...and apply to a cache in one batched regeneration.
//! let mut cache = StateIconCache::new();
//! cache.set_source(RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
//! cache.apply_style(&restored);
//! ```

use serde::{Deserialize, Serialize};

use crate::cache::StateIconCache;
use crate::color::{Color, ColorResolver, StateColorTable};
use crate::compose::ShadowSpec;

// ============================================================================
// Styleable Trait
// ============================================================================

/// Types that can be configured from an [`IconStyle`].
pub trait Styleable {
    /// Applies a style's settings to this instance.
    ///
    /// Fields the style leaves unset keep their current values.
    fn apply_style(&mut self, style: &IconStyle);

    /// Exports the current settings as a style.
    fn export_style(&self) -> IconStyle;
}

// ============================================================================
// IconStyle
// ============================================================================

/// A serializable set of icon styling parameters.
///
/// Unset fields mean "leave unchanged" when applied, so a style can
/// carry a partial override.
///
/// # JSON Format
///
/// ```json
/// {
///   "iconColors": { "table": { "default": "#eeeeeeff", "pressed": "#ff5722ff" } },
///   "shadowColors": { "flat": "#00000066" },
///   "shadow": { "radius": 2.0, "dx": 1.0, "dy": 1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IconStyle {
    /// Icon tint resolver. `None` leaves the cache's tint unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_colors: Option<ColorResolver>,

    /// Shadow color resolver. `None` leaves the cache's shadow color
    /// unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_colors: Option<ColorResolver>,

    /// Shadow geometry. `None` leaves the cache's shadow unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowSpec>,
}

impl IconStyle {
    /// Creates an empty style that changes nothing when applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flat icon tint.
    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_colors = Some(ColorResolver::Flat(color));
        self
    }

    /// Sets a per-state icon tint table.
    pub fn with_icon_colors(mut self, table: StateColorTable) -> Self {
        self.icon_colors = Some(ColorResolver::Table(table));
        self
    }

    /// Sets a flat shadow color.
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_colors = Some(ColorResolver::Flat(color));
        self
    }

    /// Sets a per-state shadow color table.
    pub fn with_shadow_colors(mut self, table: StateColorTable) -> Self {
        self.shadow_colors = Some(ColorResolver::Table(table));
        self
    }

    /// Sets the shadow geometry.
    pub fn with_shadow(mut self, shadow: ShadowSpec) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Styleable for StateIconCache {
    /// Applies every field the style carries, then regenerates once.
    ///
    /// The whole application runs under a deferred build, so a style
    /// touching several parameters costs a single compositing pass per
    /// state.
    fn apply_style(&mut self, style: &IconStyle) {
        self.defer_build();

        match &style.icon_colors {
            Some(ColorResolver::Flat(color)) => {
                self.set_icon_color(*color);
            }
            Some(ColorResolver::Table(table)) => {
                self.set_icon_colors(*table);
            }
            None => {}
        }

        match &style.shadow_colors {
            Some(ColorResolver::Flat(color)) => {
                self.set_shadow_color(*color);
            }
            Some(ColorResolver::Table(table)) => {
                self.set_shadow_colors(*table);
            }
            None => {}
        }

        if let Some(shadow) = style.shadow {
            self.set_shadow(shadow.radius, shadow.dx, shadow.dy);
        }

        self.build();
    }

    /// Exports the current settings, leaving no-effect defaults unset.
    fn export_style(&self) -> IconStyle {
        let export_resolver = |resolver: &ColorResolver| match resolver {
            ColorResolver::Flat(color) if color.is_transparent() => None,
            other => Some(other.clone()),
        };

        IconStyle {
            icon_colors: export_resolver(self.icon_colors()),
            shadow_colors: export_resolver(self.shadow_colors()),
            shadow: (self.shadow() != ShadowSpec::NONE).then(|| self.shadow()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
