//! Per-state icon cache.
//!
//! [`StateIconCache`] owns one composited bitmap per interaction
//! state, derived from a silhouette source and the current tint/shadow
//! parameters. Any mutator regenerates all six bitmaps before it
//! returns, unless a deferred build is in progress; the stored table
//! is only ever replaced as a whole, so a lookup can never observe a
//! mix of old and new images.

use image::RgbaImage;

use crate::color::{Color, ColorResolver, StateColorTable};
use crate::compose::{RenderMode, ShadowSpec, compose};
use crate::error::IconError;
use crate::state::{InteractionState, StateFlags};

// ============================================================================
// StateIconCache
// ============================================================================

/// Holds one composited icon per [`InteractionState`].
///
/// Setters chain, so a cache is typically configured in one statement.
/// Wrap a burst of changes in [`defer_build`](Self::defer_build) /
/// [`build`](Self::build) to regenerate once instead of per setter:
///
/// ```
/// use icon_states::{Color, StateFlags, StateIconCache};
/// use image::{Rgba, RgbaImage};
///
/// let mut cache = StateIconCache::new();
/// cache
///     .defer_build()
///     .set_source(RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255])))
///     .set_icon_color(Color::rgba(0x21, 0x96, 0xf3, 0xff))
///     .set_shadow_color(Color::rgba(0, 0, 0, 0x80))
///     .set_shadow(0.0, 2.0, 2.0)
///     .build();
///
/// let icon = cache.image_for(StateFlags::ENABLED).unwrap();
/// assert_eq!(icon.dimensions(), (18, 18));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateIconCache {
    source: Option<RgbaImage>,
    icon_colors: ColorResolver,
    shadow_colors: ColorResolver,
    shadow: ShadowSpec,
    mode: RenderMode,
    wait_for_build: bool,
    icons: Option<[RgbaImage; InteractionState::COUNT]>,
}

impl StateIconCache {
    /// Creates an empty cache with software rendering and no tints.
    ///
    /// The cache stays unbuilt until a source image is set.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Mutators ----

    /// Sets the silhouette source image.
    pub fn set_source(&mut self, image: RgbaImage) -> &mut Self {
        self.source = Some(image);
        self.regenerate();
        self
    }

    /// Decodes and sets the source image from encoded bytes (PNG etc.).
    ///
    /// Fails with [`IconError::InvalidInput`] when the bytes are
    /// missing or not a decodable image; the cache keeps its previous
    /// source in that case.
    pub fn set_source_encoded(&mut self, bytes: &[u8]) -> Result<&mut Self, IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidInput("no image data".into()));
        }
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| IconError::InvalidInput(e.to_string()))?
            .to_rgba8();
        Ok(self.set_source(decoded))
    }

    /// Sets a flat icon tint, clearing any per-state table.
    pub fn set_icon_color(&mut self, color: Color) -> &mut Self {
        self.icon_colors = ColorResolver::Flat(color);
        self.regenerate();
        self
    }

    /// Sets a per-state icon tint table, clearing any flat color.
    pub fn set_icon_colors(&mut self, table: StateColorTable) -> &mut Self {
        self.icon_colors = ColorResolver::Table(table);
        self.regenerate();
        self
    }

    /// Sets a flat shadow color, clearing any per-state table.
    pub fn set_shadow_color(&mut self, color: Color) -> &mut Self {
        self.shadow_colors = ColorResolver::Flat(color);
        self.regenerate();
        self
    }

    /// Sets a per-state shadow color table, clearing any flat color.
    pub fn set_shadow_colors(&mut self, table: StateColorTable) -> &mut Self {
        self.shadow_colors = ColorResolver::Table(table);
        self.regenerate();
        self
    }

    /// Sets the shadow blur radius and offset.
    pub fn set_shadow(&mut self, radius: f32, dx: f32, dy: f32) -> &mut Self {
        self.shadow = ShadowSpec::new(radius, dx, dy);
        self.regenerate();
        self
    }

    /// Sets the rendering capability used for shadow blurring.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> &mut Self {
        self.mode = mode;
        self.regenerate();
        self
    }

    /// Suspends automatic regeneration; setters only stage values
    /// until [`build`](Self::build) is called.
    pub fn defer_build(&mut self) -> &mut Self {
        self.wait_for_build = true;
        self
    }

    /// Clears the deferred flag and runs one regeneration pass.
    pub fn build(&mut self) -> &mut Self {
        self.wait_for_build = false;
        self.regenerate();
        self
    }

    // ---- Lookup ----

    /// Returns the stored icon for the state the flag set resolves to.
    ///
    /// Fails with [`IconError::NotBuilt`] if no regeneration has ever
    /// completed.
    pub fn image_for(&self, flags: StateFlags) -> Result<&RgbaImage, IconError> {
        let icons = self.icons.as_ref().ok_or(IconError::NotBuilt)?;
        Ok(&icons[InteractionState::from_flags(flags).index()])
    }

    /// Returns the stored icon for an exact state.
    pub fn image_for_state(&self, state: InteractionState) -> Result<&RgbaImage, IconError> {
        let icons = self.icons.as_ref().ok_or(IconError::NotBuilt)?;
        Ok(&icons[state.index()])
    }

    // ---- Accessors ----

    /// Whether at least one regeneration pass has completed.
    pub fn is_built(&self) -> bool {
        self.icons.is_some()
    }

    /// The current source image, if one is set.
    pub fn source(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    /// The current icon tint resolver.
    pub fn icon_colors(&self) -> &ColorResolver {
        &self.icon_colors
    }

    /// The current shadow color resolver.
    pub fn shadow_colors(&self) -> &ColorResolver {
        &self.shadow_colors
    }

    /// The current shadow geometry.
    pub fn shadow(&self) -> ShadowSpec {
        self.shadow
    }

    /// The current rendering capability.
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    // ---- Regeneration ----

    /// Recomposes all six state icons and swaps the table in as a unit.
    ///
    /// A documented no-op while a deferred build is pending or while no
    /// source image is set; "not configured yet" is an expected state
    /// during incremental setup, not an error.
    fn regenerate(&mut self) {
        if self.wait_for_build {
            return;
        }
        let Some(source) = self.source.as_ref() else {
            return;
        };

        let fresh = InteractionState::ALL.map(|state| {
            compose(
                source,
                self.icon_colors.resolve(state),
                self.shadow_colors.resolve(state),
                self.shadow,
                self.mode,
            )
        });
        self.icons = Some(fresh);
    }
}

// ============================================================================
// Tests
// ============================================================================
