//! The icon compositor.
//!
//! [`compose`] turns a white-on-transparent silhouette into a single
//! finished icon bitmap: an optional drop shadow behind an optionally
//! tinted copy of the silhouette. It is a pure function — same inputs,
//! byte-identical output — with no view or surface context, so every
//! rendering branch is unit-testable.
//!
//! # Rendering strategies
//!
//! Accelerated surfaces only support the multiply color filter, not
//! blurring, so the shadow strategy depends on [`RenderMode`]:
//!
//! - [`RenderMode::Accelerated`]: the tinted silhouette is drawn
//!   directly at the shadow offset with hard edges. The radius only
//!   contributes canvas padding.
//! - [`RenderMode::Software`]: the tinted silhouette is placed at the
//!   offset inside a canvas-sized shadow layer and the whole layer is
//!   gaussian blurred, then composited at the origin. Offset and blur
//!   live in one layer pass because they cannot be combined through
//!   the accelerated filter path.
//!
//! The two strategies produce identical output only when the radius
//! is zero.

use image::{Rgba, RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::color::Color;

// ============================================================================
// ShadowSpec
// ============================================================================

/// Drop shadow geometry: blur radius and x/y offset, in pixels.
///
/// A zero radius with a nonzero offset yields a hard-edged offset
/// silhouette. A zero radius and zero offset with a non-sentinel
/// shadow color still draws a full-coverage shadow directly under the
/// icon; that is the documented behavior, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowSpec {
    /// Gaussian blur extent. Only honored on the software path.
    pub radius: f32,
    /// Horizontal shadow offset.
    pub dx: f32,
    /// Vertical shadow offset.
    pub dy: f32,
}

impl ShadowSpec {
    /// No blur, no offset.
    pub const NONE: Self = Self {
        radius: 0.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Creates a shadow spec. The radius is clamped to be non-negative.
    pub fn new(radius: f32, dx: f32, dy: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            dx,
            dy,
        }
    }

    /// Canvas padding reserved for the blur and translation, per axis.
    ///
    /// Negative offsets do not shrink the canvas below the source
    /// size; the shadow just clips at the canvas edge instead.
    pub(crate) fn padding(&self) -> (u32, u32) {
        (
            (self.radius + self.dx).max(0.0).floor() as u32,
            (self.radius + self.dy).max(0.0).floor() as u32,
        )
    }
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self::NONE
    }
}

// ============================================================================
// RenderMode
// ============================================================================

/// Whether the hosting surface renders with hardware acceleration.
///
/// Accelerated surfaces cannot blur, so the compositor needs the
/// capability as an explicit input rather than querying a live surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// CPU rendering; gaussian shadow blur is available.
    #[default]
    Software,
    /// Hardware-accelerated rendering; shadows keep hard edges.
    Accelerated,
}

// ============================================================================
// compose
// ============================================================================

/// Composites one icon bitmap from a silhouette source.
///
/// The source's shape is carried by its alpha channel; tinting means
/// multiplying a solid color under that mask. [`Color::TRANSPARENT`]
/// skips the corresponding layer: a sentinel icon color draws the
/// silhouette unmodified, a sentinel shadow color draws no shadow at
/// all.
///
/// The output canvas is `source.width + floor(radius + dx)` by
/// `source.height + floor(radius + dy)`. The padding is reserved even
/// when the shadow layer is skipped, mirroring the behavior styled
/// layouts already depend on. A 0×0 source yields a padding-only
/// canvas, not an error.
///
/// ```
/// use icon_states::{Color, RenderMode, ShadowSpec, compose};
/// use image::{Rgba, RgbaImage};
///
/// let source = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
/// let icon = compose(
///     &source,
///     Color::rgba(255, 0, 0, 255),
///     Color::TRANSPARENT,
///     ShadowSpec::NONE,
///     RenderMode::Software,
/// );
/// assert_eq!(icon.dimensions(), (10, 10));
/// assert_eq!(icon.get_pixel(0, 0).0, [255, 0, 0, 255]);
/// ```
pub fn compose(
    source: &RgbaImage,
    icon_color: Color,
    shadow_color: Color,
    shadow: ShadowSpec,
    mode: RenderMode,
) -> RgbaImage {
    let (pad_x, pad_y) = shadow.padding();
    let mut canvas = RgbaImage::new(source.width() + pad_x, source.height() + pad_y);

    let offset_x = shadow.dx.floor() as i64;
    let offset_y = shadow.dy.floor() as i64;

    if !shadow_color.is_transparent() {
        let tinted = multiply_tint(source, shadow_color);
        match mode {
            RenderMode::Accelerated => {
                // Multiply filter only; blur is unavailable here.
                composite_over(&mut canvas, &tinted, offset_x, offset_y);
            }
            RenderMode::Software => {
                let mut layer = RgbaImage::new(canvas.width(), canvas.height());
                composite_over(&mut layer, &tinted, offset_x, offset_y);
                if shadow.radius > 0.0 {
                    layer = imageops::blur(&layer, radius_to_sigma(shadow.radius));
                }
                composite_over(&mut canvas, &layer, 0, 0);
            }
        }
    }

    if icon_color.is_transparent() {
        composite_over(&mut canvas, source, 0, 0);
    } else {
        composite_over(&mut canvas, &multiply_tint(source, icon_color), 0, 0);
    }

    canvas
}

/// Composites a tinted icon with no shadow.
///
/// Shorthand for [`compose`] with a sentinel shadow color and
/// [`ShadowSpec::NONE`].
pub fn compose_tinted(source: &RgbaImage, icon_color: Color) -> RgbaImage {
    compose(
        source,
        icon_color,
        Color::TRANSPARENT,
        ShadowSpec::NONE,
        RenderMode::Software,
    )
}

/// Composites an untinted icon over a shadow.
///
/// Shorthand for [`compose`] with a sentinel icon color, so the
/// silhouette keeps its original color.
pub fn compose_shadowed(
    source: &RgbaImage,
    shadow_color: Color,
    shadow: ShadowSpec,
    mode: RenderMode,
) -> RgbaImage {
    compose(source, Color::TRANSPARENT, shadow_color, shadow, mode)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Maps a blur radius to a gaussian sigma, using Skia's convention.
fn radius_to_sigma(radius: f32) -> f32 {
    radius * 0.57735 + 0.5
}

/// Multiplies every pixel of the source by a tint color, alpha
/// included.
fn multiply_tint(source: &RgbaImage, tint: Color) -> RgbaImage {
    let [tr, tg, tb, ta] = tint.channels();
    let mut result = source.clone();

    for pixel in result.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [
            multiply_channel(r, tr),
            multiply_channel(g, tg),
            multiply_channel(b, tb),
            multiply_channel(a, ta),
        ];
    }

    result
}

/// Rounded 8-bit channel multiply.
fn multiply_channel(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

/// Draws `src` over `dest` at the given offset with source-over alpha
/// blending, clipping at the destination bounds.
fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let dest_width = dest.width() as i64;
    let dest_height = dest.height() as i64;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let tx = x + sx as i64;
            let ty = y + sy as i64;

            if tx < 0 || ty < 0 || tx >= dest_width || ty >= dest_height {
                continue;
            }

            let over = src.get_pixel(sx, sy);
            let under = dest.get_pixel(tx as u32, ty as u32);
            dest.put_pixel(tx as u32, ty as u32, blend_over(*over, *under));
        }
    }
}

/// Source-over blend of two straight-alpha RGBA pixels.
fn blend_over(over: Rgba<u8>, under: Rgba<u8>) -> Rgba<u8> {
    let oa = over[3] as f32 / 255.0;
    let ua = under[3] as f32 / 255.0;

    let out_a = oa + ua * (1.0 - oa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |o: u8, u: u8| -> u8 {
        let of = o as f32 / 255.0;
        let uf = u as f32 / 255.0;
        let out = (of * oa + uf * ua * (1.0 - oa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(over[0], under[0]),
        blend(over[1], under[1]),
        blend(over[2], under[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn white_square(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]))
    }

    /// A source with varied channel values, for identity checks.
    fn gradient_source() -> RgbaImage {
        RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([
                (x * 32) as u8,
                (y * 32) as u8,
                128,
                (255 - x * 16 - y * 8) as u8,
            ])
        })
    }

    #[test]
    fn red_tint_on_white_square() {
        let out = compose(
            &white_square(10),
            Color::rgba(255, 0, 0, 255),
            Color::TRANSPARENT,
            ShadowSpec::NONE,
            RenderMode::Software,
        );

        assert_eq!(out.dimensions(), (10, 10));
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [255, 0, 0, 255]);
        }
    }

    #[test]
    fn offset_blue_shadow_under_white_icon() {
        // Untinted white icon over a hard blue shadow offset by (5, 5).
        let out = compose(
            &white_square(10),
            Color::TRANSPARENT,
            Color::rgba(0, 0, 255, 255),
            ShadowSpec::new(0.0, 5.0, 5.0),
            RenderMode::Software,
        );

        assert_eq!(out.dimensions(), (15, 15));

        // Icon layer covers the top-left 10x10 block.
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(9, 9).0, [255, 255, 255, 255]);

        // The L-shaped remainder of [5,15)^2 shows the shadow.
        assert_eq!(out.get_pixel(12, 7).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(7, 12).0, [0, 0, 255, 255]);
        assert_eq!(out.get_pixel(14, 14).0, [0, 0, 255, 255]);

        // Corners covered by neither layer stay transparent.
        assert_eq!(out.get_pixel(14, 0).0[3], 0);
        assert_eq!(out.get_pixel(0, 14).0[3], 0);
    }

    #[test]
    fn sentinel_shadow_skips_layer_but_keeps_padding() {
        let red = Color::rgba(255, 0, 0, 255);
        let out = compose(
            &white_square(10),
            red,
            Color::TRANSPARENT,
            ShadowSpec::new(3.0, 2.0, 1.0),
            RenderMode::Software,
        );

        // floor(3 + 2) = 5, floor(3 + 1) = 4.
        assert_eq!(out.dimensions(), (15, 14));

        // Identical to the single-layer composite inside the source
        // rect, transparent everywhere else.
        let flat = compose_tinted(&white_square(10), red);
        for (x, y, pixel) in out.enumerate_pixels() {
            if x < 10 && y < 10 {
                assert_eq!(pixel, flat.get_pixel(x, y));
            } else {
                assert_eq!(pixel.0[3], 0, "padding at ({x}, {y}) should be empty");
            }
        }
    }

    #[test]
    fn sentinel_icon_color_preserves_source_pixels() {
        let source = gradient_source();
        let out = compose(
            &source,
            Color::TRANSPARENT,
            Color::TRANSPARENT,
            ShadowSpec::NONE,
            RenderMode::Software,
        );

        assert_eq!(out.as_raw(), source.as_raw());
    }

    #[test]
    fn white_tint_is_identity() {
        let source = gradient_source();
        let out = compose_tinted(&source, Color::WHITE);
        assert_eq!(out.as_raw(), source.as_raw());
    }

    #[test]
    fn output_dimensions_follow_radius_and_offsets() {
        let source = white_square(10);
        let shadow_color = Color::rgba(0, 0, 0, 128);

        for (radius, dx, dy, w, h) in [
            (0.0, 0.0, 0.0, 10, 10),
            (4.0, 0.0, 0.0, 14, 14),
            (2.5, 1.25, 0.0, 13, 12), // floor(3.75) = 3, floor(2.5) = 2
            (0.0, 7.0, 3.0, 17, 13),
        ] {
            for mode in [RenderMode::Software, RenderMode::Accelerated] {
                let out = compose(
                    &source,
                    Color::WHITE,
                    shadow_color,
                    ShadowSpec::new(radius, dx, dy),
                    mode,
                );
                assert_eq!(
                    out.dimensions(),
                    (w, h),
                    "radius={radius} dx={dx} dy={dy} mode={mode:?}"
                );
            }
        }
    }

    #[test]
    fn negative_offset_does_not_shrink_canvas() {
        let out = compose(
            &white_square(10),
            Color::WHITE,
            Color::BLACK,
            ShadowSpec::new(0.0, -20.0, -20.0),
            RenderMode::Accelerated,
        );
        assert_eq!(out.dimensions(), (10, 10));
    }

    #[test]
    fn compose_is_idempotent() {
        let source = gradient_source();
        let icon = Color::rgba(30, 144, 255, 255);
        let shadow_color = Color::rgba(0, 0, 0, 160);
        let shadow = ShadowSpec::new(3.0, 2.0, 2.0);

        // Exercise the blur path as well; it must be deterministic too.
        let first = compose(&source, icon, shadow_color, shadow, RenderMode::Software);
        let second = compose(&source, icon, shadow_color, shadow, RenderMode::Software);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn zero_radius_paths_are_identical() {
        let source = gradient_source();
        let shadow = ShadowSpec::new(0.0, 3.0, 2.0);
        let shadow_color = Color::rgba(20, 20, 20, 200);

        let soft = compose(&source, Color::WHITE, shadow_color, shadow, RenderMode::Software);
        let fast = compose(
            &source,
            Color::WHITE,
            shadow_color,
            shadow,
            RenderMode::Accelerated,
        );
        assert_eq!(soft.as_raw(), fast.as_raw());
    }

    #[test]
    fn software_blur_spreads_past_the_silhouette_edge() {
        let out = compose_shadowed(
            &white_square(10),
            Color::BLACK,
            ShadowSpec::new(4.0, 0.0, 0.0),
            RenderMode::Software,
        );

        assert_eq!(out.dimensions(), (14, 14));
        // One pixel past the hard edge: empty without blur, shaded with it.
        assert!(
            out.get_pixel(11, 5).0[3] > 0,
            "blur should bleed into the padding"
        );

        let hard = compose_shadowed(
            &white_square(10),
            Color::BLACK,
            ShadowSpec::new(4.0, 0.0, 0.0),
            RenderMode::Accelerated,
        );
        assert_eq!(hard.get_pixel(11, 5).0[3], 0, "accelerated path cannot blur");
    }

    #[test]
    fn zero_offset_shadow_still_draws_under_the_icon() {
        // Semi-transparent icon over a full-coverage shadow at (0, 0).
        let source = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 128]));
        let out = compose(
            &source,
            Color::TRANSPARENT,
            Color::rgba(255, 0, 0, 255),
            ShadowSpec::NONE,
            RenderMode::Software,
        );

        // The red shadow shows through the half-transparent silhouette.
        let pixel = out.get_pixel(1, 1).0;
        assert!(pixel[0] > 200, "red should bleed through, got {pixel:?}");
        assert!(pixel[3] > 128, "shadow coverage should raise the alpha");
    }

    #[test]
    fn zero_size_source_yields_padding_only_canvas() {
        let empty = RgbaImage::new(0, 0);
        let out = compose(
            &empty,
            Color::rgba(255, 0, 0, 255),
            Color::TRANSPARENT,
            ShadowSpec::new(2.0, 1.0, 1.0),
            RenderMode::Software,
        );

        assert_eq!(out.dimensions(), (3, 3));
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn multiply_channel_extremes() {
        assert_eq!(multiply_channel(255, 255), 255);
        assert_eq!(multiply_channel(255, 0), 0);
        assert_eq!(multiply_channel(0, 255), 0);
        assert_eq!(multiply_channel(200, 255), 200);
        assert_eq!(multiply_channel(128, 128), 64);
    }
}
