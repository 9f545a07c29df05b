//! icon-states: Per-interaction-state icon compositing
//!
//! This crate turns a single white-silhouette source image into one
//! precomposited bitmap per interaction state (disabled, checked,
//! pressed, focused, selected, enabled), each with its own tint and
//! optional drop shadow.
//!
//! # Example
//!
//! ```
//! use icon_states::{Color, StateColorTable, StateFlags, StateIconCache};
//! use image::{Rgba, RgbaImage};
//!
//! let silhouette = RgbaImage::from_pixel(24, 24, Rgba([255, 255, 255, 255]));
//!
//! let mut cache = StateIconCache::new();
//! cache
//!     .defer_build()
//!     .set_source(silhouette)
//!     .set_icon_colors(
//!         StateColorTable::new(Color::rgba(0xee, 0xee, 0xee, 0xff))
//!             .pressed(Color::rgba(0x21, 0x96, 0xf3, 0xff))
//!             .disabled(Color::rgba(0x88, 0x88, 0x88, 0x80)),
//!     )
//!     .set_shadow_color(Color::rgba(0, 0, 0, 0x66))
//!     .set_shadow(0.0, 2.0, 2.0)
//!     .build();
//!
//! // The hosting view feeds its current flags in at draw time.
//! let flags = StateFlags::ENABLED.with_pressed(true);
//! let icon = cache.image_for(flags).unwrap();
//! assert_eq!(icon.dimensions(), (26, 26));
//! ```
//!
//! # Pure compositing
//!
//! The compositor behind the cache is independently callable: see
//! [`compose`] for the layering rules and [`RenderMode`] for the
//! software/accelerated shadow strategies.
//!
//! # Serializable Styles
//!
//! Styling parameters round-trip through JSON via [`IconStyle`] and
//! the [`Styleable`] trait, for storage or cross-process transfer.

mod cache;
mod color;
mod compose;
mod error;
mod profile;
mod state;

pub use cache::StateIconCache;
pub use color::{Color, ColorResolver, StateColorTable};
pub use compose::{RenderMode, ShadowSpec, compose, compose_shadowed, compose_tinted};
pub use error::IconError;
pub use profile::{IconStyle, Styleable};
pub use state::{InteractionState, StateFlags};
