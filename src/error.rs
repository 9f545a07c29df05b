//! Crate error type.
//!
//! A single enum covers both failure modes the library can surface.
//! Neither is transient: both indicate a contract violation at the call
//! site, so there is no retry machinery and no silent defaulting.

/// Errors surfaced by the compositor pipeline and the state cache.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The decode boundary was handed missing or undecodable source bytes.
    #[error("invalid source image: {0}")]
    InvalidInput(String),

    /// A state lookup was attempted before any regeneration completed.
    ///
    /// Returned by [`StateIconCache::image_for`](crate::StateIconCache::image_for)
    /// when no source image has been set yet, or while a deferred build
    /// has never been flushed.
    #[error("icon cache has not been built yet")]
    NotBuilt,
}
