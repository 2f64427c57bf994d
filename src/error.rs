//! Scene and camera construction errors.

use thiserror::Error;

/// Errors surfaced while assembling a camera or scene.
///
/// The render pipeline itself is a pure numeric computation with no
/// recoverable errors; invalid configurations are rejected here, before a
/// render starts.
#[derive(Debug, Error)]
pub enum Error {
    /// The camera basis cannot be derived: the up vector is parallel to the
    /// view direction, or the aim point coincides with the position.
    #[error("degenerate camera basis: up vector parallel to the view direction")]
    DegenerateCamera,

    /// A sphere was built with a radius that cannot produce a surface.
    /// Negative radii are legal (they flip the outward normal); zero and
    /// non-finite radii are not.
    #[error("invalid sphere radius {radius}: must be finite and non-zero")]
    InvalidSphere {
        /// The rejected radius.
        radius: f32,
    },
}
