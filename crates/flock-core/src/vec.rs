//! 3-D vector surface for the steering math.
//!
//! The engine uses `glam`'s single-precision [`Vec3`] everywhere: positions,
//! velocities, accelerations, and headings.  `f32` is what renderers consume
//! and gives more than enough precision for a world a few hundred units
//! across.
//!
//! `glam` already provides add/sub/scale, `length`, `normalize_or_zero`, and
//! `clamp_length_max`; the one steering primitive it lacks is "rescale to an
//! exact length", supplied here as [`VecExt::with_length`].

pub use glam::Vec3;

/// Steering helpers layered on top of [`Vec3`].
pub trait VecExt {
    /// The vector rescaled to exactly `length`.
    ///
    /// A zero vector has no direction to preserve and stays zero (never NaN),
    /// which is the defined fallback for degenerate steering aggregates.
    fn with_length(self, length: f32) -> Vec3;
}

impl VecExt for Vec3 {
    #[inline]
    fn with_length(self, length: f32) -> Vec3 {
        self.normalize_or_zero() * length
    }
}
