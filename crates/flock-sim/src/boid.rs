//! One flocking agent: kinematic state, force accumulation, and integration.

use flock_core::{BoidId, BoidRng, SpawnVolume, SpeedLimits, Vec3};

/// A single flock member.
///
/// All boids are peers; there is no hierarchy.  A boid is created during a
/// population respawn and destroyed only when the population is reset or
/// resized — membership never changes mid-tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boid {
    /// World-space position, unconstrained except by boundary containment.
    pub position: Vec3,

    /// Current velocity.  Invariant: `|velocity| <= max_speed` after every
    /// [`integrate`][Self::integrate].
    pub velocity: Vec3,

    /// Per-tick force accumulator.  Invariant: zero immediately after every
    /// [`integrate`][Self::integrate], before the next tick's forces arrive.
    pub acceleration: Vec3,

    /// Unit facing direction for renderers, derived from velocity.  Holds its
    /// previous value while velocity is exactly zero (direction undefined).
    pub heading: Vec3,

    /// Upper bound on `|velocity|`.  Mutable at runtime; affects subsequent
    /// ticks only.
    pub max_speed: f32,

    /// Upper bound on the length of each clamped steering force.
    pub max_force: f32,
}

impl Boid {
    /// Construct a boid with explicit state.  Zero acceleration; heading is
    /// taken from the velocity direction (or +X for a motionless boid, so it
    /// is always a valid unit vector).
    pub fn new(position: Vec3, velocity: Vec3, limits: SpeedLimits) -> Self {
        let heading = if velocity.length_squared() > 0.0 {
            velocity.normalize()
        } else {
            Vec3::X
        };
        Self {
            position,
            velocity,
            acceleration: Vec3::ZERO,
            heading,
            max_speed: limits.max_speed,
            max_force: limits.max_force,
        }
    }

    /// Spawn a boid with randomized state from its own deterministic RNG:
    /// position uniform inside `volume`, velocity uniform per-axis in
    /// `[-1, 1)`.
    pub(crate) fn spawn(
        id:         BoidId,
        spawn_seed: u64,
        limits:     SpeedLimits,
        volume:     &SpawnVolume,
    ) -> Self {
        let mut rng = BoidRng::new(spawn_seed, id);
        let position = Vec3::new(
            rng.gen_range(-volume.half_extent..volume.half_extent),
            rng.gen_range(0.0..volume.height),
            rng.gen_range(-volume.half_extent..volume.half_extent),
        );
        let velocity = Vec3::new(
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
            rng.gen_range(-1.0f32..1.0),
        );
        Self::new(position, velocity, limits)
    }

    /// Add `force` to the per-tick accumulator.
    ///
    /// Called once per active behavior per tick; accumulation is commutative
    /// so order does not matter.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    /// Advance one discrete step: accumulate acceleration into velocity,
    /// clamp speed, move, reset the accumulator, and refresh the heading.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.clamp_length_max(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec3::ZERO;
        if self.velocity.length_squared() > 0.0 {
            self.heading = self.velocity.normalize();
        }
    }

    /// Current speed, `|velocity|`.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
